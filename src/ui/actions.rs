//! Action enum (Intent)
//!
//! Key presses are translated into these before reaching the form

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    ToggleUnit,
    Calculate,

    // Text field editing
    Input(char),
    DeleteChar, // Backspace
    ClearField, // Delete
}
