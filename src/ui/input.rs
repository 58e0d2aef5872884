//! Key mapping (Input -> Action)

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Focus};

/// Maps a key to an action depending on which control has focus
pub fn get_action(focus: Focus, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Calculate),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Unit => match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => Some(Action::ToggleUnit),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Focus::Height | Focus::Weight => match key {
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Delete => Some(Action::ClearField),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::Calculate => match key {
            KeyCode::Char(' ') => Some(Action::Calculate),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Returns true when the app should exit
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.view.focus, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
