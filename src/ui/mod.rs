//! UI module
//!
//! MVI (Model-View-Intent):
//! - Model (state.rs): `App` holding a single immutable `FormView`
//! - View (view/): pure functions from state to widgets
//! - Intent (actions.rs): key presses turned into semantic `Action`s
//! - Update (logic.rs): `FormView::reduce`

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
