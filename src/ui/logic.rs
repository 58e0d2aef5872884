//! Form reducer (Update/Dispatch)
//!
//! `FormView::reduce` maps (state, action) to the next state.
//! `App::dispatch` swaps the result in and logs calculations.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, Focus, FormView, Outcome};
use crate::mask;

impl App {
    /// Returns true when the app should exit
    pub fn dispatch(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            return true;
        }

        let next = std::mem::take(&mut self.view).reduce(action, Local::now());

        if action == Action::Calculate {
            match (&next.error, &next.outcome) {
                (Some(err), _) => info!(error = %err, unit = %next.unit, "validation failed"),
                (None, Some(outcome)) => debug!(
                    bmi = outcome.result.value,
                    band = ?outcome.result.band,
                    unit = %next.unit,
                    "bmi calculated"
                ),
                (None, None) => {}
            }
        }

        self.view = next;
        false
    }
}

impl FormView {
    pub fn reduce(self, action: Action, now: DateTime<Local>) -> Self {
        match action {
            Action::Quit => self,
            Action::FocusNext => Self {
                focus: self.focus.next(),
                ..self
            },
            Action::FocusPrev => Self {
                focus: self.focus.prev(),
                ..self
            },
            // The typed height is kept as-is when switching units
            Action::ToggleUnit => Self {
                unit: self.unit.toggled(),
                ..self
            },
            Action::Calculate => self.calculate(now),
            Action::Input(c) => self.edit_focused(|text| text.push(c)),
            Action::DeleteChar => self.edit_focused(|text| {
                text.pop();
            }),
            Action::ClearField => self.edit_focused(String::clear),
        }
    }

    /// A failure sets the error but leaves the previous outcome on screen.
    fn calculate(self, now: DateTime<Local>) -> Self {
        match self.measurement().compute() {
            Ok(result) => Self {
                outcome: Some(Outcome {
                    result,
                    calculated_at: now,
                }),
                error: None,
                ..self
            },
            Err(err) => Self {
                error: Some(err),
                ..self
            },
        }
    }

    /// Applies `edit` to the focused text field if the mask accepts the result.
    fn edit_focused(mut self, edit: impl FnOnce(&mut String)) -> Self {
        match self.focus {
            Focus::Height => {
                let mut candidate = self.height.clone();
                edit(&mut candidate);
                if mask::accepts_height(self.unit, &candidate) {
                    self.height = candidate;
                }
            }
            Focus::Weight => {
                let mut candidate = self.weight.clone();
                edit(&mut candidate);
                if mask::accepts_weight(&candidate) {
                    self.weight = candidate;
                }
            }
            Focus::Unit | Focus::Calculate => {}
        }
        self
    }
}
