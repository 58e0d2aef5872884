//! Form state (Model)
//!
//! The whole form is one value. Every action yields a new `FormView`
//! which replaces the previous one in `App`.

use chrono::{DateTime, Local};

use crate::bmi::{BmiResult, HeightUnit, Measurement, ValidationError};

/// Application state owned by the event loop
pub struct App {
    pub view: FormView,
}

/// Focusable form controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Unit,
    #[default]
    Height,
    Weight,
    Calculate,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Unit, Focus::Height, Focus::Weight, Focus::Calculate];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Last successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub result: BmiResult,
    pub calculated_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub height: String,
    pub weight: String,
    pub unit: HeightUnit,
    pub focus: Focus,
    /// Survives later validation failures.
    pub outcome: Option<Outcome>,
    pub error: Option<ValidationError>,
}

impl FormView {
    pub fn new(unit: HeightUnit) -> Self {
        Self {
            height: String::new(),
            weight: String::new(),
            unit,
            focus: Focus::default(),
            outcome: None,
            error: None,
        }
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.height.clone(), self.weight.clone(), self.unit)
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new(HeightUnit::default())
    }
}

impl App {
    pub fn new(unit: HeightUnit) -> Self {
        Self {
            view: FormView::new(unit),
        }
    }
}
