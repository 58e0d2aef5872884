//! Keystroke-level input masks
//!
//! A mask only decides whether the edited text may replace the field's
//! current value. The engine validates again on calculation.

use std::sync::LazyLock;

use regex::Regex;

use crate::bmi::HeightUnit;

/// Whole centimeters only
static HEIGHT_CM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d*$").unwrap());

/// Meters with at most two fractional digits, e.g. "1.75", ".5", "2."
static HEIGHT_M: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d*\.?\d{0,2}$").unwrap());

/// Kilograms with an optional fractional part
static WEIGHT_KG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").unwrap());

pub fn accepts_height(unit: HeightUnit, candidate: &str) -> bool {
    match unit {
        HeightUnit::Cm => HEIGHT_CM.is_match(candidate),
        HeightUnit::M => HEIGHT_M.is_match(candidate),
    }
}

pub fn accepts_weight(candidate: &str) -> bool {
    WEIGHT_KG.is_match(candidate)
}
