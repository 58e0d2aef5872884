use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit the height field is typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    M,
}

impl HeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::M => "m",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            HeightUnit::Cm => HeightUnit::M,
            HeightUnit::M => HeightUnit::Cm,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cm" => Ok(HeightUnit::Cm),
            "m" => Ok(HeightUnit::M),
            other => Err(format!("unknown height unit '{}'", other)),
        }
    }
}

/// Which input a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Height,
    Weight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Height => f.write_str("height"),
            Field::Weight => f.write_str("weight"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is empty")]
    Missing(Field),

    #[error("{field} '{raw}' is not a number")]
    NotANumber { field: Field, raw: String },

    #[error("{0} must not be negative")]
    Negative(Field),

    #[error("height must be greater than zero")]
    ZeroHeight,

    #[error("bmi is out of range for height {height_m} m and weight {weight_kg} kg")]
    OutOfRange { height_m: f64, weight_kg: f64 },
}

/// Health classification of a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Status text shown under the value.
    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Aşağı çəki",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Artıq çəki",
            BmiBand::Obese => "Obezite",
        }
    }

    /// Hex color token of the result banner.
    pub fn color(&self) -> &'static str {
        match self {
            BmiBand::Underweight | BmiBand::Overweight => "#ffeb3b",
            BmiBand::Normal => "#4caf50",
            BmiBand::Obese => "#f44336",
        }
    }
}

/// Outcome of one successful calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// Unrounded quotient, used for classification.
    pub value: f64,
    pub rounded: f64,
    pub band: BmiBand,
}

impl BmiResult {
    fn from_value(value: f64) -> Self {
        Self {
            value,
            rounded: round_to_cents(value),
            band: classify(value),
        }
    }

    pub fn color(&self) -> &'static str {
        self.band.color()
    }

    /// Value with exactly two fractional digits, e.g. "34.60".
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.rounded)
    }
}

/// Raw user input for one calculation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement {
    pub height_raw: String,
    pub weight_raw: String,
    pub height_unit: HeightUnit,
}

impl Measurement {
    pub fn new(height_raw: impl Into<String>, weight_raw: impl Into<String>, height_unit: HeightUnit) -> Self {
        Self {
            height_raw: height_raw.into(),
            weight_raw: weight_raw.into(),
            height_unit,
        }
    }

    pub fn compute(&self) -> Result<BmiResult, ValidationError> {
        compute_bmi(&self.height_raw, &self.weight_raw, self.height_unit)
    }
}

/// Parses one form field into a finite, non-negative number.
pub fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    let not_a_number = || ValidationError::NotANumber {
        field,
        raw: raw.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }

    Ok(value)
}

pub fn height_in_meters(height: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => height / 100.0,
        HeightUnit::M => height,
    }
}

/// Ordered threshold lookup; values between bands fall through to `Obese`.
pub fn classify(value: f64) -> BmiBand {
    if value < 18.5 {
        BmiBand::Underweight
    } else if (18.5..=24.9).contains(&value) {
        BmiBand::Normal
    } else if (25.0..=29.9).contains(&value) {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    }
}

/// Rounds half away from zero to two decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn compute_bmi(height_raw: &str, weight_raw: &str, unit: HeightUnit) -> Result<BmiResult, ValidationError> {
    let height = parse_number(Field::Height, height_raw)?;
    let weight_kg = parse_number(Field::Weight, weight_raw)?;

    let height_m = height_in_meters(height, unit);
    if height_m == 0.0 {
        return Err(ValidationError::ZeroHeight);
    }

    let value = weight_kg / height_m.powi(2);
    if !value.is_finite() {
        return Err(ValidationError::OutOfRange { height_m, weight_kg });
    }

    Ok(BmiResult::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmi(height: &str, weight: &str, unit: HeightUnit) -> BmiResult {
        compute_bmi(height, weight, unit).unwrap()
    }

    #[test]
    fn test_normal_scenario_in_cm() {
        let result = bmi("180", "75", HeightUnit::Cm);
        assert_eq!(result.display_value(), "23.15");
        assert_eq!(result.band, BmiBand::Normal);
        assert_eq!(result.color(), "#4caf50");
    }

    #[test]
    fn test_underweight_scenario_in_m() {
        let result = bmi("1.60", "45", HeightUnit::M);
        assert_eq!(result.display_value(), "17.58");
        assert_eq!(result.band, BmiBand::Underweight);
        assert_eq!(result.color(), "#ffeb3b");
    }

    #[test]
    fn test_obese_scenario_keeps_trailing_zero() {
        let result = bmi("170", "100", HeightUnit::Cm);
        assert_eq!(result.display_value(), "34.60");
        assert_eq!(result.band, BmiBand::Obese);
        assert_eq!(result.color(), "#f44336");
    }

    #[test]
    fn test_units_are_equivalent() {
        let cm = bmi("170", "70", HeightUnit::Cm);
        let m = bmi("1.70", "70", HeightUnit::M);
        assert_eq!(cm.display_value(), m.display_value());
        assert_eq!(cm.band, m.band);
    }

    #[test]
    fn test_value_matches_formula() {
        let cases: [(f64, f64); 4] = [(150.0, 50.0), (165.0, 61.5), (192.0, 110.0), (100.0, 18.5)];
        for (height_cm, weight) in cases {
            let result = bmi(&height_cm.to_string(), &weight.to_string(), HeightUnit::Cm);
            let expected = weight / (height_cm / 100.0).powi(2);
            assert_eq!(result.value, expected);
            assert_eq!(result.rounded, (expected * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(bmi("1", "18.5", HeightUnit::M).band, BmiBand::Normal);
        assert_eq!(bmi("1", "24.9", HeightUnit::M).band, BmiBand::Normal);
        assert_eq!(bmi("1", "25", HeightUnit::M).band, BmiBand::Overweight);
        assert_eq!(bmi("1", "29.9", HeightUnit::M).band, BmiBand::Overweight);
        assert_eq!(bmi("1", "29.91", HeightUnit::M).band, BmiBand::Obese);
        assert_eq!(bmi("1", "18.49", HeightUnit::M).band, BmiBand::Underweight);
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        // 24.95 would display as "24.95" and sits in the gap between bands
        assert_eq!(classify(24.95), BmiBand::Obese);
        assert_eq!(classify(24.904), BmiBand::Obese);
        assert_eq!(classify(29.95), BmiBand::Obese);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(23.148148), 23.15);
    }

    #[test]
    fn test_empty_height_is_rejected() {
        assert_eq!(
            compute_bmi("", "70", HeightUnit::Cm),
            Err(ValidationError::Missing(Field::Height))
        );
        assert_eq!(
            compute_bmi("180", "  ", HeightUnit::Cm),
            Err(ValidationError::Missing(Field::Weight))
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        for raw in ["abc", "12abc", "1.2.3", "inf", "NaN", "-"] {
            assert!(matches!(
                compute_bmi(raw, "70", HeightUnit::Cm),
                Err(ValidationError::NotANumber { field: Field::Height, .. })
            ));
        }
        assert!(matches!(
            compute_bmi("180", "seventy", HeightUnit::Cm),
            Err(ValidationError::NotANumber { field: Field::Weight, .. })
        ));
    }

    #[test]
    fn test_negative_and_zero_inputs() {
        assert_eq!(
            compute_bmi("-180", "70", HeightUnit::Cm),
            Err(ValidationError::Negative(Field::Height))
        );
        assert_eq!(
            compute_bmi("180", "-1", HeightUnit::Cm),
            Err(ValidationError::Negative(Field::Weight))
        );
        assert_eq!(compute_bmi("0", "70", HeightUnit::Cm), Err(ValidationError::ZeroHeight));
        assert_eq!(bmi("180", "0", HeightUnit::Cm).band, BmiBand::Underweight);
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(matches!(
            compute_bmi("1e-200", "1e200", HeightUnit::M),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(bmi(" 180 ", "75\t", HeightUnit::Cm).display_value(), "23.15");
    }

    #[test]
    fn test_measurement_compute() {
        let measurement = Measurement::new("1.8", "75", HeightUnit::M);
        assert_eq!(measurement.compute().unwrap().display_value(), "23.15");
    }

    #[test]
    fn test_height_unit_parsing() {
        assert_eq!("cm".parse::<HeightUnit>(), Ok(HeightUnit::Cm));
        assert_eq!("m".parse::<HeightUnit>(), Ok(HeightUnit::M));
        assert!("ft".parse::<HeightUnit>().is_err());
        assert_eq!(HeightUnit::Cm.toggled(), HeightUnit::M);
        assert_eq!(HeightUnit::M.to_string(), "m");
    }
}
