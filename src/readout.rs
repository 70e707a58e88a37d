//! Presentation conventions for hosts displaying a model.
//!
//! The core works in radians on already-parsed numbers. A host that shows
//! editable text fields needs the conversions in this module: text to number
//! with a NaN fallback, degrees in and out, and outputs rounded to two decimal
//! digits.

use std::fmt;

use crate::model::OpticalModel;

/// Number of decimal digits shown for derived outputs.
pub const DISPLAY_DIGITS: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_falls_back_to_nan() {
        assert_eq!(parse_field("1.5"), 1.5);
        assert_eq!(parse_field("  30 "), 30.0);
        assert_eq!(parse_field("-2e-1"), -0.2);
        assert!(parse_field("").is_nan());
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("1,5").is_nan());
    }

    #[test]
    fn round_to_two_digits() {
        assert_eq!(round_to(0.04000000001, 2), 0.04);
        assert_eq!(round_to(41.8103, 2), 41.81);
        assert_eq!(round_to(-30.0, 2), -30.0);
        assert_eq!(round_to(0.125, 0), 0.0);
        // halfway cases go to the even neighbour
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn readout_of_default_model() {
        let model = OpticalModel::compute(1.0, 2.0, 30f64.to_radians());
        let readout = Readout::from_model(&model);
        assert_eq!(readout.incidence, 30.0);
        assert_eq!(readout.reflection, -30.0);
        assert_eq!(readout.refraction, 14.48);
        assert_eq!(readout.brewster, 63.43);
        assert!(readout.critical.is_nan());
        assert!(!readout.tir_warning);
    }

    #[test]
    fn readout_flags_tir() {
        let model = OpticalModel::compute(1.5, 1.0, 60f64.to_radians());
        let readout = Readout::from_model(&model);
        assert!(readout.tir_warning);
        assert_eq!(readout.reflectance_te, 1.0);
        assert_eq!(readout.reflectance_tm, 1.0);
        assert!(readout.to_string().contains(TIR_WARNING));
    }

    #[test]
    fn fields_convert_degrees() {
        let fields = FieldInputs::new("1", "1.5", "90");
        let (n1, n2, theta1) = fields.parse();
        assert_eq!(n1, 1.0);
        assert_eq!(n2, 1.5);
        assert!((theta1 - std::f64::consts::FRAC_PI_2).abs() < 1e-15);

        let fields = FieldInputs::from_model(&OpticalModel::compute(1.0, 2.0, 30f64.to_radians()));
        assert_eq!(fields.n1, "1");
        assert_eq!(fields.n2, "2");
        assert_eq!(fields.incidence, "30");
    }
}

/// Label shown when the model is in the total internal reflection regime.
pub const TIR_WARNING: &str = "! total internal reflection";

/// Parses a text field, mapping anything unparseable to NaN.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Rounds to `digits` decimal places, halfway cases to even.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

/// Raw text of the three editable fields, incidence in degrees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldInputs {
    pub n1: String,
    pub n2: String,
    pub incidence: String,
}

impl FieldInputs {
    pub fn new(n1: &str, n2: &str, incidence: &str) -> Self {
        Self {
            n1: n1.to_string(),
            n2: n2.to_string(),
            incidence: incidence.to_string(),
        }
    }

    /// Field contents matching a model's inputs.
    pub fn from_model(model: &OpticalModel) -> Self {
        Self {
            n1: model.n1.to_string(),
            n2: model.n2.to_string(),
            incidence: round_to(model.incidence_angle.to_degrees(), DISPLAY_DIGITS).to_string(),
        }
    }

    /// Returns `(n1, n2, incidence)` with the incidence converted to radians.
    pub fn parse(&self) -> (f64, f64, f64) {
        (
            parse_field(&self.n1),
            parse_field(&self.n2),
            parse_field(&self.incidence).to_radians(),
        )
    }
}

/// Display values of a model: angles in degrees, everything rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub n1: f64,
    pub n2: f64,
    pub incidence: f64,
    pub refraction: f64,
    pub reflection: f64,
    pub critical: f64,
    pub brewster: f64,
    pub reflectance_te: f64,
    pub reflectance_tm: f64,
    pub tir_warning: bool,
}

impl Readout {
    pub fn from_model(model: &OpticalModel) -> Self {
        let angle = |rad: f64| round_to(rad.to_degrees(), DISPLAY_DIGITS);
        Self {
            n1: model.n1,
            n2: model.n2,
            incidence: angle(model.incidence_angle),
            refraction: angle(model.refraction_angle),
            reflection: angle(model.reflection_angle),
            critical: angle(model.critical_angle),
            brewster: angle(model.brewster_angle),
            reflectance_te: round_to(model.reflectance_te, DISPLAY_DIGITS),
            reflectance_tm: round_to(model.reflectance_tm, DISPLAY_DIGITS),
            tir_warning: model.is_total_internal_reflection(),
        }
    }

    /// Labelled output rows, in display order.
    pub fn rows(&self) -> [(&'static str, f64); 9] {
        [
            ("n1", self.n1),
            ("n2", self.n2),
            ("θ1", self.incidence),
            ("θ2", self.refraction),
            ("θr", self.reflection),
            ("θk", self.critical),
            ("θb", self.brewster),
            ("re", self.reflectance_te),
            ("rm", self.reflectance_tm),
        ]
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Readout:")?;
        for (label, value) in self.rows() {
            writeln!(f, "  {:<3} {}", label, value)?;
        }
        if self.tir_warning {
            writeln!(f, "{}", TIR_WARNING)?;
        }
        Ok(())
    }
}
