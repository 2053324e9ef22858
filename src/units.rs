//! Conversion between pixel space and physical units.

use serde::{Deserialize, Serialize};

/// Centimeters per inch.
const CM_PER_INCH: f64 = 2.54;

/// Millimeters per inch.
const MM_PER_INCH: f64 = 25.4;

/// Unit the ruler is graduated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pixels,
    Inches,
    Centimeters,
    Millimeters,
}

impl Unit {
    /// All units, in the order the settings panel lists them.
    pub const ALL: [Unit; 4] = [
        Unit::Pixels,
        Unit::Inches,
        Unit::Centimeters,
        Unit::Millimeters,
    ];

    /// Short symbol for the unit (e.g., "px", "cm").
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returns how many screen pixels make up one `unit` at the given DPI.
///
/// `dpi` is expected to be positive; the config layer clamps it.
pub fn pixels_per_unit(unit: Unit, dpi: f64) -> f64 {
    match unit {
        Unit::Pixels => 1.0,
        Unit::Inches => dpi,
        Unit::Centimeters => dpi / CM_PER_INCH,
        Unit::Millimeters => dpi / MM_PER_INCH,
    }
}

/// Spacing between adjacent ticks, in the unit itself.
///
/// This is the measuring granularity and does not depend on DPI or zoom.
pub fn tick_step(unit: Unit) -> f64 {
    match unit {
        Unit::Pixels => 10.0,
        Unit::Inches => 0.125,
        Unit::Centimeters => 0.1,
        Unit::Millimeters => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_identity() {
        assert_eq!(pixels_per_unit(Unit::Pixels, 96.0), 1.0);
        assert_eq!(pixels_per_unit(Unit::Pixels, 144.0), 1.0);
    }

    #[test]
    fn physical_units_follow_dpi() {
        for dpi in [72.0, 96.0, 110.5, 200.0] {
            assert_eq!(pixels_per_unit(Unit::Inches, dpi), dpi);
            assert_eq!(pixels_per_unit(Unit::Millimeters, dpi), dpi / 25.4);

            let cm = pixels_per_unit(Unit::Centimeters, dpi);
            let mm = pixels_per_unit(Unit::Millimeters, dpi);
            assert!((cm - 10.0 * mm).abs() < 1e-9, "cm={cm} mm={mm}");
        }
    }

    #[test]
    fn steps_match_unit_granularity() {
        assert_eq!(tick_step(Unit::Pixels), 10.0);
        assert_eq!(tick_step(Unit::Millimeters), 1.0);
        assert_eq!(tick_step(Unit::Centimeters), 0.1);
        assert_eq!(tick_step(Unit::Inches), 0.125);
    }

    #[test]
    fn unit_serializes_lowercase() {
        let unit: Unit = ron::from_str("centimeters").unwrap();
        assert_eq!(unit, Unit::Centimeters);
        assert_eq!(Unit::Inches.to_string(), "in");
    }
}
