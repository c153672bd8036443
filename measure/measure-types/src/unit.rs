//! Display units and measurement formatting.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MeasureError;

/// Unit used when presenting a measurement.
///
/// Measurements are always stored in meters; the unit only controls the
/// conversion applied at display time.
///
/// # Example
///
/// ```
/// use measure_types::Unit;
///
/// let unit: Unit = "feet".parse().unwrap();
/// assert_eq!(unit, Unit::Foot);
/// assert_eq!(unit.label(), "ft");
/// assert!((unit.convert(1.0) - 3.28084).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Inches (39.3701 per meter).
    #[default]
    Inch,
    /// Feet (3.28084 per meter).
    Foot,
    /// Centimeters (100 per meter).
    Centimeter,
    /// Meters.
    Meter,
}

impl Unit {
    /// All units, in the order they are usually offered to the user.
    pub const ALL: [Self; 4] = [Self::Inch, Self::Foot, Self::Centimeter, Self::Meter];

    /// Multiplier from meters to this unit.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Inch => 39.3701,
            Self::Foot => 3.28084,
            Self::Centimeter => 100.0,
            Self::Meter => 1.0,
        }
    }

    /// Short label printed after a formatted value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }

    /// Converts a length in meters into this unit.
    #[must_use]
    pub fn convert(self, meters: f64) -> f64 {
        meters * self.factor()
    }

    /// Formats a length in meters with one decimal place and the short label.
    #[must_use]
    pub fn format(self, meters: f64) -> String {
        format!("{:.1} {}", self.convert(meters), self.label())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = MeasureError;

    /// Parses short labels (`in`, `ft`, `cm`, `m`) and the long names shown
    /// on unit buttons (`inch`, `feet`, ...). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inch),
            "ft" | "foot" | "feet" => Ok(Self::Foot),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Self::Centimeter)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            _ => Err(MeasureError::unknown_unit(s)),
        }
    }
}

/// Converts a length in meters into `unit`.
///
/// # Example
///
/// ```
/// use measure_types::{Unit, to_display_unit};
///
/// assert!((to_display_unit(1.0, Unit::Centimeter) - 100.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn to_display_unit(meters: f64, unit: Unit) -> f64 {
    unit.convert(meters)
}

/// Formats a length in meters for display in `unit`.
///
/// The value is printed in fixed-point with one decimal place, followed by a
/// space and the unit's short label. Output does not depend on locale.
///
/// # Example
///
/// ```
/// use measure_types::{Unit, format_measurement};
///
/// assert_eq!(format_measurement(1.0, Unit::Inch), "39.4 in");
/// assert_eq!(format_measurement(0.25, Unit::Centimeter), "25.0 cm");
/// ```
#[must_use]
pub fn format_measurement(meters: f64, unit: Unit) -> String {
    unit.format(meters)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversion_factors() {
        assert_eq!(to_display_unit(1.0, Unit::Meter), 1.0);
        assert_eq!(to_display_unit(1.0, Unit::Centimeter), 100.0);
        assert_relative_eq!(to_display_unit(1.0, Unit::Inch), 39.3701);
        assert_relative_eq!(to_display_unit(1.0, Unit::Foot), 3.28084);
        assert_relative_eq!(to_display_unit(2.5, Unit::Centimeter), 250.0);
    }

    #[test]
    fn format_one_decimal() {
        assert_eq!(format_measurement(1.0, Unit::Inch), "39.4 in");
        assert_eq!(format_measurement(1.0, Unit::Foot), "3.3 ft");
        assert_eq!(format_measurement(1.0, Unit::Centimeter), "100.0 cm");
        assert_eq!(format_measurement(1.0, Unit::Meter), "1.0 m");
        assert_eq!(format_measurement(0.0, Unit::Meter), "0.0 m");
    }

    #[test]
    fn format_large_values_have_no_grouping() {
        assert_eq!(format_measurement(1234.5, Unit::Centimeter), "123450.0 cm");
    }

    #[test]
    fn parse_short_and_long_labels() {
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!("inch".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!("feet".parse::<Unit>().unwrap(), Unit::Foot);
        assert_eq!("FT".parse::<Unit>().unwrap(), Unit::Foot);
        assert_eq!(" cm ".parse::<Unit>().unwrap(), Unit::Centimeter);
        assert_eq!("metres".parse::<Unit>().unwrap(), Unit::Meter);
    }

    #[test]
    fn parse_unknown_label() {
        let err = "yard".parse::<Unit>().unwrap_err();
        assert!(matches!(err, MeasureError::UnknownUnit(ref s) if s == "yard"));
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unit_serialization() {
        let json = serde_json::to_string(&Unit::Centimeter).ok();
        assert_eq!(json.as_deref(), Some("\"Centimeter\""));
    }
}
