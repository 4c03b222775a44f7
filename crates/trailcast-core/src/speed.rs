use serde::{Deserialize, Serialize};
use std::fmt;

const KMH_TO_MPH: f64 = 0.62137119223733;
const KMH_TO_KNOTS: f64 = 0.53995680346039;
const KMH_TO_MACH: f64 = 0.00081699346405229;
const KMH_TO_LIGHT: f64 = 9.2656693110598E-10;

/// Display unit for speed annotations. Conversions always start from the
/// canonical km/h value.
///
/// The pace units (`MinKm`, `MinMi`) are time-per-distance and therefore
/// divide by the speed: at 0 km/h they yield a non-finite value, which
/// [`SpeedUnit::format`] reports as `None` ("stopped").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeedUnit {
    #[default]
    Kmh,
    Mph,
    MinKm,
    MinMi,
    Knots,
    Mach,
    Light,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 7] = [
        SpeedUnit::Kmh,
        SpeedUnit::Mph,
        SpeedUnit::MinKm,
        SpeedUnit::MinMi,
        SpeedUnit::Knots,
        SpeedUnit::Mach,
        SpeedUnit::Light,
    ];

    /// The unit's display abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Mph => "mph",
            SpeedUnit::MinKm => "min/km",
            SpeedUnit::MinMi => "min/mi",
            SpeedUnit::Knots => "kn",
            SpeedUnit::Mach => "Ma",
            SpeedUnit::Light => "c",
        }
    }

    /// Whether this is a time-per-distance unit.
    pub fn is_pace(&self) -> bool {
        matches!(self, SpeedUnit::MinKm | SpeedUnit::MinMi)
    }

    /// Convert a speed in km/h to this unit's display value.
    pub fn convert(&self, kmh: f64) -> f64 {
        match self {
            SpeedUnit::Kmh => kmh,
            SpeedUnit::Mph => kmh * KMH_TO_MPH,
            SpeedUnit::MinKm => 3600.0 / kmh / 60.0,
            SpeedUnit::MinMi => 3600.0 / (kmh * KMH_TO_MPH) / 60.0,
            SpeedUnit::Knots => kmh * KMH_TO_KNOTS,
            SpeedUnit::Mach => kmh * KMH_TO_MACH,
            SpeedUnit::Light => kmh * KMH_TO_LIGHT,
        }
    }

    /// Format a km/h speed for display in this unit. Returns `None` when the
    /// converted value is non-finite (pace units at zero speed), which
    /// callers render as absent text.
    pub fn format(&self, kmh: f64) -> Option<String> {
        let value = self.convert(kmh);
        if !value.is_finite() {
            return None;
        }
        Some(format!("{:.1} {}", value, self.abbreviation()))
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_conversions() {
        assert_eq!(SpeedUnit::Kmh.convert(100.0), 100.0);
        assert!((SpeedUnit::Mph.convert(100.0) - 62.137119223733).abs() < 1e-9);
        assert!((SpeedUnit::Knots.convert(100.0) - 53.995680346039).abs() < 1e-9);
        assert!((SpeedUnit::Mach.convert(100.0) - 0.081699346405229).abs() < 1e-12);
        assert!((SpeedUnit::Light.convert(100.0) - 9.2656693110598E-8).abs() < 1e-18);
    }

    #[test]
    fn test_pace_conversions() {
        // 12 km/h is a 5 min/km pace.
        assert!((SpeedUnit::MinKm.convert(12.0) - 5.0).abs() < 1e-9);
        // 1 mph is a 60 min/mi pace.
        let one_mph_in_kmh = 1.0 / KMH_TO_MPH;
        assert!((SpeedUnit::MinMi.convert(one_mph_in_kmh) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_zero() {
        for unit in SpeedUnit::ALL {
            let value = unit.convert(0.0);
            if unit.is_pace() {
                assert!(!value.is_finite(), "{} should diverge at zero", unit);
            } else {
                assert_eq!(value, 0.0, "{} should map zero to zero", unit);
            }
        }
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(SpeedUnit::Kmh.format(0.0).as_deref(), Some("0.0 km/h"));
        assert_eq!(SpeedUnit::MinKm.format(0.0), None);
        assert_eq!(SpeedUnit::MinMi.format(0.0), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(SpeedUnit::Kmh.format(12.34).as_deref(), Some("12.3 km/h"));
        assert_eq!(SpeedUnit::MinKm.format(12.0).as_deref(), Some("5.0 min/km"));
    }
}
