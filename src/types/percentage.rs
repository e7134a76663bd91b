use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A usage percentage, always within `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);
    pub const FULL: Percentage = Percentage(100.0);

    /// Create a percentage, clamping into `[0, 100]`. NaN becomes 0.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Percentage(value.clamp(0.0, 100.0))
    }

    /// Get the raw value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Add percentage points, capping at 100
    #[inline]
    pub fn saturating_add(self, points: f64) -> Self {
        Self::new(self.0 + points)
    }

    /// Portion of `limit` this percentage represents, rounded to the nearest unit
    pub fn of_limit(&self, limit: u64) -> u64 {
        (limit as f64 * self.0 / 100.0).round() as u64
    }

    /// Format with one decimal (e.g., "15.0%")
    pub fn to_formatted_string(&self) -> String {
        format!("{:.1}%", self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

// Hand-edited cache files may carry out-of-range values
impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Percentage::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_clamping() {
        assert_eq!(Percentage::new(-5.0).value(), 0.0);
        assert_eq!(Percentage::new(42.5).value(), 42.5);
        assert_eq!(Percentage::new(250.0).value(), 100.0);
        assert_eq!(Percentage::new(f64::NAN).value(), 0.0);
        assert_eq!(Percentage::new(f64::INFINITY).value(), 100.0);
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Percentage::new(10.0).saturating_add(5.0).value(), 15.0);
        assert_eq!(Percentage::new(98.0).saturating_add(5.0), Percentage::FULL);
    }

    #[test]
    fn test_of_limit_rounds() {
        assert_eq!(Percentage::new(15.0).of_limit(500_000), 75_000);
        assert_eq!(Percentage::new(33.3333).of_limit(1_000), 333);
        assert_eq!(Percentage::new(66.6667).of_limit(1_000), 667);
        assert_eq!(Percentage::FULL.of_limit(3_000_000), 3_000_000);
    }

    #[test]
    fn test_percentage_display() {
        assert_eq!(format!("{}", Percentage::new(15.0)), "15.0%");
        assert_eq!(format!("{}", Percentage::new(7.26)), "7.3%");
    }

    #[test]
    fn test_percentage_deserialize_clamps() {
        let p: Percentage = serde_json::from_str("140.0").unwrap();
        assert_eq!(p, Percentage::FULL);
        let p: Percentage = serde_json::from_str("12").unwrap();
        assert_eq!(p.value(), 12.0);
    }
}
