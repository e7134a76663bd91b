use super::percentage::Percentage;
use serde::{Deserialize, Serialize};

/// Usage of one quota window (session or weekly)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageWindow {
    // Recomputed from the percentage on every write
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub limit: u64,
    pub percentage: Percentage,
}

impl UsageWindow {
    /// Build a window whose `used` count is derived from the percentage
    pub fn from_percentage(percentage: Percentage, limit: u64) -> Self {
        Self {
            used: percentage.of_limit(limit),
            limit,
            percentage,
        }
    }
}
