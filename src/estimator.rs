use crate::constants::ESTIMATED_RATE_PER_MINUTE;
use crate::types::{Percentage, UsageSnapshot};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Extrapolated usage for both windows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub session: Percentage,
    pub weekly: Percentage,
    /// Percentage points added to each window
    pub increase: f64,
    pub elapsed: Duration,
}

impl Estimate {
    /// Snapshot to persist for this estimate, stamped `at`
    pub fn to_snapshot(&self, at: DateTime<Utc>) -> UsageSnapshot {
        UsageSnapshot::estimated(self.session, self.weekly, at)
    }
}

/// Linear time-based extrapolation from the last snapshot
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    rate_per_minute: f64,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(ESTIMATED_RATE_PER_MINUTE)
    }
}

impl Estimator {
    pub fn new(rate_per_minute: f64) -> Self {
        Self { rate_per_minute }
    }

    /// Estimate current usage. `None` when there is no usable prior snapshot.
    pub fn estimate(&self, previous: Option<&UsageSnapshot>, now: DateTime<Utc>) -> Option<Estimate> {
        let previous = previous?;

        let updated_at = match previous.updated_at() {
            Ok(updated_at) => updated_at,
            Err(err) => {
                debug!("skipping estimate: {}", err);
                return None;
            }
        };

        // A timestamp in the future (clock skew) adds nothing
        let elapsed = now.signed_duration_since(updated_at).max(Duration::zero());
        let increase = elapsed_minutes(elapsed) * self.rate_per_minute;

        Some(Estimate {
            session: previous.session().percentage.saturating_add(increase),
            weekly: previous.weekly().percentage.saturating_add(increase),
            increase,
            elapsed,
        })
    }
}

fn elapsed_minutes(elapsed: Duration) -> f64 {
    let seconds = elapsed
        .num_microseconds()
        .map(|us| us as f64 / 1_000_000.0)
        .unwrap_or_else(|| elapsed.num_seconds() as f64);
    seconds / 60.0
}
