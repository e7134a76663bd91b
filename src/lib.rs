// Module declarations
pub mod cache;
pub mod clock;
pub mod config;
pub mod constants;
pub mod detector;
pub mod error;
pub mod estimator;
pub mod formatting;
pub mod types;
pub mod updater;
pub mod utils;

// Re-export commonly used items
pub use cache::CacheStore;
pub use config::Settings;
pub use error::{CcuError, Result};
pub use estimator::{Estimate, Estimator};
pub use types::{Percentage, UsageSnapshot, UsageWindow};
pub use updater::{UpdateOutcome, Updater};
