pub mod percentage;
pub mod snapshot;
pub mod window;

pub use percentage::Percentage;
pub use snapshot::{UsageSnapshot, parse_timestamp};
pub use window::UsageWindow;
