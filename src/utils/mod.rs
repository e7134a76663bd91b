pub mod paths;
pub mod process;

pub use paths::{expand_home, parent_dir};
pub use process::{ProcessInspector, PsInspector};
