pub mod constants;
pub mod format;
pub mod progress;

pub use constants::*;
pub use format::{format_cell, format_float};
pub use progress::ProgressReporter;
