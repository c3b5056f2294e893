pub mod report_generator;
pub mod views;

pub use report_generator::{generate, ReportArtifacts, ReportConfig, ReportGenerator};
pub use views::{group_mean, recode};
