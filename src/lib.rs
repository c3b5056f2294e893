pub mod analyzers;
pub mod charts;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ReportError, Result};
pub use processors::{generate, ReportArtifacts, ReportConfig, ReportGenerator};
