pub mod marker;
pub mod stats_writer;

pub use marker::{check_marker, self_test, write_marker};
pub use stats_writer::StatsWriter;
