pub mod correlation;
pub mod describe;
pub mod summary;

pub use correlation::{CorrelationEntry, CorrelationMatrix};
pub use describe::{ColumnStats, DescriptiveStatistics};
pub use summary::{DatasetSummary, ValueRange};
