pub mod bike;
pub mod table;

pub use bike::{Recoding, WEATHER_RECODING, WEEK_ORDER, WORKINGDAY_RECODING};
pub use table::{Column, ColumnData, Scalar, Table};
