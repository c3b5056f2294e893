use chrono::Weekday;

use crate::utils::constants::{WEATHER_LABELS, WORKINGDAY_LABELS};

/// Display order for every weekday axis and facet grid.
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Decode the dataset's weekday code, where 0 is Sunday.
pub fn weekday_from_code(code: i64) -> Option<Weekday> {
    WEEK_ORDER
        .iter()
        .copied()
        .find(|day| i64::from(day.num_days_from_sunday()) == code)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Fixed code-to-label map applied to an integer column.
#[derive(Debug, Clone, Copy)]
pub struct Recoding {
    pub column: &'static str,
    labels: &'static [(i64, &'static str)],
}

impl Recoding {
    pub const fn new(column: &'static str, labels: &'static [(i64, &'static str)]) -> Self {
        Self { column, labels }
    }

    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

pub const WORKINGDAY_RECODING: Recoding =
    Recoding::new(crate::utils::constants::COL_WORKINGDAY, &WORKINGDAY_LABELS);

pub const WEATHER_RECODING: Recoding =
    Recoding::new(crate::utils::constants::COL_WEATHER, &WEATHER_LABELS);
