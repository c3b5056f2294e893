/// Input column names
pub const COL_MONTH: &str = "mnth";
pub const COL_HOUR: &str = "hr";
pub const COL_HOLIDAY: &str = "holiday";
pub const COL_WEEKDAY: &str = "weekday";
pub const COL_WORKINGDAY: &str = "workingday";
pub const COL_WEATHER: &str = "weathersit";
pub const COL_TEMP: &str = "temp";
pub const COL_HUMIDITY: &str = "hum";
pub const COL_WINDSPEED: &str = "windspeed";
pub const COL_COUNT: &str = "cnt";

/// Output file names
pub const DESCRIBE_FILE: &str = "tab_1.csv";
pub const FIG_NULLS: &str = "fig_1_nulls.png";
pub const FIG_TEMP_WEEKDAY: &str = "fig_2_temp.png";
pub const FIG_TEMP_WORKINGDAY: &str = "fig_2b_workingday.png";
pub const FIG_HOUR_HEATMAP: &str = "fig_3_hr.png";
pub const FIG_HUMIDITY_WEATHER: &str = "fig_4_weather.png";
pub const FIG_WEATHER_STRIP: &str = "fig_4b_weather_2.png";
pub const FIG_CORRELATION: &str = "fig_5_corr.png";

/// Success marker
pub const MARKER_FILE: &str = "success.txt";
pub const MARKER_CONTENTS: &str = "Succes Download Figures";
pub const MARKER_MISSING_MESSAGE: &str = "Training file is not generated";

/// Rendering
pub const SCALE_FACTOR: u32 = 2;
pub const FONT_FAMILY: &str = "sans-serif";
pub const JITTER_SEED: u64 = 2020_01_31;
pub const CORRELATION_TEXT_THRESHOLD: f64 = 0.95;
pub const CORRELATION_DECIMALS: i32 = 2;

/// Recoded labels
pub const WORKINGDAY_LABELS: [(i64, &str); 2] = [(0, "Not a working day"), (1, "Working day")];
pub const WEATHER_LABELS: [(i64, &str); 4] = [
    (1, "1 (mainly sunny)"),
    (2, "2 (misty day)"),
    (3, "3 (light rain/snow)"),
    (4, "4 (heavy rain/snow)"),
];
