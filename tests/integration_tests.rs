use bike_eda::analyzers::{CorrelationMatrix, DescriptiveStatistics};
use bike_eda::models::{Scalar, WEATHER_RECODING, WORKINGDAY_RECODING};
use bike_eda::processors::{group_mean, recode};
use bike_eda::readers::TableReader;
use bike_eda::writers::marker::{check_marker, marker_path};
use bike_eda::{ReportConfig, ReportError, ReportGenerator};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,\
                      weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

/// Hourly rows over two days with a known spread of every categorical column.
fn hourly_csv(dir: &Path, rows: usize) -> PathBuf {
    let mut text = String::from(HEADER);
    text.push('\n');
    for i in 0..rows {
        let hr = i % 24;
        let weekday = (i / 24) % 7;
        let workingday = usize::from((1..=5).contains(&weekday));
        let weather = 1 + i % 3;
        let temp = 0.2 + (hr as f64) / 100.0;
        let hum = 0.9 - (hr as f64) / 50.0;
        let cnt = 10 + 5 * hr + 3 * weather;
        text.push_str(&format!(
            "{},2011-01-{:02},1,0,{},{},0,{},{},{},{:.2},{:.4},{:.2},0.{:04},{},{},{}\n",
            i + 1,
            1 + i / 24,
            1 + (i / 24) % 12,
            hr,
            weekday,
            workingday,
            weather,
            temp,
            temp * 0.9,
            hum,
            1000 + 37 * (i % 7),
            cnt / 4,
            cnt - cnt / 4,
            cnt
        ));
    }
    let path = dir.join("hour.csv");
    fs::write(&path, text).unwrap();
    path
}

fn quiet_config(input: &Path, output: &Path) -> ReportConfig {
    ReportConfig::new(input, output)
        .with_max_workers(2)
        .with_quiet(true)
}

#[test]
fn test_full_report_creates_nested_output_with_every_artifact() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 72);
    let output = dir.path().join("reports").join("2011").join("eda");
    assert!(!output.exists());

    let artifacts = ReportGenerator::new(quiet_config(&input, &output))
        .unwrap()
        .generate()
        .unwrap();

    let mut names: Vec<String> = fs::read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "fig_1_nulls.png",
            "fig_2_temp.png",
            "fig_2b_workingday.png",
            "fig_3_hr.png",
            "fig_4_weather.png",
            "fig_4b_weather_2.png",
            "fig_5_corr.png",
            "success.txt",
            "tab_1.csv",
        ]
    );

    assert_eq!(artifacts.paths().count(), 9);
    for path in artifacts.paths() {
        assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    }
    assert_eq!(
        fs::read_to_string(marker_path(&output)).unwrap(),
        "Succes Download Figures"
    );
}

#[test]
fn test_statistics_for_known_counts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("small.csv");
    fs::write(&input, "hr,cnt\n0,10\n1,20\n2,30\n").unwrap();

    let table = TableReader::new().read_table(&input).unwrap();
    let stats = DescriptiveStatistics::from_table(&table).unwrap();
    let cnt = stats.column("cnt").unwrap();

    assert_eq!(cnt.count, 3);
    assert_eq!(cnt.mean, 20.0);
    assert_eq!(cnt.min, 10.0);
    assert_eq!(cnt.median, 20.0);
    assert_eq!(cnt.max, 30.0);
    assert_eq!(cnt.std, 10.0);
}

#[test]
fn test_statistics_table_is_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 48);
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    for output in [&first, &second] {
        ReportGenerator::new(quiet_config(&input, output))
            .unwrap()
            .generate()
            .unwrap();
    }

    let a = fs::read_to_string(first.join("tab_1.csv")).unwrap();
    let b = fs::read_to_string(second.join("tab_1.csv")).unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with(",instant,season,yr,mnth,hr,"));
    assert!(a.lines().nth(1).unwrap().starts_with("count,48.0,"));
}

#[test]
fn test_rerun_into_same_directory_rewrites_identical_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 96);
    let output = dir.path().join("out");

    let first = bike_eda::generate(&input, &output).unwrap();
    let before: Vec<(PathBuf, Vec<u8>)> = first
        .paths()
        .map(|path| (path.to_path_buf(), fs::read(path).unwrap()))
        .collect();

    let second = bike_eda::generate(&input, &output).unwrap();
    let after: Vec<(PathBuf, Vec<u8>)> = second
        .paths()
        .map(|path| (path.to_path_buf(), fs::read(path).unwrap()))
        .collect();

    assert_eq!(before.len(), 9);
    assert_eq!(after.len(), before.len());
    for ((path_a, bytes_a), (path_b, bytes_b)) in before.iter().zip(&after) {
        assert_eq!(path_a, path_b);
        assert!(bytes_a == bytes_b, "{} changed between runs", path_a.display());
    }
    assert_eq!(fs::read_dir(&output).unwrap().count(), 9);
}

#[test]
fn test_missing_marker_fails_check() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 24);
    let output = dir.path().join("out");

    ReportGenerator::new(quiet_config(&input, &output))
        .unwrap()
        .generate()
        .unwrap();
    check_marker(&output).unwrap();

    fs::remove_file(marker_path(&output)).unwrap();
    let err = check_marker(&output).unwrap_err();
    assert!(matches!(err, ReportError::Postcondition(_)));
    assert_eq!(err.to_string(), "Training file is not generated");
}

#[test]
fn test_missing_column_aborts_before_charts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("partial.csv");
    fs::write(&input, "hr,cnt\n0,10\n1,20\n").unwrap();
    let output = dir.path().join("out");

    let err = ReportGenerator::new(quiet_config(&input, &output))
        .unwrap()
        .generate()
        .unwrap_err();

    assert!(matches!(err, ReportError::ColumnNotFound { .. }));
    assert!(!marker_path(&output).exists());
}

#[test]
fn test_recoding_leaves_source_untouched() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 24);
    let table = TableReader::new().read_table(&input).unwrap();
    let before = table.clone();

    let labelled = recode(&table, &[WORKINGDAY_RECODING, WEATHER_RECODING]).unwrap();

    assert_eq!(table, before);
    assert_eq!(
        labelled.column("workingday").unwrap().get(0),
        Some(Scalar::Text("Not a working day".into()))
    );
    assert_eq!(
        labelled.column("weathersit").unwrap().get(2),
        Some(Scalar::Text("3 (light rain/snow)".into()))
    );
    assert_eq!(table.column("weathersit").unwrap().get(2), Some(Scalar::Int(3)));
}

#[test]
fn test_views_feeding_the_charts() {
    let dir = TempDir::new().unwrap();
    let input = hourly_csv(dir.path(), 48);
    let table = TableReader::new().read_table(&input).unwrap();

    let by_hour = group_mean(&table, &["weekday", "hr"]).unwrap();
    assert_eq!(by_hour.n_rows(), 48);

    let correlation = CorrelationMatrix::from_table(&table).unwrap();
    for name in correlation.names() {
        assert_eq!(correlation.get(name, name), Some(1.0));
    }
    assert_eq!(correlation.get("temp", "cnt"), correlation.get("cnt", "temp"));
}
