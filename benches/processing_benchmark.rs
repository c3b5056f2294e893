use bike_eda::analyzers::{CorrelationMatrix, DescriptiveStatistics};
use bike_eda::models::{Column, ColumnData, Table, WEATHER_RECODING, WORKINGDAY_RECODING};
use bike_eda::processors::{group_mean, recode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Synthetic hourly table shaped like the rental dataset
fn create_hourly_table(rows: usize) -> Table {
    let ints = |f: &dyn Fn(usize) -> i64| ColumnData::Int((0..rows).map(|i| Some(f(i))).collect());
    let floats =
        |f: &dyn Fn(usize) -> f64| ColumnData::Float((0..rows).map(|i| Some(f(i))).collect());

    Table::new(vec![
        Column::new("mnth", ints(&|i| 1 + ((i / 720) % 12) as i64)),
        Column::new("hr", ints(&|i| (i % 24) as i64)),
        Column::new("weekday", ints(&|i| ((i / 24) % 7) as i64)),
        Column::new("workingday", ints(&|i| i64::from((i / 24) % 7 % 6 != 0))),
        Column::new("weathersit", ints(&|i| 1 + (i % 4) as i64)),
        Column::new("temp", floats(&|i| (i % 100) as f64 / 100.0)),
        Column::new("hum", floats(&|i| ((i * 7) % 100) as f64 / 100.0)),
        Column::new("windspeed", floats(&|i| ((i * 13) % 85) as f64 / 100.0)),
        Column::new("cnt", ints(&|i| ((i * 31) % 977) as i64)),
    ])
    .expect("columns have equal length")
}

fn benchmark_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    for rows in [1_000, 17_379] {
        let table = create_hourly_table(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| DescriptiveStatistics::from_table(black_box(table)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_correlation(c: &mut Criterion) {
    let table = create_hourly_table(17_379);

    c.bench_function("correlation_matrix", |b| {
        b.iter(|| CorrelationMatrix::from_table(black_box(&table)).unwrap())
    });
}

fn benchmark_views(c: &mut Criterion) {
    let table = create_hourly_table(17_379);
    let mut group = c.benchmark_group("views");

    group.bench_function("group_mean_weekday_hr", |b| {
        b.iter(|| group_mean(black_box(&table), &["weekday", "hr"]).unwrap())
    });
    group.bench_function("recode_labels", |b| {
        b.iter(|| recode(black_box(&table), &[WORKINGDAY_RECODING, WEATHER_RECODING]).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_describe,
    benchmark_correlation,
    benchmark_views
);
criterion_main!(benches);
