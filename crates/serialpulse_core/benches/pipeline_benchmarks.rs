//! Criterion benchmarks for the serialpulse_core pipeline
//!
//! Run with: cargo bench -p serialpulse_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serialpulse_core::aggregate::{DateRange, mean_series};
use serialpulse_core::group::{EntityGroups, group_by_entity};
use serialpulse_core::model::{EntityId, Granularity, Metric, Snapshot};
use serialpulse_core::pipeline::run_query;
use serialpulse_core::query::ChartQuery;

/// Synthetic corpus: `entities` novels observed every 6 hours for `days`
/// days, with monotonically growing counters.
fn synthetic_groups(entities: usize, days: usize) -> EntityGroups {
    let mut snapshots = Vec::with_capacity(entities * days * 4);
    for e in 0..entities {
        let mut views = 0.0;
        for day in 0..days {
            for hour in [0, 6, 12, 18] {
                views += (e % 7 + 1) as f64;
                snapshots.push(Snapshot {
                    entity: EntityId(format!("novel-{e}")),
                    timestamp: format!("202401{:02}{:02}", day + 1, hour),
                    views,
                    vote: views / 10.0,
                    alarm: views / 50.0,
                    like: views / 20.0,
                });
            }
        }
    }
    group_by_entity(snapshots)
}

fn bench_mean_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_series");
    for entities in [10, 100, 500] {
        let groups = synthetic_groups(entities, 28);
        group.bench_with_input(
            BenchmarkId::new("native", entities),
            &groups,
            |b, groups| {
                b.iter(|| {
                    mean_series(
                        black_box(groups),
                        Metric::Views,
                        Granularity::Native,
                        &DateRange::default(),
                    )
                })
            },
        );
        group.bench_with_input(BenchmarkId::new("daily", entities), &groups, |b, groups| {
            b.iter(|| {
                mean_series(
                    black_box(groups),
                    Metric::Views,
                    Granularity::Daily,
                    &DateRange::default(),
                )
            })
        });
    }
    group.finish();
}

fn bench_run_query(c: &mut Criterion) {
    let groups = synthetic_groups(200, 28);
    let query = ChartQuery {
        entity: Some(EntityId::from("novel-17")),
        metric: Metric::Like,
        granularity: Granularity::Native,
        range: DateRange {
            start: Some("20240107".to_owned()),
            end: Some("20240121".to_owned()),
        },
    };
    c.bench_function("run_query_with_overlay_and_range", |b| {
        b.iter(|| run_query(black_box(&groups), black_box(&query)))
    });
}

criterion_group!(benches, bench_mean_series, bench_run_query);
criterion_main!(benches);
