//! Upload pipeline performance benchmarks.
//!
//! Measures parsing, index resolution, statistics, and chart rendering
//! separately and end to end.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tabscope::chart::{ChartConfig, Selection, render_charts};
use tabscope::stats::Description;
use tabscope::transform::{forward_fill, resolve_index};
use tabscope::{Parser, Table, Tabscope};

/// Generate a weather-style CSV with shuffled dates and scattered gaps.
fn generate_weather_data(rows: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let cities = ["Oslo", "Rome", "Cairo", "Lima", "Perth"];

    let mut data = String::new();
    data.push_str("Date,city,Temperature,humidity\n");

    for row in 0..rows {
        let day = rng.gen_range(1..=28);
        let month = rng.gen_range(1..=12);
        data.push_str(&format!("2023-{:02}-{:02},", month, day));
        data.push_str(cities[row % cities.len()]);
        data.push(',');
        // Roughly one gap in ten.
        if rng.gen_bool(0.9) {
            data.push_str(&format!("{:.1}", rng.gen_range(-10.0..35.0)));
        }
        data.push(',');
        data.push_str(&rng.gen_range(20..100).to_string());
        data.push('\n');
    }

    data
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    group.sample_size(20);

    for rows in [10, 100, 1000].iter() {
        let data = generate_weather_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let tabscope = Tabscope::new();
            b.iter(|| black_box(tabscope.analyze_bytes("bench.csv", data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [100, 1000, 10000].iter() {
        let data = generate_weather_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_upload("bench.csv", data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Index resolution, forward-fill and describe, without rendering.
fn bench_transform_and_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_describe");

    for rows in [100, 1000, 10000].iter() {
        let data = generate_weather_data(*rows);
        let (raw, _) = Parser::new().parse_upload("bench.csv", data.as_bytes()).unwrap();
        let table = Table::from_raw(&raw);

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter_with_setup(
                || table.clone(),
                |mut table| {
                    resolve_index(&mut table);
                    forward_fill(&mut table);
                    black_box(Description::of(&table))
                },
            )
        });
    }

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");
    group.sample_size(10);

    for rows in [10, 100, 1000].iter() {
        let mut rng = StdRng::seed_from_u64(7);
        let selection = Selection {
            name: "Temperature".to_string(),
            values: (0..*rows).map(|_| Some(rng.gen_range(-10.0..35.0))).collect(),
        };
        let config = ChartConfig::default();

        group.bench_with_input(BenchmarkId::new("rows", rows), &selection, |b, selection| {
            b.iter(|| black_box(render_charts(selection, &config).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_end_to_end,
    bench_parse,
    bench_transform_and_describe,
    bench_charts,
);
criterion_main!(benches);
