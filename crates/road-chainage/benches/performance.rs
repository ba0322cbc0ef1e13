//! Performance benchmarks for road-chainage
//!
//! Run with: cargo bench --package road-chainage

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use geo::Coord;
use road_chainage::batch::{calibrate_points_parallel, extract_sections_parallel};
use road_chainage::{LinearReference, Polyline};

/// Generate a realistic road polyline with the specified number of vertices.
fn generate_road(num_points: usize, base_lat: f64, base_lon: f64) -> Polyline {
    let points = (0..num_points).map(|i| {
        let t = i as f64 / num_points as f64;
        let lat = base_lat + t * 0.1 + (t * 50.0).sin() * 0.001;
        let lon = base_lon + t * 0.1 + (t * 30.0).cos() * 0.001;
        (lon, lat)
    });
    Polyline::from_points(points).unwrap()
}

/// Generate multiple roads spread across an area
fn generate_multiple_roads(num_roads: usize, points_per_road: usize) -> Vec<Polyline> {
    (0..num_roads)
        .map(|i| {
            let lat_offset = (i % 10) as f64 * 0.1;
            let lon_offset = (i / 10) as f64 * 0.1;
            generate_road(points_per_road, 51.5 + lat_offset, -0.1 + lon_offset)
        })
        .collect()
}

// ============================================================================
// Core Benchmarks - Key performance indicators
// ============================================================================

fn bench_single_road(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_road");

    // Single road with 50k vertices - representative workload
    let road = generate_road(50_000, 51.5, -0.1);
    let engine = LinearReference::planar();
    let length = engine.length_km(&road);

    group.throughput(Throughput::Elements(50_000));

    group.bench_function("extract_section_50k", |b| {
        b.iter(|| engine.extract_section(black_box(&road), length * 0.25, length * 0.75));
    });

    group.bench_function("point_at_chainage_50k", |b| {
        b.iter(|| engine.point_at_chainage(black_box(&road), length * 0.5));
    });

    let query = Coord {
        x: -0.05,
        y: 51.55,
    };
    group.bench_function("calibrate_point_50k", |b| {
        b.iter(|| engine.calibrate_point(black_box(&road), query, 1.0));
    });

    group.finish();
}

fn bench_many_roads(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_roads");
    group.sample_size(20);

    // 100 roads with 1000 vertices each
    let roads = generate_multiple_roads(100, 1_000);
    let engine = LinearReference::planar();
    let total_points = 100 * 1_000;

    group.throughput(Throughput::Elements(total_points as u64));
    group.bench_function("extract_parallel_100x1k", |b| {
        b.iter(|| extract_sections_parallel(&engine, &roads, 1.0, 5.0));
    });

    let query = Coord { x: 0.0, y: 51.9 };
    group.bench_function("calibrate_parallel_100x1k", |b| {
        b.iter(|| calibrate_points_parallel(&engine, &roads, query, 2.0));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_single_road, bench_many_roads);

criterion_main!(benches);
