//! Criterion benchmarks for the scene pipeline.
//!
//! Run with:
//! ```bash
//! cargo bench --bench scene_pipeline
//! ```

use std::hint::black_box;

use cantor_explorer::core::actions::rasterize_scene::rasterize_scene::rasterize_scene;
use cantor_explorer::{
    FractalMode, RenderParams, build_scene, cantor_dust_points, cantor_line_levels,
    cantor_line_segments,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    for depth in [8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("line_segments", depth), &depth, |b, &depth| {
            b.iter(|| cantor_line_segments(black_box(depth)))
        });
        group.bench_with_input(BenchmarkId::new("line_levels", depth), &depth, |b, &depth| {
            b.iter(|| cantor_line_levels(black_box(depth)))
        });
    }

    for depth in [4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("dust_points", depth), &depth, |b, &depth| {
            b.iter(|| cantor_dust_points(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_build_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scene");

    let line = RenderParams::default();
    let all_levels = RenderParams {
        show_all_levels: true,
        ..RenderParams::default()
    };
    let dust = RenderParams {
        mode: FractalMode::Dust,
        ..RenderParams::default()
    };

    for (name, params) in [("line", &line), ("all_levels", &all_levels), ("dust", &dust)] {
        group.bench_with_input(BenchmarkId::new(name, 6), params, |b, params| {
            b.iter(|| build_scene(black_box(params), 6))
        });
    }

    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    let dust = RenderParams {
        mode: FractalMode::Dust,
        thickness: 2.0,
        ..RenderParams::default()
    };
    let Ok(scene) = build_scene(&dust, 6) else {
        return;
    };

    for width in [500u32, 1000, 2000] {
        group.bench_with_input(BenchmarkId::new("dust_6", width), &width, |b, &width| {
            b.iter(|| rasterize_scene(black_box(&scene), width, width))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generators, bench_build_scene, bench_rasterize);
criterion_main!(benches);
