use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mandelbrot_viewport::{
    MandelbrotAlgorithm, NormalisedRgb, SampleGrid, Selection, Viewport, generate_escape_values,
    generate_escape_values_serial, generate_pixel_buffer, render_frame,
};

const GRID_SIZES: [u32; 3] = [200, 400, 800];

fn viewport(grid_size: u32) -> Viewport {
    Viewport::from_selection(Selection::new(-2.0, -1.5, 3.0, 3.0), grid_size)
        .expect("bench viewport is valid")
}

fn bench_escape_values(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::default();
    let mut group = c.benchmark_group("escape_values");

    for grid_size in GRID_SIZES {
        let grid = SampleGrid::new(&viewport(grid_size), grid_size);

        group.bench_with_input(BenchmarkId::new("rayon", grid_size), &grid, |b, grid| {
            b.iter(|| generate_escape_values(black_box(grid), &algorithm))
        });
        group.bench_with_input(BenchmarkId::new("serial", grid_size), &grid, |b, grid| {
            b.iter(|| generate_escape_values_serial(black_box(grid), &algorithm))
        });
    }

    group.finish();
}

fn bench_colourize(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::default();
    let colour = NormalisedRgb::new(1.0, 0.65, 0.0);
    let mut group = c.benchmark_group("colourize");

    for grid_size in GRID_SIZES {
        let grid = SampleGrid::new(&viewport(grid_size), grid_size);
        let values = generate_escape_values(&grid, &algorithm);

        group.bench_with_input(BenchmarkId::from_parameter(grid_size), &values, |b, values| {
            b.iter(|| generate_pixel_buffer(black_box(values), colour))
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::default();
    let mut group = c.benchmark_group("render_frame");

    for grid_size in GRID_SIZES {
        let viewport = viewport(grid_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(grid_size),
            &viewport,
            |b, viewport| {
                b.iter(|| {
                    render_frame(
                        black_box(viewport),
                        grid_size,
                        NormalisedRgb::WHITE,
                        &algorithm,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_escape_values, bench_colourize, bench_render_frame);
criterion_main!(benches);
