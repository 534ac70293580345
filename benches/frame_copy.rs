use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mandelbrot_viewport::{BaseColour, Selection, ViewportController};

fn bench_pixel_buffer_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_buffer_copy");

    for grid_size in [200u32, 800] {
        let controller =
            ViewportController::new(Selection::new(-2.0, -1.5, 3.0, 3.0), grid_size, BaseColour::White)
                .expect("bench controller builds");

        group.bench_with_input(
            BenchmarkId::from_parameter(grid_size),
            &controller,
            |b, controller| b.iter(|| black_box(controller.pixel_buffer())),
        );
    }

    group.finish();
}

fn bench_poll_cycle(c: &mut Criterion) {
    let controller =
        ViewportController::new(Selection::new(-2.0, -1.5, 3.0, 3.0), 200, BaseColour::White)
            .expect("bench controller builds");

    c.bench_function("is_updated_idle", |b| b.iter(|| black_box(controller.is_updated())));
}

criterion_group!(benches, bench_pixel_buffer_copy, bench_poll_cycle);
criterion_main!(benches);
