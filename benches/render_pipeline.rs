use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    Complex, ComputeBackend, RayonBackend, SequentialBackend, SurfaceSize, Viewport,
};
use std::hint::black_box;

const SIZES: [(u32, u32); 2] = [(320, 240), (800, 600)];

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(10);

    let rayon = match RayonBackend::new(None) {
        Ok(backend) => backend,
        Err(err) => panic!("rayon pool unavailable: {}", err),
    };
    let default_view = Viewport::default();

    for (width, height) in SIZES {
        let surface = SurfaceSize::new(width, height);
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("sequential", &label), &surface, |b, &s| {
            b.iter(|| SequentialBackend.render(black_box(s), &default_view))
        });

        group.bench_with_input(BenchmarkId::new("rayon", &label), &surface, |b, &s| {
            b.iter(|| rayon.render(black_box(s), &default_view))
        });
    }

    group.finish();
}

fn bench_deep_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame_deep_zoom");
    group.sample_size(10);

    let rayon = match RayonBackend::new(None) {
        Ok(backend) => backend,
        Err(err) => panic!("rayon pool unavailable: {}", err),
    };
    // seahorse valley, lots of boundary at high iteration counts
    let viewport = match Viewport::new(Complex::new(-0.743_643_887, 0.131_825_904), 5_000.0, 1_126) {
        Ok(viewport) => viewport,
        Err(err) => panic!("bad benchmark viewport: {}", err),
    };
    let surface = SurfaceSize::new(320, 240);

    group.bench_function("rayon_320x240", |b| {
        b.iter(|| rayon.render(black_box(surface), &viewport))
    });

    group.finish();
}

criterion_group!(benches, bench_backends, bench_deep_zoom);
criterion_main!(benches);
