use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use snake_curve::core::spaced_points_between;
use snake_curve::{
    CircleCurve, CircleGenerator, CurveTexture, GeneratorOptions, RandomCircleGenerator,
    SnakeController, SnakeOptions,
};
use std::hint::black_box;

fn build_random_curve(circle_count: usize) -> CircleCurve {
    let mut generator = RandomCircleGenerator::new(42, GeneratorOptions::default());
    let mut curve = CircleCurve::default();
    for _ in 0..circle_count {
        let circle = generator.next_circle(curve.last());
        curve.push(circle);
    }
    curve
}

fn bench_curve_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_assembly");

    for &circle_count in &[8usize, 32, 128] {
        let curve = build_random_curve(circle_count);

        group.bench_with_input(
            BenchmarkId::new("composite_curve", circle_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let composite = curve.curve().expect("Kurve nicht aufbaubar");
                    black_box(composite.total_length())
                })
            },
        );
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let curve = build_random_curve(16);
    let composite = curve.curve().expect("Kurve nicht aufbaubar");
    let total = composite.total_length();

    c.bench_function("spaced_points_250", |b| {
        b.iter(|| {
            let points =
                spaced_points_between(&composite, black_box(total), black_box(total * 0.2), 250);
            black_box(CurveTexture::from_points(&points).width())
        })
    });
}

fn bench_snake_frame(c: &mut Criterion) {
    let options = SnakeOptions {
        seed: Some(7),
        ..SnakeOptions::default()
    };
    let mut controller = SnakeController::new(options).expect("Controller nicht startbar");

    c.bench_function("snake_advance_frame", |b| {
        b.iter(|| {
            let frame = controller
                .advance(black_box(1.0 / 60.0))
                .expect("Frame fehlgeschlagen");
            black_box(frame.points.len())
        })
    });
}

criterion_group!(core_benches, bench_curve_assembly, bench_sampling, bench_snake_frame);
criterion_main!(core_benches);
