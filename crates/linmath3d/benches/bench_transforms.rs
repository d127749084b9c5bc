use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linmath3d::{Mat4F32, Vec3F32};
use rand::Rng;
use std::hint::black_box;

fn bench_mat4_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4_mul");
    let mut rng = rand::rng();

    let k_m1 = Mat4F32::from_array(std::array::from_fn(|_| rng.random()));
    let k_m2 = Mat4F32::from_array(std::array::from_fn(|_| rng.random()));

    // glam matrices hold the same values in column-major order
    let g_m1 = glam::Mat4::from(k_m1);
    let g_m2 = glam::Mat4::from(k_m2);

    group.bench_function(BenchmarkId::new("linmath3d", ""), |b| {
        b.iter(|| black_box(k_m1) * black_box(k_m2))
    });

    group.bench_function(BenchmarkId::new("glam", ""), |b| {
        b.iter(|| black_box(g_m1) * black_box(g_m2))
    });

    group.finish();
}

fn bench_constructors(c: &mut Criterion) {
    let mut group = c.benchmark_group("constructors");

    let eye = Vec3F32::new(4.0, 3.0, -2.0);
    let center = Vec3F32::new(0.5, 0.0, 1.0);
    let axis = Vec3F32::new(0.3, -0.4, 0.5);

    group.bench_function(BenchmarkId::new("look_at", "linmath3d"), |b| {
        b.iter(|| Mat4F32::look_at(black_box(eye), black_box(center), Vec3F32::Y))
    });

    group.bench_function(BenchmarkId::new("look_at", "glam"), |b| {
        b.iter(|| {
            glam::Mat4::look_at_rh(
                black_box(eye).into(),
                black_box(center).into(),
                glam::Vec3::Y,
            )
        })
    });

    group.bench_function(BenchmarkId::new("perspective", "linmath3d"), |b| {
        b.iter(|| Mat4F32::perspective(black_box(1.1), 16.0 / 9.0, 0.1, 100.0))
    });

    group.bench_function(BenchmarkId::new("perspective", "glam"), |b| {
        b.iter(|| glam::Mat4::perspective_rh_gl(black_box(1.1), 16.0 / 9.0, 0.1, 100.0))
    });

    group.bench_function(BenchmarkId::new("axis_angle", "linmath3d"), |b| {
        b.iter(|| Mat4F32::from_axis_angle_degrees(black_box(axis), black_box(72.0)))
    });

    group.bench_function(BenchmarkId::new("euler", "linmath3d"), |b| {
        b.iter(|| Mat4F32::from_euler_degrees(black_box(10.0), black_box(20.0), black_box(30.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_mat4_mul, bench_constructors);
criterion_main!(benches);
