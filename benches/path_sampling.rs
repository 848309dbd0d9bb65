use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flyby::math::quat;
use flyby::path::tangent::tangents;
use flyby::path::{CameraPath, PathDriver, TangentParams};
use flyby::scenes::create_flythrough_scene;
use glam::{Quat, Vec3};

fn flythrough_path() -> CameraPath {
    let scene = create_flythrough_scene();
    CameraPath::from_config(&scene.path).unwrap()
}

/// Benchmark: one full driver tick (tangents + Hermite + SQUAD)
fn bench_driver_tick(c: &mut Criterion) {
    let mut driver = PathDriver::new(flythrough_path());

    c.bench_function("driver_tick", |b| {
        b.iter(|| black_box(driver.tick(black_box(0.005))))
    });
}

/// Benchmark: tangent pair in isolation
fn bench_tangents(c: &mut Criterion) {
    let p0 = Vec3::new(0.0, 5.0, -3.0);
    let p1 = Vec3::new(1.0, 3.0, -1.0);
    let p2 = Vec3::new(2.0, 3.0, 1.0);
    let p3 = Vec3::new(2.0, 3.0, 0.0);

    c.bench_function("tangent_pair", |b| {
        b.iter(|| {
            black_box(tangents(
                TangentParams::NEUTRAL,
                black_box(p0),
                black_box(p1),
                black_box(p2),
                black_box(p3),
            ))
        })
    });
}

/// Benchmark: squad evaluation with precomputed inner points
fn bench_squad(c: &mut Criterion) {
    let q1 = Quat::from_rotation_arc(Vec3::NEG_Z, Vec3::new(1.0, 0.0, 1.0).normalize());
    let q2 = Quat::from_rotation_arc(Vec3::NEG_Z, Vec3::new(0.3, 0.0, 1.0).normalize());
    let s1 = quat::inner_quadrangle_point(Quat::IDENTITY, q1, q2);
    let s2 = quat::inner_quadrangle_point(q1, q2, Quat::IDENTITY);

    c.bench_function("squad", |b| {
        b.iter(|| black_box(quat::squad(q1, q2, s1, s2, black_box(0.37))))
    });
}

criterion_group!(benches, bench_driver_tick, bench_tangents, bench_squad);
criterion_main!(benches);
