use std::hint::black_box;

use attitude::fastmath::{self, Fast, FastRefined, Library};
use attitude::traits::{InverseTrigonometry, ReciprocalSqrt, Trigonometry};
use attitude::{Matrix3, Quaternion, Vector3};
use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Scalar primitives: library vs approximations
// ---------------------------------------------------------------------------

fn reciprocal_sqrt(c: &mut Criterion) {
    let mut g = c.benchmark_group("reciprocal_sqrt");

    g.bench_function("library", |b| b.iter(|| Library::reciprocal_sqrt(black_box(2.7_f32))));
    g.bench_function("fast", |b| b.iter(|| Fast::reciprocal_sqrt(black_box(2.7_f32))));
    g.bench_function("fast_refined", |b| {
        b.iter(|| FastRefined::reciprocal_sqrt(black_box(2.7_f32)))
    });

    g.finish();
}

fn sin_cos(c: &mut Criterion) {
    let mut g = c.benchmark_group("sin_cos");

    g.bench_function("library", |b| b.iter(|| Library::sin_cos(black_box(1.234_f32))));
    g.bench_function("fast", |b| b.iter(|| Fast::sin_cos(black_box(1.234_f32))));

    g.finish();
}

fn atan2(c: &mut Criterion) {
    let mut g = c.benchmark_group("atan2");

    g.bench_function("library", |b| {
        b.iter(|| Library::atan2(black_box(-0.3_f32), black_box(0.8_f32)))
    });
    g.bench_function("fast", |b| {
        b.iter(|| Fast::atan2(black_box(-0.3_f32), black_box(0.8_f32)))
    });

    g.finish();
}

fn asin(c: &mut Criterion) {
    let mut g = c.benchmark_group("asin");

    g.bench_function("library", |b| b.iter(|| Library::asin(black_box(0.83_f32))));
    g.bench_function("fast", |b| b.iter(|| Fast::asin(black_box(0.83_f32))));

    g.finish();
}

// ---------------------------------------------------------------------------
// Conversions: attitude (active features) vs nalgebra
// ---------------------------------------------------------------------------

const ROLL: f32 = 0.33;
const PITCH: f32 = -0.75;
const YAW: f32 = 2.1;

fn from_euler(c: &mut Criterion) {
    let mut g = c.benchmark_group("quaternion_from_euler");

    g.bench_function("attitude", |b| {
        b.iter(|| {
            Quaternion::from_euler_angles_radians(black_box(ROLL), black_box(PITCH), black_box(YAW))
        })
    });

    g.bench_function("nalgebra", |b| {
        b.iter(|| {
            nalgebra::UnitQuaternion::from_euler_angles(
                black_box(ROLL),
                black_box(PITCH),
                black_box(YAW),
            )
        })
    });

    g.finish();
}

fn to_euler(c: &mut Criterion) {
    let mut g = c.benchmark_group("quaternion_to_euler");

    g.bench_function("attitude", |b| {
        let q = Quaternion::from_euler_angles_radians(ROLL, PITCH, YAW);
        b.iter(|| black_box(q).euler_angles_radians())
    });

    g.bench_function("attitude_trig_ratios", |b| {
        let q = Quaternion::from_euler_angles_radians(ROLL, PITCH, YAW);
        b.iter(|| {
            let q = black_box(q);
            (q.sin_roll(), q.cos_roll(), q.sin_pitch(), q.cos_pitch(), q.sin_yaw(), q.cos_yaw())
        })
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra::UnitQuaternion::from_euler_angles(ROLL, PITCH, YAW);
        b.iter(|| black_box(&q).euler_angles())
    });

    g.finish();
}

fn rotate_vector(c: &mut Criterion) {
    let mut g = c.benchmark_group("rotate_vector");

    g.bench_function("attitude", |b| {
        let q = Quaternion::from_euler_angles_radians(ROLL, PITCH, YAW);
        let v = Vector3::new(1.0, -2.0, 0.5);
        b.iter(|| black_box(q).rotate(black_box(v)))
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra::UnitQuaternion::from_euler_angles(ROLL, PITCH, YAW);
        let v = nalgebra::Vector3::new(1.0_f32, -2.0, 0.5);
        b.iter(|| black_box(&q) * black_box(v))
    });

    g.finish();
}

fn quaternion_to_matrix(c: &mut Criterion) {
    let mut g = c.benchmark_group("quaternion_to_matrix");

    g.bench_function("attitude", |b| {
        let q = Quaternion::from_euler_angles_radians(ROLL, PITCH, YAW);
        b.iter(|| Matrix3::from_quaternion(black_box(&q)))
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra::UnitQuaternion::from_euler_angles(ROLL, PITCH, YAW);
        b.iter(|| black_box(&q).to_rotation_matrix())
    });

    g.finish();
}

fn matrix_to_quaternion(c: &mut Criterion) {
    let mut g = c.benchmark_group("matrix_to_quaternion");

    g.bench_function("attitude", |b| {
        let m = Matrix3::from_euler_angles_radians(ROLL, PITCH, YAW);
        b.iter(|| black_box(&m).to_quaternion())
    });

    g.bench_function("nalgebra", |b| {
        let r = nalgebra::Rotation3::from_euler_angles(ROLL, PITCH, YAW);
        b.iter(|| nalgebra::UnitQuaternion::from_rotation_matrix(black_box(&r)))
    });

    g.finish();
}

fn normalize(c: &mut Criterion) {
    let mut g = c.benchmark_group("quaternion_normalize");

    g.bench_function("attitude", |b| {
        let q = Quaternion::new(0.9, 0.3, -0.2, 0.4);
        b.iter(|| black_box(q).normalized())
    });

    g.bench_function("attitude_library_rsqrt", |b| {
        let q = Quaternion::new(0.9, 0.3, -0.2, 0.4);
        b.iter(|| {
            let q = black_box(q);
            q * Library::reciprocal_sqrt(q.magnitude_squared())
        })
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra::Quaternion::new(0.9_f32, 0.3, -0.2, 0.4);
        b.iter(|| black_box(&q).normalize())
    });

    g.finish();
}

// Dispatcher overhead: should match the strategy it resolves to.
fn dispatch(c: &mut Criterion) {
    let mut g = c.benchmark_group("dispatch");

    g.bench_function("reciprocal_sqrt", |b| {
        b.iter(|| fastmath::reciprocal_sqrt(black_box(2.7_f32)))
    });
    g.bench_function("sin_cos", |b| b.iter(|| fastmath::sin_cos(black_box(1.234_f32))));

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    reciprocal_sqrt,
    sin_cos,
    atan2,
    asin,
    from_euler,
    to_euler,
    rotate_vector,
    quaternion_to_matrix,
    matrix_to_quaternion,
    normalize,
    dispatch,
);
criterion_main!(benches);
