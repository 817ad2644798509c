use criterion::{black_box, criterion_group, criterion_main, Criterion};

use astrodyn::attitude::{dcm_from_euler, euler_from_dcm, quaternion_from_dcm, EulerSequence};
use astrodyn::ode::{AdaptiveStepDriver, FixedStepDriver, Rk4};
use astrodyn::units::AngleUnit;
use nalgebra::{Vector2, Vector3, Vector6};

/// Keplerian two-body problem (6-state), Earth μ in km³/s².
fn two_body(_t: f64, y: &Vector6<f64>) -> Vector6<f64> {
    let mu = 398600.4418;
    let r = (y[0] * y[0] + y[1] * y[1] + y[2] * y[2]).sqrt();
    let mu_r3 = mu / (r * r * r);
    Vector6::new(
        y[3],
        y[4],
        y[5],
        -mu_r3 * y[0],
        -mu_r3 * y[1],
        -mu_r3 * y[2],
    )
}

fn circular_ic() -> (Vector6<f64>, f64) {
    let mu = 398600.4418;
    let r0: f64 = 6878.0;
    let v0 = (mu / r0).sqrt();
    let period = 2.0 * std::f64::consts::PI * (r0.powi(3) / mu).sqrt();
    (Vector6::new(r0, 0.0, 0.0, 0.0, v0, 0.0), period)
}

fn bench_rk4_orbit_1period(c: &mut Criterion) {
    let (y0, period) = circular_ic();
    let driver = FixedStepDriver::with_step_count(Rk4, 0.0, period, 10_000);

    c.bench_function("rk4_orbit_1period", |b| {
        b.iter(|| driver.integrate(&two_body, 0.0, period, black_box(&y0)))
    });
}

fn bench_dp45_orbit_1period(c: &mut Criterion) {
    let (y0, period) = circular_ic();

    c.bench_function("dp45_orbit_1period", |b| {
        b.iter(|| {
            let mut driver = AdaptiveStepDriver::new(10.0, 1e-10);
            driver
                .integrate(&two_body, 0.0, period, black_box(&y0))
                .unwrap()
        })
    });
}

fn bench_rk4_harmonic_oscillator(c: &mut Criterion) {
    let oscillator = |_t: f64, y: &Vector2<f64>| Vector2::new(y[1], -y[0]);
    let period = 2.0 * std::f64::consts::PI;
    let driver = FixedStepDriver::with_step_count(Rk4, 0.0, period, 1_000);
    let y0 = Vector2::new(1.0, 0.0);

    c.bench_function("rk4_harmonic_oscillator_1period", |b| {
        b.iter(|| driver.integrate(&oscillator, 0.0, period, black_box(&y0)))
    });
}

fn bench_euler_round_trip(c: &mut Criterion) {
    let angles = Vector3::new(0.3, -0.7, 1.2);

    c.bench_function("euler_dcm_round_trip", |b| {
        b.iter(|| {
            let dcm = dcm_from_euler(black_box(&angles), EulerSequence::Zyx, AngleUnit::Radians);
            euler_from_dcm(&dcm, EulerSequence::Zyx)
        })
    });
}

fn bench_quaternion_extraction(c: &mut Criterion) {
    let dcm = dcm_from_euler(
        &Vector3::new(0.3, -0.7, 1.2),
        EulerSequence::Zyx,
        AngleUnit::Radians,
    );

    c.bench_function("quaternion_from_dcm", |b| {
        b.iter(|| quaternion_from_dcm(black_box(&dcm)))
    });
}

criterion_group!(
    benches,
    bench_rk4_orbit_1period,
    bench_dp45_orbit_1period,
    bench_rk4_harmonic_oscillator,
    bench_euler_round_trip,
    bench_quaternion_extraction
);
criterion_main!(benches);
