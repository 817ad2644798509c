//! Keplerian two-body propagation checks against closed-form orbit
//! properties: radius, energy and timing over one full period.

use approx::assert_relative_eq;
use astrodyn::ode::{
    AccelerationModel, AdaptiveStepDriver, FixedStepDriver, Rk4, TranslationalEom,
};
use nalgebra::{Vector3, Vector6};

/// Earth gravitational parameter (km³/s²).
const MU: f64 = 398600.4418;

/// Newtonian point-mass gravity: a = -μ r / |r|³.
struct PointMassGravity {
    mu: f64,
}

impl AccelerationModel for PointMassGravity {
    fn acceleration(&self, state: &Vector6<f64>) -> Vector3<f64> {
        let r = Vector3::new(state[0], state[1], state[2]);
        let r_mag = r.norm();
        -r * (self.mu / (r_mag * r_mag * r_mag))
    }
}

fn circular_orbit(radius: f64) -> (Vector6<f64>, f64) {
    let v = (MU / radius).sqrt();
    let period = 2.0 * std::f64::consts::PI * (radius.powi(3) / MU).sqrt();
    (Vector6::new(radius, 0.0, 0.0, 0.0, v, 0.0), period)
}

fn energy(y: &Vector6<f64>) -> f64 {
    let r = Vector3::new(y[0], y[1], y[2]).norm();
    let v2 = y[3] * y[3] + y[4] * y[4] + y[5] * y[5];
    0.5 * v2 - MU / r
}

#[test]
fn rk4_circular_orbit_radius_and_timing() {
    let r0 = 7000.0;
    let (y0, period) = circular_orbit(r0);
    let eom = TranslationalEom::new().with(PointMassGravity { mu: MU });

    let driver = FixedStepDriver::with_step_count(Rk4, 0.0, period, 20_000);
    let traj = driver.integrate(&eom, 0.0, period, &y0);

    // the final sample lands on the period exactly, no overshoot
    let (tf, yf) = traj.last().unwrap();
    assert_eq!(tf, period);
    assert!(traj.len() >= 20_001);

    // circular orbit: radius is conserved
    let rf = Vector3::new(yf[0], yf[1], yf[2]).norm();
    assert_relative_eq!(rf, r0, epsilon = 1e-3);

    // and the spacecraft returns to its starting point
    assert_relative_eq!(yf[0], y0[0], epsilon = 1e-2);
    assert_relative_eq!(yf[1], y0[1], epsilon = 1e-2);
}

#[test]
fn rk4_conserves_energy_and_angular_momentum() {
    let (y0, period) = circular_orbit(7000.0);
    let eom = TranslationalEom::new().with(PointMassGravity { mu: MU });

    let driver = FixedStepDriver::with_step_count(Rk4, 0.0, period, 20_000);
    let traj = driver.integrate(&eom, 0.0, period, &y0);
    let (_, yf) = traj.last().unwrap();

    let rel_energy_drift = ((energy(yf) - energy(&y0)) / energy(&y0)).abs();
    assert!(
        rel_energy_drift < 1e-10,
        "energy drift {rel_energy_drift:e}"
    );

    let h = |y: &Vector6<f64>| {
        Vector3::new(y[0], y[1], y[2]).cross(&Vector3::new(y[3], y[4], y[5]))
    };
    let dh = (h(yf) - h(&y0)).norm() / h(&y0).norm();
    assert!(dh < 1e-10, "angular momentum drift {dh:e}");
}

#[test]
fn adaptive_matches_fixed_on_one_orbit() {
    let (y0, period) = circular_orbit(7000.0);
    let eom = TranslationalEom::new().with(PointMassGravity { mu: MU });

    let mut adaptive = AdaptiveStepDriver::new(10.0, 1e-10);
    let traj = adaptive.integrate(&eom, 0.0, period, &y0).unwrap();
    let (tf, yf) = traj.last().unwrap();

    assert_eq!(tf, period);
    let rf = Vector3::new(yf[0], yf[1], yf[2]).norm();
    assert_relative_eq!(rf, 7000.0, epsilon = 1e-3);
    // far fewer right-hand-side samples than the fixed-step sweep
    assert!(traj.len() < 20_000);
}

#[test]
fn eccentric_orbit_energy_conservation() {
    // e = 0.7 ellipse starting at periapsis
    let rp = 6678.0;
    let e = 0.7;
    let a = rp / (1.0 - e);
    let v_peri = (MU * (2.0 / rp - 1.0 / a)).sqrt();
    let y0 = Vector6::new(rp, 0.0, 0.0, 0.0, v_peri, 0.0);
    let period = 2.0 * std::f64::consts::PI * (a.powi(3) / MU).sqrt();

    let eom = TranslationalEom::new().with(PointMassGravity { mu: MU });
    let mut adaptive = AdaptiveStepDriver::new(10.0, 1e-11);
    let traj = adaptive.integrate(&eom, 0.0, period, &y0).unwrap();
    let (_, yf) = traj.last().unwrap();

    let rel_drift = ((energy(yf) - energy(&y0)) / energy(&y0)).abs();
    assert!(rel_drift < 1e-8, "energy drift {rel_drift:e}");
    // the fast periapsis start rejects the 10 s initial guess
    assert!(adaptive.stats.rejected_steps > 0);
}
