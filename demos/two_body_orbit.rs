//! Two-body Keplerian orbit — energy conservation check.
//!
//! Propagates a circular LEO orbit for one period with the adaptive
//! Dormand-Prince 4(5) driver and checks that the spacecraft returns to
//! its starting position with conserved energy.
//!
//! Run with:
//!   cargo run --example two_body_orbit

use astrodyn::ode::{AccelerationModel, AdaptiveStepDriver, TranslationalEom};
use nalgebra::{Vector3, Vector6};

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

fn energy(mu: f64, y: &Vector6<f64>) -> f64 {
    let r = Vector3::new(y[0], y[1], y[2]).norm();
    let v2 = y[3] * y[3] + y[4] * y[4] + y[5] * y[5];
    0.5 * v2 - mu / r
}

fn main() {
    let mu = 398600.4418; // Earth μ (km³/s²)

    // Circular orbit at 400 km altitude
    let earth_radius = 6378.137; // km
    let r0: f64 = earth_radius + 400.0;
    let v0 = (mu / r0).sqrt();
    let y0 = Vector6::new(r0, 0.0, 0.0, 0.0, v0, 0.0);

    // Orbital period: T = 2π √(a³/μ)
    let period = 2.0 * std::f64::consts::PI * (r0.powi(3) / mu).sqrt();

    let eom = TranslationalEom::new().with(PointMassGravity { mu });
    let mut driver = AdaptiveStepDriver::new(10.0, 1e-11);

    let e0 = energy(mu, &y0);
    let trajectory = driver
        .integrate(&eom, 0.0, period, &y0)
        .expect("propagation failed");
    let (tf, yf) = trajectory.last().expect("trajectory is never empty");
    let ef = energy(mu, yf);

    let pos_err = ((yf[0] - y0[0]).powi(2) + (yf[1] - y0[1]).powi(2) + (yf[2] - y0[2]).powi(2))
        .sqrt();

    println!("Two-Body Circular Orbit");
    println!("  Altitude:  400 km");
    println!("  Radius:    {r0:.3} km");
    println!("  Velocity:  {v0:.6} km/s");
    println!("  Period:    {:.1} s ({:.1} min)", period, period / 60.0);
    println!();
    println!("  Final time: {tf:.6} s");
    println!("  Samples:    {}", trajectory.len());
    println!("  Position error (return to start): {pos_err:.2e} km");
    println!(
        "  Energy drift: {:.2e}  (relative: {:.2e})",
        (ef - e0).abs(),
        ((ef - e0) / e0).abs()
    );
    println!();
    println!("  Accepted steps: {}", driver.stats.accepted_steps);
    println!("  Rejected steps: {}", driver.stats.rejected_steps);
}
