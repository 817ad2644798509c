//! Torque-free rigid-body tumble — attitude propagation.
//!
//! Integrates the coupled quaternion kinematics and Euler rotational
//! dynamics for an asymmetric body, then checks the two invariants of
//! torque-free motion: rotational kinetic energy and the magnitude of
//! the angular momentum vector.
//!
//! Run with:
//!   cargo run --example tumbling_body

use astrodyn::attitude::{angular_velocity_dynamics, quaternion_kinematics};
use astrodyn::ode::{FixedStepDriver, Rk4};
use nalgebra::{Matrix3, SVector, Vector3, Vector4};

type AttitudeState = SVector<f64, 7>; // [q1, q2, q3, q4, ω1, ω2, ω3]

fn split(x: &AttitudeState) -> (Vector4<f64>, Vector3<f64>) {
    (
        Vector4::new(x[0], x[1], x[2], x[3]),
        Vector3::new(x[4], x[5], x[6]),
    )
}

fn main() {
    // asymmetric inertia tensor (kg·m²), principal axes
    let inertia = Matrix3::from_diagonal(&Vector3::new(10.0, 6.0, 4.0));
    let inertia_inv = Matrix3::from_diagonal(&Vector3::new(0.1, 1.0 / 6.0, 0.25));
    let torque = Vector3::zeros();

    let rhs = move |_t: f64, x: &AttitudeState| -> AttitudeState {
        let (q, omega) = split(x);
        let dq = quaternion_kinematics(&q, &omega);
        let dw = angular_velocity_dynamics(&omega, &torque, &inertia, &inertia_inv);
        SVector::<f64, 7>::from_column_slice(&[dq[0], dq[1], dq[2], dq[3], dw[0], dw[1], dw[2]])
    };

    // identity attitude, tumbling about all three axes
    let omega0 = Vector3::new(0.3, 1.0, -0.2);
    let x0 =
        SVector::<f64, 7>::from_column_slice(&[0.0, 0.0, 0.0, 1.0, omega0[0], omega0[1], omega0[2]]);

    let kinetic = |w: &Vector3<f64>| 0.5 * w.dot(&(inertia * w));
    let momentum = |w: &Vector3<f64>| (inertia * w).norm();

    let driver = FixedStepDriver::new(Rk4, 0.01);
    let trajectory = driver.integrate(&rhs, 0.0, 60.0, &x0);

    let (tf, xf) = trajectory.last().expect("trajectory is never empty");
    let (qf, wf) = split(xf);

    println!("Torque-Free Tumble (60 s, RK4 @ 10 ms)");
    println!(
        "  ω(0)  = [{:.4}, {:.4}, {:.4}] rad/s",
        omega0[0], omega0[1], omega0[2]
    );
    println!("  ω(tf) = [{:.4}, {:.4}, {:.4}] rad/s", wf[0], wf[1], wf[2]);
    println!("  final time: {tf} s, samples: {}", trajectory.len());
    println!();
    println!(
        "  |q| drift:        {:.2e}",
        (qf.norm() - 1.0).abs()
    );
    println!(
        "  energy drift:     {:.2e}",
        (kinetic(&wf) - kinetic(&omega0)).abs() / kinetic(&omega0)
    );
    println!(
        "  |H| drift:        {:.2e}",
        (momentum(&wf) - momentum(&omega0)).abs() / momentum(&omega0)
    );
}
