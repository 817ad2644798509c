//! Rotational kinematics and dynamics right-hand sides.
//!
//! These are the attitude-specific derivative functions fed to the
//! integration engine: the Euler-parameter kinematic differential
//! equation and the rigid-body angular velocity dynamics. Both are pure
//! and allocation-free, so they compose directly into an
//! [`OdeSystem`](crate::ode::OdeSystem) closure.

use nalgebra::{Matrix3, Vector3, Vector4};

/// Euler-parameter kinematic differential equation.
///
/// `dq/dt = ½ B(q) ω` with `ω` the body-frame angular velocity (rad/s)
/// and `q` scalar-last. Integrating this keeps `|q| = 1` up to
/// integration error; renormalize periodically on long propagations.
pub fn quaternion_kinematics(q: &Vector4<f64>, omega: &Vector3<f64>) -> Vector4<f64> {
    let (q1, q2, q3, q4) = (q[0], q[1], q[2], q[3]);
    let (o1, o2, o3) = (omega[0], omega[1], omega[2]);

    0.5 * Vector4::new(
        o3 * q2 - o2 * q3 + o1 * q4,
        -o3 * q1 + o1 * q3 + o2 * q4,
        o2 * q1 - o1 * q2 + o3 * q4,
        -o1 * q1 - o2 * q2 - o3 * q3,
    )
}

/// Rigid-body angular velocity dynamics (Euler's rotational equations).
///
/// `dω/dt = I⁻¹ (L − ω × Iω)` for a general (not necessarily diagonal)
/// inertia tensor. The inverse is passed in so repeated right-hand-side
/// evaluations do not refactor the tensor.
pub fn angular_velocity_dynamics(
    omega: &Vector3<f64>,
    torque: &Vector3<f64>,
    inertia: &Matrix3<f64>,
    inertia_inv: &Matrix3<f64>,
) -> Vector3<f64> {
    let h = inertia * omega;
    inertia_inv * (torque - omega.cross(&h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kde_preserves_norm_to_first_order() {
        // q · dq/dt = 0, so |q| is an invariant of the exact flow
        let q = Vector4::new(0.1, 0.2, 0.3, 0.9).normalize();
        let omega = Vector3::new(0.3, -1.2, 0.7);
        let dq = quaternion_kinematics(&q, &omega);
        assert_relative_eq!(q.dot(&dq), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn kde_pure_spin_rate() {
        // identity attitude spinning about z: dq = ½ [0, 0, ω, 0]
        let q = Vector4::new(0.0, 0.0, 0.0, 1.0);
        let omega = Vector3::new(0.0, 0.0, 2.0);
        let dq = quaternion_kinematics(&q, &omega);
        assert_relative_eq!(dq, Vector4::new(0.0, 0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn torque_free_axisymmetric_spin_is_steady() {
        // spin about a principal axis of a symmetric body: dω/dt = 0
        let inertia = Matrix3::from_diagonal(&Vector3::new(10.0, 10.0, 5.0));
        let inertia_inv = Matrix3::from_diagonal(&Vector3::new(0.1, 0.1, 0.2));
        let omega = Vector3::new(0.0, 0.0, 3.0);
        let dw = angular_velocity_dynamics(&omega, &Vector3::zeros(), &inertia, &inertia_inv);
        assert_relative_eq!(dw, Vector3::zeros(), epsilon = 1e-14);
    }

    #[test]
    fn gyroscopic_coupling_sign() {
        // I = diag(I1, I2, I3): dω1/dt = (I2 - I3)/I1 · ω2 ω3
        let inertia = Matrix3::from_diagonal(&Vector3::new(2.0, 4.0, 8.0));
        let inertia_inv = Matrix3::from_diagonal(&Vector3::new(0.5, 0.25, 0.125));
        let omega = Vector3::new(0.0, 1.0, 1.0);
        let dw = angular_velocity_dynamics(&omega, &Vector3::zeros(), &inertia, &inertia_inv);
        assert_relative_eq!(dw[0], (4.0 - 8.0) / 2.0, epsilon = 1e-14);
    }

    #[test]
    fn torque_drives_rates_through_inverse_inertia() {
        let inertia = Matrix3::from_diagonal(&Vector3::new(2.0, 4.0, 8.0));
        let inertia_inv = Matrix3::from_diagonal(&Vector3::new(0.5, 0.25, 0.125));
        let torque = Vector3::new(1.0, 1.0, 1.0);
        let dw =
            angular_velocity_dynamics(&Vector3::zeros(), &torque, &inertia, &inertia_inv);
        assert_relative_eq!(dw, Vector3::new(0.5, 0.25, 0.125), epsilon = 1e-14);
    }
}
