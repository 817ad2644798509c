//! Quaternion (Euler parameter) ↔ DCM fast path.
//!
//! Quaternions are scalar-last `[x, y, z, w]`. Extraction from a DCM
//! uses Shepperd's method: branch on the trace and the dominant diagonal
//! entry so the divisor is always the largest quaternion component. A
//! single fixed formula divides by a quantity that vanishes at 180°
//! rotations; the branch selection is what keeps the extraction stable
//! there.

use nalgebra::{Matrix3, Vector4};

/// Unit quaternion equivalent to a direction cosine matrix.
///
/// The result is always normalized. Each of the four branches is exact
/// over its selection region; the divisor `s` is four times the largest
/// component, bounded away from zero by construction.
pub fn quaternion_from_dcm(c: &Matrix3<f64>) -> Vector4<f64> {
    let tr = c.trace();
    let mut q = Vector4::zeros();

    if tr > 0.0 {
        let s = (tr + 1.0).sqrt() * 2.0; // 4w
        q[3] = 0.25 * s;
        q[0] = (c[(1, 2)] - c[(2, 1)]) / s;
        q[1] = (c[(2, 0)] - c[(0, 2)]) / s;
        q[2] = (c[(0, 1)] - c[(1, 0)]) / s;
    } else if c[(0, 0)] > c[(1, 1)] && c[(0, 0)] > c[(2, 2)] {
        let s = (1.0 + c[(0, 0)] - c[(1, 1)] - c[(2, 2)]).sqrt() * 2.0; // 4x
        q[0] = 0.25 * s;
        q[1] = (c[(0, 1)] + c[(1, 0)]) / s;
        q[2] = (c[(0, 2)] + c[(2, 0)]) / s;
        q[3] = (c[(1, 2)] - c[(2, 1)]) / s;
    } else if c[(1, 1)] > c[(2, 2)] {
        let s = (1.0 + c[(1, 1)] - c[(0, 0)] - c[(2, 2)]).sqrt() * 2.0; // 4y
        q[0] = (c[(0, 1)] + c[(1, 0)]) / s;
        q[1] = 0.25 * s;
        q[2] = (c[(1, 2)] + c[(2, 1)]) / s;
        q[3] = (c[(2, 0)] - c[(0, 2)]) / s;
    } else {
        let s = (1.0 + c[(2, 2)] - c[(0, 0)] - c[(1, 1)]).sqrt() * 2.0; // 4z
        q[0] = (c[(0, 2)] + c[(2, 0)]) / s;
        q[1] = (c[(1, 2)] + c[(2, 1)]) / s;
        q[2] = 0.25 * s;
        q[3] = (c[(0, 1)] - c[(1, 0)]) / s;
    }

    q.normalize()
}

/// Direction cosine matrix from a quaternion.
///
/// Closed form, no normalization: supply a unit quaternion or accept a
/// non-orthonormal result. (Conversions in this crate always produce
/// unit quaternions; the asymmetry with [`quaternion_from_dcm`], which
/// does normalize, is deliberate.)
pub fn dcm_from_quaternion(q: &Vector4<f64>) -> Matrix3<f64> {
    let (q1, q2, q3, q4) = (q[0], q[1], q[2], q[3]);

    let q1s = q1 * q1;
    let q2s = q2 * q2;
    let q3s = q3 * q3;
    let q4s = q4 * q4;

    Matrix3::new(
        q1s - q2s - q3s + q4s,
        2.0 * (q1 * q2 + q3 * q4),
        2.0 * (q1 * q3 - q2 * q4),
        //
        2.0 * (q1 * q2 - q3 * q4),
        -q1s + q2s - q3s + q4s,
        2.0 * (q2 * q3 + q1 * q4),
        //
        2.0 * (q1 * q3 + q2 * q4),
        2.0 * (q2 * q3 - q1 * q4),
        -q1s - q2s + q3s + q4s,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attitude::{single_axis_rotation, Axis};
    use crate::units::AngleUnit;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    fn compose(zyx_deg: (f64, f64, f64)) -> Matrix3<f64> {
        single_axis_rotation(zyx_deg.2, Axis::X, AngleUnit::Degrees)
            * single_axis_rotation(zyx_deg.1, Axis::Y, AngleUnit::Degrees)
            * single_axis_rotation(zyx_deg.0, Axis::Z, AngleUnit::Degrees)
    }

    fn assert_round_trip(c: &Matrix3<f64>) {
        let q = quaternion_from_dcm(c);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dcm_from_quaternion(&q), *c, epsilon = 1e-9);
    }

    #[test]
    fn identity_maps_to_identity_quaternion() {
        let q = quaternion_from_dcm(&Matrix3::identity());
        assert_relative_eq!(q, Vector4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-15);
        assert_relative_eq!(
            dcm_from_quaternion(&Vector4::new(0.0, 0.0, 0.0, 1.0)),
            Matrix3::identity(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn known_single_axis_quaternion() {
        // θ about z: q = [0, 0, sin(θ/2), cos(θ/2)]
        let theta = 0.8_f64;
        let c = single_axis_rotation(theta, Axis::Z, AngleUnit::Radians);
        let q = quaternion_from_dcm(&c);
        assert_relative_eq!(
            q,
            Vector4::new(0.0, 0.0, (theta / 2.0).sin(), (theta / 2.0).cos()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn round_trip_trace_branch() {
        // small and moderate rotations keep tr > 0
        assert_round_trip(&compose((1.0e-4, -2.0e-4, 3.0e-5)));
        assert_round_trip(&compose((20.0, -35.0, 60.0)));
        assert_round_trip(&compose((90.0, 0.0, 0.0)));
        assert_round_trip(&compose((0.0, 89.9, 0.0)));
    }

    #[test]
    fn round_trip_diagonal_branches_at_180() {
        // axis-aligned 180° rotations select each diagonal branch in turn
        assert_round_trip(&compose((0.0, 0.0, 180.0))); // x dominant
        assert_round_trip(&compose((0.0, 180.0, 0.0))); // y dominant
        assert_round_trip(&compose((180.0, 0.0, 0.0))); // z dominant
    }

    #[test]
    fn round_trip_near_180_generic_axis() {
        // 179.99° about a skew axis: trace ≈ -1, off-axis branches
        let axis = Vector3::new(1.0, 2.0, -0.5).normalize();
        let theta = 179.99_f64.to_radians();
        let c = crate::attitude::dcm_from_principal_rotation(&axis, theta, AngleUnit::Radians);
        assert_round_trip(&c);

        let c = crate::attitude::dcm_from_principal_rotation(&axis, PI, AngleUnit::Radians);
        assert_round_trip(&c);
    }

    #[test]
    fn extraction_sign_convention() {
        // right-hand rotation about +x gives positive q1
        let c = single_axis_rotation(0.3, Axis::X, AngleUnit::Radians);
        let q = quaternion_from_dcm(&c);
        assert!(q[0] > 0.0 && q[3] > 0.0);
    }
}
