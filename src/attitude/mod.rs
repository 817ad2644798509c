//! Attitude Representation & Conversion Engine
//!
//! Pure conversion functions between the six classical rigid-body
//! attitude parameterizations, with the direction cosine matrix as the
//! canonical hub plus a direct quaternion↔DCM fast path.
//!
//! # Convention
//!
//! All matrices are direction cosine matrices in the flight-dynamics
//! (passive) sense: `C` maps inertial-frame components into body-frame
//! components. Quaternions are Euler parameters stored scalar-last,
//! `[x, y, z, w]`. Internal math is radians-only; entry points that
//! accept raw angles take an explicit [`AngleUnit`](crate::units::AngleUnit).
//!
//! # Singularities
//!
//! | Representation | Singular at | Handling |
//! |----------------|-------------|----------|
//! | Euler angles | gimbal lock (middle angle) | explicit branch, first angle zeroed |
//! | Quaternion extraction | 180° rotations | Shepperd branch selection |
//! | CRP | 180° rotation | caller responsibility |
//! | MRP | 360° rotation | caller responsibility |

mod dcm;
mod euler;
mod kinematics;
mod quaternion;
mod rodrigues;

pub use dcm::{orthonormalize, single_axis_rotation, skew, Axis};
pub use euler::{dcm_from_euler, euler_from_dcm, quaternion_from_euler, EulerSequence};
pub use kinematics::{angular_velocity_dynamics, quaternion_kinematics};
pub use quaternion::{dcm_from_quaternion, quaternion_from_dcm};
pub use rodrigues::{
    dcm_from_crp, dcm_from_mrp, dcm_from_principal_rotation, quaternion_from_crp,
    quaternion_from_mrp, quaternion_from_principal_rotation,
};

use crate::units::{to_radians, AngleUnit};
use nalgebra::{Matrix3, Vector3, Vector4};

/// An attitude in one of the six supported representations.
///
/// The variant set is closed, so conversion dispatch is an exhaustive
/// match rather than virtual dispatch over an open class hierarchy.
/// Angles stored in the variants are radians; use the constructors to
/// supply other units.
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    /// 3×3 direction cosine matrix (orthonormal, det = +1).
    Dcm(Matrix3<f64>),
    /// Euler parameters, scalar-last `[x, y, z, w]`, unit norm.
    Quaternion(Vector4<f64>),
    /// Three rotation angles (radians) about an axis sequence.
    EulerAngles {
        /// Rotation angles in radians, in order of application.
        angles: Vector3<f64>,
        /// One of the twelve valid axis sequences.
        sequence: EulerSequence,
    },
    /// Single rotation about a unit axis (angle in radians).
    PrincipalRotation {
        /// Unit rotation axis.
        axis: Vector3<f64>,
        /// Rotation angle in radians.
        angle: f64,
    },
    /// Classical Rodrigues parameters, `e · tan(θ/2)`.
    Crp(Vector3<f64>),
    /// Modified Rodrigues parameters, `e · tan(θ/4)`.
    Mrp(Vector3<f64>),
}

impl Rotation {
    /// Euler-angle rotation from angles in an arbitrary unit.
    pub fn euler_angles(angles: &Vector3<f64>, sequence: EulerSequence, unit: AngleUnit) -> Self {
        Rotation::EulerAngles {
            angles: angles.map(|a| to_radians(a, unit)),
            sequence,
        }
    }

    /// Principal rotation from an angle in an arbitrary unit.
    pub fn principal_rotation(axis: &Vector3<f64>, angle: f64, unit: AngleUnit) -> Self {
        Rotation::PrincipalRotation {
            axis: *axis,
            angle: to_radians(angle, unit),
        }
    }

    /// Convert to a direction cosine matrix.
    pub fn to_dcm(&self) -> Matrix3<f64> {
        match self {
            Rotation::Dcm(c) => *c,
            Rotation::Quaternion(q) => dcm_from_quaternion(q),
            Rotation::EulerAngles { angles, sequence } => {
                dcm_from_euler(angles, *sequence, AngleUnit::Radians)
            }
            Rotation::PrincipalRotation { axis, angle } => {
                dcm_from_principal_rotation(axis, *angle, AngleUnit::Radians)
            }
            Rotation::Crp(q) => dcm_from_crp(q),
            Rotation::Mrp(s) => dcm_from_mrp(s),
        }
    }

    /// Convert to a unit quaternion.
    ///
    /// The DCM fast path is used directly; every other representation
    /// routes through [`Rotation::to_dcm`].
    pub fn to_quaternion(&self) -> Vector4<f64> {
        match self {
            Rotation::Quaternion(q) => *q,
            Rotation::Dcm(c) => quaternion_from_dcm(c),
            Rotation::EulerAngles { .. }
            | Rotation::PrincipalRotation { .. }
            | Rotation::Crp(_)
            | Rotation::Mrp(_) => quaternion_from_dcm(&self.to_dcm()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dispatch_agrees_with_direct_conversions() {
        let angles = Vector3::new(0.3, -0.5, 1.1);
        let rot = Rotation::euler_angles(&angles, EulerSequence::Zyx, AngleUnit::Radians);
        let direct = dcm_from_euler(&angles, EulerSequence::Zyx, AngleUnit::Radians);
        assert_relative_eq!(rot.to_dcm(), direct, epsilon = 1e-14);
        assert_relative_eq!(rot.to_quaternion(), quaternion_from_dcm(&direct), epsilon = 1e-14);
    }

    #[test]
    fn constructors_convert_units() {
        let deg = Rotation::euler_angles(
            &Vector3::new(90.0, 0.0, 0.0),
            EulerSequence::Xyz,
            AngleUnit::Degrees,
        );
        let rad = Rotation::euler_angles(
            &Vector3::new(std::f64::consts::FRAC_PI_2, 0.0, 0.0),
            EulerSequence::Xyz,
            AngleUnit::Radians,
        );
        assert_relative_eq!(deg.to_dcm(), rad.to_dcm(), epsilon = 1e-14);
    }

    #[test]
    fn all_representations_agree_on_a_common_rotation() {
        // 60° about the body z axis, expressed in every parameterization
        let theta: f64 = std::f64::consts::FRAC_PI_3;
        let axis = Vector3::new(0.0, 0.0, 1.0);

        let from_pr = Rotation::principal_rotation(&axis, theta, AngleUnit::Radians);
        let from_crp = Rotation::Crp(axis * (theta / 2.0).tan());
        let from_mrp = Rotation::Mrp(axis * (theta / 4.0).tan());
        let from_ea = Rotation::euler_angles(
            &Vector3::new(theta, 0.0, 0.0),
            EulerSequence::Zyx,
            AngleUnit::Radians,
        );

        let reference = from_pr.to_dcm();
        assert_relative_eq!(from_crp.to_dcm(), reference, epsilon = 1e-12);
        assert_relative_eq!(from_mrp.to_dcm(), reference, epsilon = 1e-12);
        assert_relative_eq!(from_ea.to_dcm(), reference, epsilon = 1e-12);
    }
}
