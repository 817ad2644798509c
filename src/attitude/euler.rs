//! Euler angle sequences: composition and extraction.
//!
//! A sequence names the axes of three successive body rotations; the
//! twelve valid sequences are the six Tait-Bryan patterns (all axes
//! distinct) and the six symmetric patterns (first and third axis
//! repeated). The composed DCM is
//! `C = M(θ₃) · M(θ₂) · M(θ₁)` — third rotation applied last.
//!
//! Extraction inverts that composition with one closed form per
//! sequence: asin-based for Tait-Bryan, acos-based for symmetric. At
//! gimbal lock only the sum/difference of the first and third angles is
//! observable; by convention the first angle is reported as exactly zero
//! and the third absorbs the combined rotation.

use crate::attitude::dcm::{single_axis_rotation, Axis};
use crate::attitude::quaternion::quaternion_from_dcm;
use crate::error::AttitudeError;
use crate::units::{to_radians, AngleUnit};
use nalgebra::{Matrix3, Vector3, Vector4};

/// Gimbal-lock detection threshold on the middle-angle cosine/sine.
const GIMBAL_LOCK_EPS: f64 = 1e-8;

/// One of the twelve valid Euler rotation sequences.
///
/// Variants are named by axis order of application: `Zyx` rotates first
/// about z, then y, then x (the aerospace yaw-pitch-roll sequence).
/// Invalid axis triples are unrepresentable; [`EulerSequence::from_axes`]
/// is the fallible boundary for raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerSequence {
    /// 1-2-3 Tait-Bryan.
    Xyz,
    /// 1-3-2 Tait-Bryan.
    Xzy,
    /// 2-1-3 Tait-Bryan.
    Yxz,
    /// 2-3-1 Tait-Bryan.
    Yzx,
    /// 3-1-2 Tait-Bryan.
    Zxy,
    /// 3-2-1 Tait-Bryan (yaw-pitch-roll).
    Zyx,
    /// 1-2-1 symmetric.
    Xyx,
    /// 1-3-1 symmetric.
    Xzx,
    /// 2-1-2 symmetric.
    Yxy,
    /// 2-3-2 symmetric.
    Yzy,
    /// 3-1-3 symmetric (classical orbital elements sequence).
    Zxz,
    /// 3-2-3 symmetric.
    Zyz,
}

impl EulerSequence {
    /// Build a sequence from raw axis numbers (1, 2, 3).
    ///
    /// # Errors
    ///
    /// [`AttitudeError::UnsupportedSequence`] for any triple outside the
    /// twelve valid patterns (repeated adjacent axes, axis numbers
    /// outside 1..=3).
    pub fn from_axes(a1: u8, a2: u8, a3: u8) -> Result<Self, AttitudeError> {
        match (a1, a2, a3) {
            (1, 2, 3) => Ok(EulerSequence::Xyz),
            (1, 3, 2) => Ok(EulerSequence::Xzy),
            (2, 1, 3) => Ok(EulerSequence::Yxz),
            (2, 3, 1) => Ok(EulerSequence::Yzx),
            (3, 1, 2) => Ok(EulerSequence::Zxy),
            (3, 2, 1) => Ok(EulerSequence::Zyx),
            (1, 2, 1) => Ok(EulerSequence::Xyx),
            (1, 3, 1) => Ok(EulerSequence::Xzx),
            (2, 1, 2) => Ok(EulerSequence::Yxy),
            (2, 3, 2) => Ok(EulerSequence::Yzy),
            (3, 1, 3) => Ok(EulerSequence::Zxz),
            (3, 2, 3) => Ok(EulerSequence::Zyz),
            _ => Err(AttitudeError::UnsupportedSequence(a1, a2, a3)),
        }
    }

    /// The three rotation axes in order of application.
    pub fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            EulerSequence::Xyz => [X, Y, Z],
            EulerSequence::Xzy => [X, Z, Y],
            EulerSequence::Yxz => [Y, X, Z],
            EulerSequence::Yzx => [Y, Z, X],
            EulerSequence::Zxy => [Z, X, Y],
            EulerSequence::Zyx => [Z, Y, X],
            EulerSequence::Xyx => [X, Y, X],
            EulerSequence::Xzx => [X, Z, X],
            EulerSequence::Yxy => [Y, X, Y],
            EulerSequence::Yzy => [Y, Z, Y],
            EulerSequence::Zxz => [Z, X, Z],
            EulerSequence::Zyz => [Z, Y, Z],
        }
    }

    /// Whether the first and third rotation axes repeat.
    pub fn is_symmetric(self) -> bool {
        let [a1, _, a3] = self.axes();
        a1 == a3
    }
}

/// Direction cosine matrix from three Euler angles.
///
/// Angles are given in order of application; the composition applies the
/// third single-axis matrix last (left-most factor).
pub fn dcm_from_euler(
    angles: &Vector3<f64>,
    sequence: EulerSequence,
    unit: AngleUnit,
) -> Matrix3<f64> {
    let axes = sequence.axes();
    let mut c = Matrix3::identity();
    for i in (0..3).rev() {
        c *= single_axis_rotation(to_radians(angles[i], unit), axes[i], AngleUnit::Radians);
    }
    c
}

/// Unit quaternion from three Euler angles (via the DCM hub).
pub fn quaternion_from_euler(
    angles: &Vector3<f64>,
    sequence: EulerSequence,
    unit: AngleUnit,
) -> Vector4<f64> {
    quaternion_from_dcm(&dcm_from_euler(angles, sequence, unit))
}

/// Euler angles (radians) of a direction cosine matrix.
///
/// Exact inverse of [`dcm_from_euler`] away from gimbal lock. At lock
/// (|middle-angle cosine| below threshold for Tait-Bryan sequences,
/// |sine| for symmetric ones) the returned first angle is exactly `0.0`
/// and the third angle carries the combined first/third rotation,
/// computed from a single `atan2` of DCM entries. Total for every
/// supported sequence.
pub fn euler_from_dcm(c: &Matrix3<f64>, sequence: EulerSequence) -> Vector3<f64> {
    let asin = |v: f64| v.clamp(-1.0, 1.0).asin();
    let acos = |v: f64| v.clamp(-1.0, 1.0).acos();

    let (t1, t2, t3) = match sequence {
        EulerSequence::Xyz => {
            let t2 = asin(c[(2, 0)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (
                    (-c[(2, 1)]).atan2(c[(2, 2)]),
                    t2,
                    (-c[(1, 0)]).atan2(c[(0, 0)]),
                )
            } else {
                (0.0, t2, c[(0, 1)].atan2(c[(1, 1)]))
            }
        }
        EulerSequence::Xzy => {
            let t2 = asin(-c[(1, 0)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (c[(1, 2)].atan2(c[(1, 1)]), t2, c[(2, 0)].atan2(c[(0, 0)]))
            } else {
                (0.0, t2, (-c[(0, 2)]).atan2(c[(2, 2)]))
            }
        }
        EulerSequence::Yxz => {
            let t2 = asin(-c[(2, 1)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (c[(2, 0)].atan2(c[(2, 2)]), t2, c[(0, 1)].atan2(c[(1, 1)]))
            } else {
                (0.0, t2, (-c[(1, 0)]).atan2(c[(0, 0)]))
            }
        }
        EulerSequence::Yzx => {
            let t2 = asin(c[(0, 1)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (
                    (-c[(0, 2)]).atan2(c[(0, 0)]),
                    t2,
                    (-c[(2, 1)]).atan2(c[(1, 1)]),
                )
            } else {
                (0.0, t2, c[(1, 2)].atan2(c[(2, 2)]))
            }
        }
        EulerSequence::Zxy => {
            let t2 = asin(c[(1, 2)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (
                    (-c[(1, 0)]).atan2(c[(1, 1)]),
                    t2,
                    (-c[(0, 2)]).atan2(c[(2, 2)]),
                )
            } else {
                (0.0, t2, c[(2, 0)].atan2(c[(0, 0)]))
            }
        }
        EulerSequence::Zyx => {
            let t2 = asin(-c[(0, 2)]);
            if t2.cos().abs() > GIMBAL_LOCK_EPS {
                (c[(0, 1)].atan2(c[(0, 0)]), t2, c[(1, 2)].atan2(c[(2, 2)]))
            } else {
                (0.0, t2, (-c[(2, 1)]).atan2(c[(1, 1)]))
            }
        }
        EulerSequence::Xyx => {
            let t2 = acos(c[(0, 0)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(0, 1)].atan2(-c[(0, 2)]), t2, c[(1, 0)].atan2(c[(2, 0)]))
            } else {
                (0.0, t2, (-c[(2, 1)]).atan2(c[(1, 1)]))
            }
        }
        EulerSequence::Xzx => {
            let t2 = acos(c[(0, 0)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(0, 2)].atan2(c[(0, 1)]), t2, c[(2, 0)].atan2(-c[(1, 0)]))
            } else {
                (0.0, t2, c[(1, 2)].atan2(c[(2, 2)]))
            }
        }
        EulerSequence::Yxy => {
            let t2 = acos(c[(1, 1)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(1, 0)].atan2(c[(1, 2)]), t2, c[(0, 1)].atan2(-c[(2, 1)]))
            } else {
                (0.0, t2, c[(2, 0)].atan2(c[(0, 0)]))
            }
        }
        EulerSequence::Yzy => {
            let t2 = acos(c[(1, 1)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(1, 2)].atan2(-c[(1, 0)]), t2, c[(2, 1)].atan2(c[(0, 1)]))
            } else {
                (0.0, t2, (-c[(0, 2)]).atan2(c[(2, 2)]))
            }
        }
        EulerSequence::Zxz => {
            let t2 = acos(c[(2, 2)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(2, 0)].atan2(-c[(2, 1)]), t2, c[(0, 2)].atan2(c[(1, 2)]))
            } else {
                (0.0, t2, (-c[(1, 0)]).atan2(c[(0, 0)]))
            }
        }
        EulerSequence::Zyz => {
            let t2 = acos(c[(2, 2)]);
            if t2.sin().abs() > GIMBAL_LOCK_EPS {
                (c[(2, 1)].atan2(c[(2, 0)]), t2, c[(1, 2)].atan2(-c[(0, 2)]))
            } else {
                (0.0, t2, c[(0, 1)].atan2(c[(1, 1)]))
            }
        }
    };

    Vector3::new(t1, t2, t3)
}
