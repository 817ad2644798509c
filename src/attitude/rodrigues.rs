//! Rodrigues-type parameterizations: principal rotation vector,
//! classical Rodrigues parameters, modified Rodrigues parameters.
//!
//! All three build the DCM in closed form and route through it when a
//! quaternion is wanted. CRPs go singular as the rotation approaches
//! 180° (`tan(θ/2) → ∞`) and MRPs as it approaches 360° (the `1 + σᵀσ`
//! denominator describes the shadow-set crossing); neither case is
//! guarded here — bounding the rotation is the caller's responsibility.

use crate::attitude::quaternion::quaternion_from_dcm;
use crate::units::{to_radians, AngleUnit};
use nalgebra::{Matrix3, Vector3, Vector4};

/// DCM of a single rotation `angle` about the unit vector `axis`.
///
/// `axis` is not normalized here; supply a unit vector.
pub fn dcm_from_principal_rotation(
    axis: &Vector3<f64>,
    angle: f64,
    unit: AngleUnit,
) -> Matrix3<f64> {
    let theta = to_radians(angle, unit);
    let c = theta.cos();
    let s = theta.sin();
    let sigma = 1.0 - c;
    let (e1, e2, e3) = (axis[0], axis[1], axis[2]);

    Matrix3::new(
        e1 * e1 * sigma + c,
        e1 * e2 * sigma + e3 * s,
        e1 * e3 * sigma - e2 * s,
        //
        e2 * e1 * sigma - e3 * s,
        e2 * e2 * sigma + c,
        e2 * e3 * sigma + e1 * s,
        //
        e3 * e1 * sigma + e2 * s,
        e3 * e2 * sigma - e1 * s,
        e3 * e3 * sigma + c,
    )
}

/// DCM from classical Rodrigues parameters `q = e·tan(θ/2)`.
pub fn dcm_from_crp(crp: &Vector3<f64>) -> Matrix3<f64> {
    let (q1, q2, q3) = (crp[0], crp[1], crp[2]);
    let q1s = q1 * q1;
    let q2s = q2 * q2;
    let q3s = q3 * q3;
    let qtq = crp.dot(crp);

    Matrix3::new(
        1.0 + q1s - q2s - q3s,
        2.0 * (q1 * q2 + q3),
        2.0 * (q1 * q3 - q2),
        //
        2.0 * (q2 * q1 - q3),
        1.0 - q1s + q2s - q3s,
        2.0 * (q2 * q3 + q1),
        //
        2.0 * (q3 * q1 + q2),
        2.0 * (q3 * q2 - q1),
        1.0 - q1s - q2s + q3s,
    ) / (1.0 + qtq)
}

/// DCM from modified Rodrigues parameters `σ = e·tan(θ/4)`.
pub fn dcm_from_mrp(mrp: &Vector3<f64>) -> Matrix3<f64> {
    let (s1, s2, s3) = (mrp[0], mrp[1], mrp[2]);
    let s1s = s1 * s1;
    let s2s = s2 * s2;
    let s3s = s3 * s3;
    let sts = mrp.dot(mrp);
    let oms = 1.0 - sts;
    let denom = (1.0 + sts) * (1.0 + sts);

    Matrix3::new(
        4.0 * (s1s - s2s - s3s) + oms * oms,
        8.0 * s1 * s2 + 4.0 * s3 * oms,
        8.0 * s1 * s3 - 4.0 * s2 * oms,
        //
        8.0 * s2 * s1 - 4.0 * s3 * oms,
        4.0 * (-s1s + s2s - s3s) + oms * oms,
        8.0 * s2 * s3 + 4.0 * s1 * oms,
        //
        8.0 * s3 * s1 + 4.0 * s2 * oms,
        8.0 * s3 * s2 - 4.0 * s1 * oms,
        4.0 * (-s1s - s2s + s3s) + oms * oms,
    ) / denom
}

/// Unit quaternion of a principal rotation (via the DCM hub).
pub fn quaternion_from_principal_rotation(
    axis: &Vector3<f64>,
    angle: f64,
    unit: AngleUnit,
) -> Vector4<f64> {
    quaternion_from_dcm(&dcm_from_principal_rotation(axis, angle, unit))
}

/// Unit quaternion from classical Rodrigues parameters (via the DCM hub).
pub fn quaternion_from_crp(crp: &Vector3<f64>) -> Vector4<f64> {
    quaternion_from_dcm(&dcm_from_crp(crp))
}

/// Unit quaternion from modified Rodrigues parameters (via the DCM hub).
pub fn quaternion_from_mrp(mrp: &Vector3<f64>) -> Vector4<f64> {
    quaternion_from_dcm(&dcm_from_mrp(mrp))
}
