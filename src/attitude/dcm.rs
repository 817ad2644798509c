//! Direction cosine matrix construction and repair.

use crate::units::{to_radians, AngleUnit};
use nalgebra::{Matrix3, Vector3};

/// A body rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First body axis.
    X = 1,
    /// Second body axis.
    Y = 2,
    /// Third body axis.
    Z = 3,
}

/// Single-axis direction cosine matrix.
///
/// Passive convention: `single_axis_rotation(θ, Axis::Z, ..)` maps
/// inertial components into a frame rotated by θ about the z axis.
pub fn single_axis_rotation(angle: f64, axis: Axis, unit: AngleUnit) -> Matrix3<f64> {
    let theta = to_radians(angle, unit);
    let c = theta.cos();
    let s = theta.sin();

    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ),
    }
}

/// Skew-symmetric cross-product matrix `[v×]`.
pub fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Nearest orthonormal matrix to `m` with determinant +1.
///
/// Polar projection via SVD: `C = U Vᵀ`, with the weakest singular
/// direction flipped when the input is closer to a reflection than to a
/// proper rotation. Always succeeds, and an already-orthonormal input is
/// a fixed point.
pub fn orthonormalize(m: &Matrix3<f64>) -> Matrix3<f64> {
    let svd = m.svd(true, true);
    let u = svd.u.expect("SVD factors requested");
    let v_t = svd.v_t.expect("SVD factors requested");

    let c = u * v_t;
    if c.determinant() < 0.0 {
        // singular values are sorted descending, so column 2 of U spans
        // the direction where the sign flip costs least
        let mut u = u;
        let flipped = -u.column(2);
        u.set_column(2, &flipped);
        u * v_t
    } else {
        c
    }
}
