//! Walk one attitude through every representation and back.
//!
//! Starts from a 3-2-1 Euler angle set, converts through quaternion,
//! principal rotation, CRP and MRP, and confirms each path lands on the
//! same direction cosine matrix.
//!
//! Run with:
//!   cargo run --example attitude_roundtrip

use astrodyn::attitude::{
    dcm_from_euler, euler_from_dcm, orthonormalize, quaternion_from_dcm, EulerSequence, Rotation,
};
use astrodyn::units::AngleUnit;
use nalgebra::{Matrix3, Vector3};

fn max_abs_diff(a: &Matrix3<f64>, b: &Matrix3<f64>) -> f64 {
    (a - b).abs().max()
}

fn main() {
    let angles_deg = Vector3::new(40.0, 25.0, -60.0);
    let seq = EulerSequence::Zyx;

    let dcm = dcm_from_euler(&angles_deg, seq, AngleUnit::Degrees);
    println!(
        "3-2-1 Euler angles (deg): [{}, {}, {}]",
        angles_deg[0], angles_deg[1], angles_deg[2]
    );
    println!("DCM:{dcm:.6}");

    // quaternion and back
    let q = quaternion_from_dcm(&dcm);
    println!("quaternion [x,y,z,w]: [{:.6}, {:.6}, {:.6}, {:.6}]", q[0], q[1], q[2], q[3]);
    let via_quat = Rotation::Quaternion(q).to_dcm();
    println!("  |ΔDCM| via quaternion: {:.2e}", max_abs_diff(&via_quat, &dcm));

    // principal rotation: θ = 2 acos(w), e = q_vec / sin(θ/2)
    let theta = 2.0 * q[3].acos();
    let axis = Vector3::new(q[0], q[1], q[2]) / (theta / 2.0).sin();
    println!(
        "principal rotation: {:.4} deg about [{:.4}, {:.4}, {:.4}]",
        theta.to_degrees(),
        axis[0],
        axis[1],
        axis[2]
    );
    let via_pr = Rotation::principal_rotation(&axis, theta, AngleUnit::Radians).to_dcm();
    println!("  |ΔDCM| via principal rotation: {:.2e}", max_abs_diff(&via_pr, &dcm));

    // Rodrigues parameterizations
    let crp = axis * (theta / 2.0).tan();
    let mrp = axis * (theta / 4.0).tan();
    let via_crp = Rotation::Crp(crp).to_dcm();
    let via_mrp = Rotation::Mrp(mrp).to_dcm();
    println!("  |ΔDCM| via CRP: {:.2e}", max_abs_diff(&via_crp, &dcm));
    println!("  |ΔDCM| via MRP: {:.2e}", max_abs_diff(&via_mrp, &dcm));

    // Euler extraction recovers the input
    let back = euler_from_dcm(&dcm, seq).map(f64::to_degrees);
    println!(
        "extracted 3-2-1 angles (deg): [{:.6}, {:.6}, {:.6}]",
        back[0], back[1], back[2]
    );

    // repair a perturbed matrix
    let noisy = dcm + Matrix3::new(3e-3, -1e-3, 0.0, 2e-3, 1e-3, -2e-3, 0.0, 1e-3, 2e-3);
    let repaired = orthonormalize(&noisy);
    println!(
        "orthonormality defect before/after repair: {:.2e} / {:.2e}",
        max_abs_diff(&(noisy * noisy.transpose()), &Matrix3::identity()),
        max_abs_diff(&(repaired * repaired.transpose()), &Matrix3::identity()),
    );
}
