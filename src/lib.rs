//! # astrodyn: Attitude Conversions & ODE Integration
//!
//! The numerical kernel of a flight-dynamics simulation toolkit:
//! conversions between rigid-body attitude representations, and explicit
//! Runge-Kutta integration of the ordinary differential equations of
//! orbital and rotational motion.
//!
//! ## Features
//!
//! - All six classical attitude parameterizations — direction cosine
//!   matrix, Euler parameters (quaternion), the twelve Euler angle
//!   sequences, principal rotation vector, classical and modified
//!   Rodrigues parameters — with the DCM as conversion hub and a direct
//!   quaternion↔DCM fast path
//! - Shepperd's four-branch quaternion extraction (stable through 180°)
//! - Gimbal-lock-aware Euler angle extraction for all twelve sequences
//! - Eight fixed-step explicit Runge-Kutta methods (orders 1 through 6)
//! - Embedded adaptive Dormand-Prince 4(5) with automatic step control
//! - Steppers generic over any vector-space state type; pure policies,
//!   so independent trajectories batch-propagate in parallel via rayon
//!
//! ## Integrating an ODE
//!
//! ```rust
//! use astrodyn::ode::{FixedStepDriver, Rk4};
//!
//! // dx/dt = -x, x(0) = 1; exact solution e^{-t}
//! let decay = |_t: f64, x: &f64| -> f64 { -*x };
//!
//! let driver = FixedStepDriver::new(Rk4, 0.01);
//! let trajectory = driver.integrate(&decay, 0.0, 1.0, &1.0);
//!
//! let (t_final, x_final) = trajectory.last().unwrap();
//! assert_eq!(t_final, 1.0);
//! assert!((x_final - (-1.0f64).exp()).abs() < 1e-6);
//! ```
//!
//! ## Converting between attitude representations
//!
//! ```rust
//! use astrodyn::attitude::{dcm_from_euler, euler_from_dcm, quaternion_from_dcm, EulerSequence};
//! use astrodyn::units::AngleUnit;
//! use nalgebra::Vector3;
//!
//! let angles = Vector3::new(30.0, 20.0, -10.0);
//! let dcm = dcm_from_euler(&angles, EulerSequence::Zyx, AngleUnit::Degrees);
//!
//! let q = quaternion_from_dcm(&dcm);
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//!
//! let back = euler_from_dcm(&dcm, EulerSequence::Zyx); // radians
//! assert!((back[0].to_degrees() - 30.0).abs() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! Attitude matrices follow the flight-dynamics (passive) convention: a
//! DCM maps inertial-frame components into body-frame components, and
//! quaternions are scalar-last `[x, y, z, w]`. All internal angle math is
//! in radians; entry points that accept angles take an explicit
//! [`units::AngleUnit`].
//!
//! ## References
//!
//! 1. Schaub, H. & Junkins, J.L. (2014). "Analytical Mechanics of Space
//!    Systems", 3rd ed. AIAA Education Series.
//! 2. Dormand, J.R. & Prince, P.J. (1980). "A family of embedded
//!    Runge-Kutta formulae". J. Comp. Appl. Math., 6(1).
//! 3. Hairer, E., Nørsett, S.P., & Wanner, G. (1993). "Solving Ordinary
//!    Differential Equations I: Nonstiff Problems". Springer.
//! 4. Shepperd, S.W. (1978). "Quaternion from rotation matrix".
//!    J. Guidance and Control, 1(3).

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod attitude;
pub mod constants;
pub mod error;
pub mod ode;
pub mod units;

pub use attitude::Rotation;
pub use error::{AttitudeError, IntegrationError};
pub use ode::{
    AdaptiveStepDriver, DormandPrince45, FixedStepDriver, FixedStepMethod, OdeState, OdeSystem,
    Trajectory,
};
pub use units::{convert_angle, AngleUnit};
