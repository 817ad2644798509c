//! Error types.
//!
//! The failure surface is deliberately small: attitude conversions are
//! total functions except for the one structural error (a rotation
//! sequence outside the twelve supported patterns), and integration
//! drivers either return a full trajectory or the one fatal step-control
//! error. Numerical edge cases (gimbal lock, near-180° quaternion
//! extraction, MRP denominator blow-up) are handled by explicit branch
//! thresholds in the conversion code, not by errors.

use thiserror::Error;

/// Errors from attitude representation handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttitudeError {
    /// A rotation-axis triple outside the twelve valid Euler sequences
    /// (six Tait-Bryan, six symmetric).
    #[error("unsupported Euler angle sequence {0}-{1}-{2}")]
    UnsupportedSequence(u8, u8, u8),
}

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntegrationError {
    /// The adaptive driver shrank the step below machine epsilon without
    /// meeting the error tolerance. The derivative function is too stiff
    /// or discontinuous for the requested tolerance; the run is not
    /// retried and no partial trajectory is returned.
    #[error("adaptive step size underflow at t = {t} (dt = {dt:e})")]
    StepSizeUnderflow {
        /// Time at which the step search failed.
        t: f64,
        /// Step size at failure, already below machine epsilon.
        dt: f64,
    },
}
