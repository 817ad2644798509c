//! The vector-space state abstraction the steppers are generic over.

use nalgebra::SVector;
use std::ops::{Add, Mul, Sub};

/// A state vector the Runge-Kutta steppers can integrate.
///
/// Anything supporting addition, subtraction, right scalar
/// multiplication, and a norm qualifies: plain `f64` for scalar ODEs,
/// `nalgebra` static vectors for orbital/attitude states, or a custom
/// type wrapping both. The norm is only consulted by the embedded
/// adaptive method's error estimate.
pub trait OdeState:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// Euclidean norm, used for local error control.
    fn norm(&self) -> f64;
}

impl OdeState for f64 {
    fn norm(&self) -> f64 {
        self.abs()
    }
}

impl<const N: usize> OdeState for SVector<f64, N> {
    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}
