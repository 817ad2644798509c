//! Translational equation-of-motion composition.
//!
//! Glue between force models and the integration engine: contributors
//! expose a single capability — an acceleration as a function of the
//! translational state — and the composer sums them into the
//! `[velocity; Σ accelerations]` right-hand side the drivers consume.
//!
//! Concrete force models (point-mass gravity, zonal harmonics, drag,
//! thrust, ...) live with the caller; the kernel only defines the seam.

use crate::ode::system::OdeSystem;
use nalgebra::{Vector3, Vector6};

/// A force contributor for translational dynamics.
///
/// The state is `[x, y, z, vx, vy, vz]`; the result is the contributed
/// acceleration on the vehicle. Contributors are infallible: a model
/// that cannot produce an acceleration for a state in its domain does
/// not belong behind this trait.
pub trait AccelerationModel {
    /// Acceleration contributed at `state`.
    fn acceleration(&self, state: &Vector6<f64>) -> Vector3<f64>;
}

/// Composite translational equations of motion.
///
/// `dx/dt = [v; Σᵢ aᵢ(x)]` over the registered contributors, summed
/// unconditionally. With no contributors the motion is ballistic
/// (constant velocity).
#[derive(Default)]
pub struct TranslationalEom {
    contributors: Vec<Box<dyn AccelerationModel + Send + Sync>>,
}

impl TranslationalEom {
    /// An EOM with no force contributors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a force contributor (builder style).
    pub fn with(mut self, model: impl AccelerationModel + Send + Sync + 'static) -> Self {
        self.contributors.push(Box::new(model));
        self
    }

    /// Number of registered contributors.
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Whether no contributors are registered.
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}

impl OdeSystem<Vector6<f64>> for TranslationalEom {
    fn rhs(&self, _t: f64, x: &Vector6<f64>) -> Vector6<f64> {
        let mut accel = Vector3::zeros();
        for model in &self.contributors {
            accel += model.acceleration(x);
        }
        Vector6::new(x[3], x[4], x[5], accel[0], accel[1], accel[2])
    }
}
