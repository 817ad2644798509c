//! Generic ODE Integration Engine
//!
//! Explicit Runge-Kutta integration of `dx/dt = f(t, x)` for any
//! vector-space state type. Stepper policies are stateless pure
//! functions defined by fixed Butcher tableaux; drivers own the loop
//! state (current time, committed trajectory, and — for the adaptive
//! driver — the evolving step-size estimate).
//!
//! Purity is a design invariant, not an implementation detail: a policy
//! invocation depends only on its explicit arguments, and there are no
//! hidden static accumulators. That is what makes
//! [`batch::integrate_batch`] a zero-coordination parallel map.
//!
//! # Picking a method
//!
//! - [`Rk4`] is the workhorse for smooth orbital dynamics at a known
//!   step size.
//! - [`DormandPrince45`] behind [`AdaptiveStepDriver`] when the
//!   time-scale varies (eccentric orbits, tumbling bodies) and a local
//!   error tolerance is the natural control.
//! - [`Rk1`]/[`Heun`]/[`Ralston`] mostly serve convergence studies and
//!   cross-checks.

mod adaptive;
pub mod batch;
mod eom;
mod fixed;
mod state;
mod system;
mod trajectory;

pub use adaptive::{AdaptiveStepDriver, DormandPrince45, EmbeddedStep, Stats};
pub use eom::{AccelerationModel, TranslationalEom};
pub use fixed::{
    FixedStepDriver, FixedStepMethod, Heun, Ralston, Rk1, Rk2, Rk3, Rk4, Rk5, Rk6,
};
pub use state::OdeState;
pub use system::OdeSystem;
pub use trajectory::Trajectory;

/// Default fixed step size when none is configured.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Default adaptive local error tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default step count for span-derived fixed steps.
pub const DEFAULT_STEP_COUNT: usize = 1000;
