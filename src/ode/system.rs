//! The derivative-function abstraction.

use crate::ode::state::OdeState;

/// A system of ordinary differential equations `dx/dt = f(t, x)`.
///
/// The right-hand side must be total and side-effect free for the
/// drivers' guarantees (determinism, trivially parallel batches) to
/// hold. Any `Fn(f64, &S) -> S` closure implements this trait, so the
/// common case is just:
///
/// ```rust
/// use astrodyn::ode::{FixedStepDriver, Rk2};
///
/// let logistic = |_t: f64, x: &f64| *x * (1.0 - *x);
/// let traj = FixedStepDriver::new(Rk2, 0.1).integrate(&logistic, 0.0, 5.0, &0.1);
/// let (_, x_final) = traj.last().unwrap();
/// assert!(*x_final < 1.0);
/// ```
pub trait OdeSystem<S: OdeState> {
    /// Evaluate the right-hand side at `(t, x)`.
    fn rhs(&self, t: f64, x: &S) -> S;
}

impl<S, F> OdeSystem<S> for F
where
    S: OdeState,
    F: Fn(f64, &S) -> S,
{
    fn rhs(&self, t: f64, x: &S) -> S {
        self(t, x)
    }
}
