//! Parallel propagation of independent trajectories.
//!
//! Stepper policies are pure functions and fixed drivers integrate
//! through `&self`, so a batch of initial conditions shares no mutable
//! state and maps straight onto a rayon parallel iterator. The adaptive
//! driver carries its own step-size estimate, so each trajectory gets a
//! clone.

use crate::error::IntegrationError;
use crate::ode::adaptive::AdaptiveStepDriver;
use crate::ode::fixed::{FixedStepDriver, FixedStepMethod};
use crate::ode::state::OdeState;
use crate::ode::system::OdeSystem;
use crate::ode::trajectory::Trajectory;
use rayon::prelude::*;

/// Propagate every initial condition with the same fixed-step driver.
///
/// Output order matches input order.
pub fn integrate_batch<M, S, F>(
    driver: &FixedStepDriver<M>,
    f: &F,
    t0: f64,
    tf: f64,
    initial_states: &[S],
) -> Vec<Trajectory<S>>
where
    M: FixedStepMethod + Sync,
    S: OdeState + Send + Sync,
    F: OdeSystem<S> + Sync,
{
    initial_states
        .par_iter()
        .map(|x0| driver.integrate(f, t0, tf, x0))
        .collect()
}

/// Propagate every initial condition with a clone of an adaptive driver.
///
/// Each run starts from the driver's configured initial step and
/// tolerance; step-size adaptation is per-trajectory.
///
/// # Errors
///
/// The first [`IntegrationError`] encountered; remaining results are
/// discarded.
pub fn integrate_batch_adaptive<S, F>(
    driver: &AdaptiveStepDriver,
    f: &F,
    t0: f64,
    tf: f64,
    initial_states: &[S],
) -> Result<Vec<Trajectory<S>>, IntegrationError>
where
    S: OdeState + Send + Sync,
    F: OdeSystem<S> + Sync,
{
    initial_states
        .par_iter()
        .map(|x0| driver.clone().integrate(f, t0, tf, x0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ode::Rk4;
    use approx::assert_relative_eq;

    #[test]
    fn batch_matches_sequential() {
        let decay = |_t: f64, x: &f64| -*x;
        let driver = FixedStepDriver::new(Rk4, 0.01);
        let ics: Vec<f64> = (1..=8).map(|i| i as f64).collect();

        let batch = integrate_batch(&driver, &decay, 0.0, 1.0, &ics);

        assert_eq!(batch.len(), ics.len());
        for (x0, traj) in ics.iter().zip(&batch) {
            let sequential = driver.integrate(&decay, 0.0, 1.0, x0);
            assert_eq!(traj, &sequential);
        }
    }

    #[test]
    fn adaptive_batch_scales_linearly_in_initial_condition() {
        // linear ODE: x(1) = x0 e^{-1}
        let decay = |_t: f64, x: &f64| -*x;
        let driver = AdaptiveStepDriver::new(1e-3, 1e-10);
        let ics = [0.5, 1.0, 2.0, 4.0];

        let batch = integrate_batch_adaptive(&driver, &decay, 0.0, 1.0, &ics).unwrap();

        for (x0, traj) in ics.iter().zip(&batch) {
            let (_, xf) = traj.last().unwrap();
            assert_relative_eq!(*xf, x0 * (-1.0f64).exp(), max_relative = 1e-7);
        }
    }

    #[test]
    fn adaptive_batch_surfaces_failures() {
        let fast = |t: f64, _x: &f64| (1e16 * t).cos();
        let driver = AdaptiveStepDriver::new(1e-3, 1e-20);
        let result = integrate_batch_adaptive(&driver, &fast, 0.0, 1.0, &[0.0, 0.0]);
        assert!(result.is_err());
    }
}
