//! Fixed-step explicit Runge-Kutta methods and their driver.
//!
//! Each method is a stateless unit struct: `step` is a pure function of
//! its arguments, defined by a fixed Butcher tableau with the stage
//! arithmetic written out directly. No method branches; acceptance is
//! not a concept here (see [`DormandPrince45`](crate::ode::DormandPrince45)
//! for error-controlled stepping).

use crate::ode::state::OdeState;
use crate::ode::system::OdeSystem;
use crate::ode::trajectory::Trajectory;

/// A fixed-step explicit Runge-Kutta method.
pub trait FixedStepMethod {
    /// Derivative evaluations per step.
    fn stages(&self) -> usize;

    /// Advance one step: `(t, x) → (t + dt, x_new)`.
    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>;
}

/// Forward Euler (RK1), first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk1;

impl FixedStepMethod for Rk1 {
    fn stages(&self) -> usize {
        1
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        (t + dt, *x + k1 * dt)
    }
}

/// Explicit midpoint (RK2), second order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk2;

impl FixedStepMethod for Rk2 {
    fn stages(&self) -> usize {
        2
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt / 2.0, &(*x + k1 * (dt / 2.0)));
        (t + dt, *x + k2 * dt)
    }
}

/// Kutta's third-order method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk3;

impl FixedStepMethod for Rk3 {
    fn stages(&self) -> usize {
        3
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt / 2.0, &(*x + k1 * (dt / 2.0)));
        let k3 = f.rhs(t + dt, &(*x - k1 * dt + k2 * (2.0 * dt)));
        (t + dt, *x + (k1 + k2 * 4.0 + k3) * (dt / 6.0))
    }
}

/// The classical fourth-order Runge-Kutta method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl FixedStepMethod for Rk4 {
    fn stages(&self) -> usize {
        4
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt / 2.0, &(*x + k1 * (dt / 2.0)));
        let k3 = f.rhs(t + dt / 2.0, &(*x + k2 * (dt / 2.0)));
        let k4 = f.rhs(t + dt, &(*x + k3 * dt));
        (
            t + dt,
            *x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0),
        )
    }
}

/// Butcher's fifth-order method (six stages).
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk5;

impl FixedStepMethod for Rk5 {
    fn stages(&self) -> usize {
        6
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt / 4.0, &(*x + k1 * (dt / 4.0)));
        let k3 = f.rhs(t + dt / 4.0, &(*x + (k1 + k2) * (dt / 8.0)));
        let k4 = f.rhs(t + dt / 2.0, &(*x + (k3 - k2 * 0.5) * dt));
        let k5 = f.rhs(
            t + 3.0 * dt / 4.0,
            &(*x + (k1 * (3.0 / 16.0) + k4 * (9.0 / 16.0)) * dt),
        );
        let k6 = f.rhs(
            t + dt,
            &(*x
                + (k2 * (2.0 / 7.0) + k3 * (12.0 / 7.0) + k5 * (8.0 / 7.0)
                    - k1 * (3.0 / 7.0)
                    - k4 * (12.0 / 7.0))
                    * dt),
        );
        (
            t + dt,
            *x + (k1 * 7.0 + k3 * 32.0 + k4 * 12.0 + k5 * 32.0 + k6 * 7.0) * (dt / 90.0),
        )
    }
}

/// Six-stage RKF-style method (Cash-Karp coupling coefficients).
///
/// The update weights zero out stages 2 and 5; only k₁, k₃, k₄, k₆
/// contribute to the advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk6;

impl FixedStepMethod for Rk6 {
    fn stages(&self) -> usize {
        6
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt / 5.0, &(*x + k1 * (dt / 5.0)));
        let k3 = f.rhs(
            t + 3.0 * dt / 10.0,
            &(*x + (k1 * (3.0 / 40.0) + k2 * (9.0 / 40.0)) * dt),
        );
        let k4 = f.rhs(
            t + 3.0 * dt / 5.0,
            &(*x + (k1 * (3.0 / 10.0) - k2 * (9.0 / 10.0) + k3 * (6.0 / 5.0)) * dt),
        );
        let k5 = f.rhs(
            t + dt,
            &(*x
                + (k2 * (5.0 / 2.0) + k4 * (35.0 / 27.0)
                    - k1 * (11.0 / 54.0)
                    - k3 * (70.0 / 27.0))
                    * dt),
        );
        let k6 = f.rhs(
            t + 7.0 * dt / 8.0,
            &(*x
                + (k1 * (1631.0 / 55296.0)
                    + k2 * (175.0 / 512.0)
                    + k3 * (575.0 / 13824.0)
                    + k4 * (44275.0 / 110592.0)
                    + k5 * (253.0 / 4096.0))
                    * dt),
        );
        (
            t + dt,
            *x + (k1 * (37.0 / 378.0)
                + k3 * (250.0 / 621.0)
                + k4 * (125.0 / 594.0)
                + k6 * (512.0 / 1771.0))
                * dt,
        )
    }
}

/// Heun's method (trapezoidal predictor-corrector), second order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heun;

impl FixedStepMethod for Heun {
    fn stages(&self) -> usize {
        2
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + dt, &(*x + k1 * dt));
        (t + dt, *x + (k1 + k2) * (dt / 2.0))
    }
}

/// Ralston's second-order method (minimum truncation error bound).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ralston;

impl FixedStepMethod for Ralston {
    fn stages(&self) -> usize {
        2
    }

    fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64) -> (f64, S)
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + 3.0 * dt / 4.0, &(*x + k1 * (3.0 * dt / 4.0)));
        (t + dt, *x + (k1 * (1.0 / 3.0) + k2 * (2.0 / 3.0)) * dt)
    }
}

/// Fixed-step integration driver.
///
/// Holds a method and a nominal step size; [`FixedStepDriver::integrate`]
/// walks the interval, clamping the final step so the last recorded time
/// is exactly `tf`. Infallible by construction: a fixed-step sweep over
/// a total right-hand side cannot fail.
#[derive(Debug, Clone)]
pub struct FixedStepDriver<M: FixedStepMethod> {
    method: M,
    dt0: f64,
}

impl<M: FixedStepMethod> FixedStepDriver<M> {
    /// Driver with an explicit step size.
    pub fn new(method: M, dt: f64) -> Self {
        Self { method, dt0: dt }
    }

    /// Driver whose step size divides `[t0, tf]` into `steps` pieces.
    pub fn with_step_count(method: M, t0: f64, tf: f64, steps: usize) -> Self {
        Self {
            method,
            dt0: (tf - t0) / steps as f64,
        }
    }

    /// The configured nominal step size.
    pub fn step_size(&self) -> f64 {
        self.dt0
    }

    /// Integrate from `(t0, x0)` to `tf`.
    ///
    /// The returned trajectory starts with the initial condition and
    /// ends exactly at `tf`. Requires `tf >= t0`; with `tf == t0` only
    /// the initial condition is recorded.
    pub fn integrate<S, F>(&self, f: &F, t0: f64, tf: f64, x0: &S) -> Trajectory<S>
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let expected = ((tf - t0) / self.dt0).ceil().max(0.0) as usize + 1;
        let mut trajectory = Trajectory::with_capacity(expected);

        let mut t = t0;
        let mut x = *x0;
        trajectory.push(t, x);

        while t < tf {
            let remaining = tf - t;
            let dt = self.dt0.min(remaining);
            let (t_next, x_next) = self.method.step(f, t, &x, dt);
            // pin the endpoint: t + (tf - t) need not round to tf
            t = if dt < remaining { t_next } else { tf };
            x = x_next;
            trajectory.push(t, x);
        }

        trajectory
    }
}
