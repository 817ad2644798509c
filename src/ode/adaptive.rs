//! Embedded adaptive integration: Dormand-Prince 4(5).
//!
//! The policy computes a fifth-order advance and a fourth-order
//! embedded solution sharing the same stages; their difference is the
//! local truncation error estimate. The policy itself never rejects a
//! step — it reports the error and a suggested next step size, and the
//! driver decides.
//!
//! Coefficients are from Dormand & Prince (1980), Table 2 (RK5(4)7M).

use crate::error::IntegrationError;
use crate::ode::state::OdeState;
use crate::ode::system::OdeSystem;
use crate::ode::trajectory::Trajectory;
use crate::ode::{DEFAULT_STEP, DEFAULT_TOLERANCE};

/// Stage nodes c_i: stage i is evaluated at `t + C[i]·dt`.
const C: [f64; 6] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0];

/// Runge-Kutta coupling matrix a_ij (strictly lower triangular).
const A: [[f64; 5]; 6] = [
    [0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0],
    [
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
        0.0,
    ],
    [
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
    ],
];

/// Fifth-order weights b_i (the advancing solution).
const B5: [f64; 6] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
];

/// Fourth-order weights b̂_i; the seventh weight multiplies the extra
/// evaluation `f(t + dt, y5)`.
const B4: [f64; 7] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// Step-size safety factor.
const SAFETY: f64 = 0.9;
/// Largest allowed step growth per proposal.
const MAX_SCALE: f64 = 5.0;
/// Smallest allowed step shrink per proposal.
const MIN_SCALE: f64 = 0.2;

/// Result of one embedded trial step.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedStep<S> {
    /// Suggested step size for the next proposal (grown or shrunk).
    pub dt_next: f64,
    /// Fifth-order state at `t + dt`.
    pub x: S,
    /// Norm of the difference between the 5th- and 4th-order solutions.
    pub err: f64,
}

/// The Dormand-Prince 4(5) embedded pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct DormandPrince45;

impl DormandPrince45 {
    /// Evaluate one trial step.
    ///
    /// Always returns; `err` against `tol` is the caller's acceptance
    /// decision. The suggested step scales with `(tol/err)^{1/5}` — the
    /// exponent matching fifth-order local truncation — damped by the
    /// safety factor and clamped to [0.2, 5.0] to keep the step-size
    /// sequence from oscillating.
    pub fn step<S, F>(&self, f: &F, t: f64, x: &S, dt: f64, tol: f64) -> EmbeddedStep<S>
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let k1 = f.rhs(t, x);
        let k2 = f.rhs(t + C[1] * dt, &(*x + k1 * (A[1][0] * dt)));
        let k3 = f.rhs(t + C[2] * dt, &(*x + (k1 * A[2][0] + k2 * A[2][1]) * dt));
        let k4 = f.rhs(
            t + C[3] * dt,
            &(*x + (k1 * A[3][0] + k2 * A[3][1] + k3 * A[3][2]) * dt),
        );
        let k5 = f.rhs(
            t + C[4] * dt,
            &(*x + (k1 * A[4][0] + k2 * A[4][1] + k3 * A[4][2] + k4 * A[4][3]) * dt),
        );
        let k6 = f.rhs(
            t + C[5] * dt,
            &(*x
                + (k1 * A[5][0] + k2 * A[5][1] + k3 * A[5][2] + k4 * A[5][3] + k5 * A[5][4])
                    * dt),
        );

        let y5 = *x
            + (k1 * B5[0] + k3 * B5[2] + k4 * B5[3] + k5 * B5[4] + k6 * B5[5]) * dt;

        // the 4th-order solution reuses the 5th-order result's end-point
        // derivative as its seventh stage
        let k7 = f.rhs(t + dt, &y5);
        let y4 = *x
            + (k1 * B4[0] + k3 * B4[2] + k4 * B4[3] + k5 * B4[4] + k6 * B4[5] + k7 * B4[6])
                * dt;

        let err = (y5 - y4).norm();
        let scale = if err == 0.0 {
            MAX_SCALE
        } else {
            (SAFETY * (tol / err).powf(0.2)).clamp(MIN_SCALE, MAX_SCALE)
        };

        EmbeddedStep {
            dt_next: dt * scale,
            x: y5,
            err,
        }
    }
}

/// Step-acceptance statistics for one integration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Trial steps whose error estimate met the tolerance.
    pub accepted_steps: u64,
    /// Trial steps redone with a smaller step size.
    pub rejected_steps: u64,
}

/// Adaptive integration driver around [`DormandPrince45`].
///
/// Owns the evolving step-size estimate: the suggestion from each
/// accepted step seeds the next proposal, and rejected steps retry the
/// same interval start with the shrunken suggestion.
#[derive(Debug, Clone)]
pub struct AdaptiveStepDriver {
    dt: f64,
    tol: f64,
    /// Acceptance statistics, reset at the start of each integration.
    pub stats: Stats,
}

impl Default for AdaptiveStepDriver {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_TOLERANCE)
    }
}

impl AdaptiveStepDriver {
    /// Driver with an initial step-size guess and local error tolerance.
    pub fn new(dt_initial: f64, tol: f64) -> Self {
        Self {
            dt: dt_initial,
            tol,
            stats: Stats::default(),
        }
    }

    /// The local error tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tol
    }

    /// The current step-size estimate.
    pub fn step_size(&self) -> f64 {
        self.dt
    }

    /// Integrate from `(t0, x0)` to `tf`.
    ///
    /// Per outer step: propose `dt = min(current, tf − t)`, evaluate the
    /// embedded policy, and accept iff `err <= tol`. On rejection the
    /// same interval start is retried with the (strictly smaller)
    /// suggested step.
    ///
    /// The returned trajectory starts at the initial condition and ends
    /// exactly at `tf`.
    ///
    /// # Errors
    ///
    /// [`IntegrationError::StepSizeUnderflow`] if the step shrinks below
    /// machine epsilon without meeting the tolerance — the right-hand
    /// side is too stiff or discontinuous for `tol`. Nothing is
    /// committed in that case.
    pub fn integrate<S, F>(
        &mut self,
        f: &F,
        t0: f64,
        tf: f64,
        x0: &S,
    ) -> Result<Trajectory<S>, IntegrationError>
    where
        S: OdeState,
        F: OdeSystem<S>,
    {
        let policy = DormandPrince45;
        self.stats = Stats::default();

        let mut trajectory = Trajectory::new();
        let mut t = t0;
        let mut x = *x0;
        trajectory.push(t, x);

        while t < tf {
            let remaining = tf - t;
            let mut dt = self.dt.min(remaining);

            // search for a step meeting the tolerance
            let accepted = loop {
                let trial = policy.step(f, t, &x, dt, self.tol);
                if trial.err <= self.tol {
                    break trial;
                }
                self.stats.rejected_steps += 1;
                dt = trial.dt_next;
                if dt < f64::EPSILON {
                    return Err(IntegrationError::StepSizeUnderflow { t, dt });
                }
            };

            self.stats.accepted_steps += 1;
            x = accepted.x;
            // pin the endpoint: t + (tf - t) need not round to tf
            t = if dt < remaining { t + dt } else { tf };
            self.dt = accepted.dt_next;
            trajectory.push(t, x);
        }

        Ok(trajectory)
    }
}
