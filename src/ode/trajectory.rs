//! Time-indexed state history produced by the drivers.

/// An ordered sequence of `(time, state)` samples.
///
/// Append-only while a driver runs, immutable once returned. The first
/// entry is always the initial condition; for a completed integration
/// the last time equals the requested final time exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    times: Vec<f64>,
    states: Vec<S>,
}

impl<S> Trajectory<S> {
    pub(crate) fn new() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            states: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, t: f64, x: S) {
        self.times.push(t);
        self.states.push(x);
    }

    /// Sample times, in integration order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample states, parallel to [`Trajectory::times`].
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Number of samples (initial condition included).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The final `(time, state)` sample.
    pub fn last(&self) -> Option<(f64, &S)> {
        match (self.times.last(), self.states.last()) {
            (Some(&t), Some(x)) => Some((t, x)),
            _ => None,
        }
    }

    /// Iterate over `(time, state)` samples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }
}
