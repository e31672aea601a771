use thiserror::Error;

/// The error type for model construction, evaluation, and path generation.
///
/// Every fallible operation checks its inputs before touching any model
/// state, so a returned error never leaves a partially updated model behind.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A parameter or initial condition is outside its documented range.
    #[error("{name} must be {requirement}, but is {value}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The range it failed to satisfy.
        requirement: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The effective depreciation rate `n + g + delta` is zero, so the
    /// steady-state expression divides by zero.
    #[error("effective depreciation rate n + g + delta is zero; no steady state exists")]
    DivisionByZero,

    /// The parameters pass their individual range checks but imply a
    /// steady-state capital stock that is zero or not finite.
    #[error("parameters imply a degenerate steady state (capital per effective worker is {capital})")]
    DegenerateSteadyState {
        /// The unusable capital value produced by the closed form.
        capital: f64,
    },

    /// A shock was scheduled outside the valid window `1..=horizon + 1`.
    #[error("shock period {period} is outside 1..=horizon + 1 (horizon is {horizon})")]
    ShockPeriodOutOfRange {
        /// The scheduled period.
        period: usize,
        /// The horizon of the requested path.
        horizon: usize,
    },
}
