//! The golden-rule savings rate.

use serde::{Deserialize, Serialize};
use solow_core::{Error, Parameters, SteadyState};

/// The savings rate that maximizes steady-state consumption, together with
/// the steady state the economy reaches under it.
///
/// With Cobb-Douglas production the golden-rule savings rate equals the
/// output elasticity of capital, so `savings` is simply `alpha`. An economy
/// saving more than this accumulates capital whose upkeep costs more output
/// than it produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldenRule {
    /// The consumption-maximizing savings rate.
    pub savings: f64,
    /// The steady state under that savings rate.
    pub steady_state: SteadyState,
}

impl GoldenRule {
    /// Computes the golden rule for `parameters`, ignoring its own savings
    /// rate.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`Error`] if the parameters, with the savings
    /// rate replaced by `alpha`, do not admit a steady state.
    pub fn for_parameters(parameters: &Parameters) -> Result<Self, Error> {
        let savings = parameters.alpha;
        let steady_state = SteadyState::for_parameters(&parameters.savings(savings))?;
        Ok(Self {
            savings,
            steady_state,
        })
    }
}
