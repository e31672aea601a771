//! Phase-diagram sampling for plotting.

use serde::Serialize;
use solow_core::Parameters;
use thiserror::Error;

/// Errors from [`PhaseDiagram::sample`].
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DiagramError {
    /// The parameter set itself was rejected.
    #[error(transparent)]
    Parameters(#[from] solow_core::Error),

    /// The grid must extend over a positive, finite capital range.
    #[error("max capital must be positive and finite, but is {0}")]
    MaxCapital(f64),

    /// An interval needs at least its two endpoints.
    #[error("a phase diagram needs at least 2 grid points, but {0} were requested")]
    TooFewPoints(usize),
}

/// The curves of the Solow phase diagram on an even capital grid.
///
/// Per grid point `k` the diagram carries output `A * k^alpha`, investment
/// `s * A * k^alpha`, and break-even investment `(n + g + delta) * k`. The
/// investment curve crosses the break-even line at the steady-state capital
/// stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseDiagram {
    /// The capital grid, from zero to the requested maximum inclusive.
    pub capital: Vec<f64>,
    /// Output per effective worker at each grid point.
    pub output: Vec<f64>,
    /// Investment per effective worker at each grid point.
    pub investment: Vec<f64>,
    /// Break-even investment at each grid point.
    pub break_even: Vec<f64>,
}

impl PhaseDiagram {
    /// Samples the diagram for `parameters` on `points` evenly spaced grid
    /// values from zero to `max_capital` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Parameters`] if the parameters are invalid,
    /// [`DiagramError::MaxCapital`] if the grid end is not a positive finite
    /// value, and [`DiagramError::TooFewPoints`] for fewer than two points.
    pub fn sample(
        parameters: &Parameters,
        max_capital: f64,
        points: usize,
    ) -> Result<Self, DiagramError> {
        parameters.validate()?;
        if !(max_capital.is_finite() && max_capital > 0.0) {
            return Err(DiagramError::MaxCapital(max_capital));
        }
        if points < 2 {
            return Err(DiagramError::TooFewPoints(points));
        }

        let break_even_rate = parameters.effective_depreciation();
        let last = (points - 1) as f64;

        let mut capital = Vec::with_capacity(points);
        let mut output = Vec::with_capacity(points);
        let mut investment = Vec::with_capacity(points);
        let mut break_even = Vec::with_capacity(points);

        for index in 0..points {
            let k = max_capital * index as f64 / last;
            let y = parameters.technology * k.powf(parameters.alpha);
            capital.push(k);
            output.push(y);
            investment.push(parameters.savings * y);
            break_even.push(break_even_rate * k);
        }

        Ok(Self {
            capital,
            output,
            investment,
            break_even,
        })
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capital.len()
    }

    /// Whether the diagram holds no grid points. Sampled diagrams never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capital.is_empty()
    }
}
