use serde::{Deserialize, Serialize};

use crate::{
    Allocation, Error, Growth, Indices, Parameters, PeriodState, ScheduledShock, SteadyState,
    TransitionPath,
};

/// Initial conditions for [`Solow::evaluate`].
///
/// Leaving `capital` unset starts from the steady-state capital stock, the
/// usual launch point for shock experiments. The effectiveness and labor
/// indices both default to 1.
///
/// ```
/// use solow_core::Start;
///
/// let from_steady_state = Start::default();
/// let from_above = Start::default().capital(45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Start {
    capital: Option<f64>,
    effectiveness: f64,
    labor: f64,
}

impl Default for Start {
    fn default() -> Self {
        Self {
            capital: None,
            effectiveness: 1.0,
            labor: 1.0,
        }
    }
}

impl Start {
    /// Starts from an explicit capital stock per effective worker instead of
    /// the steady-state value.
    #[must_use]
    pub fn capital(mut self, capital: f64) -> Self {
        self.capital = Some(capital);
        self
    }

    /// Sets the initial effectiveness index `E`.
    #[must_use]
    pub fn effectiveness(mut self, effectiveness: f64) -> Self {
        self.effectiveness = effectiveness;
        self
    }

    /// Sets the initial labor index `L`.
    #[must_use]
    pub fn labor(mut self, labor: f64) -> Self {
        self.labor = labor;
        self
    }
}

/// The Solow growth model.
///
/// A model owns its [`Parameters`], the [`SteadyState`] they imply, and one
/// current [`PeriodState`]. [`evaluate`](Self::evaluate) repositions the
/// current period; [`transition_path`](Self::transition_path) iterates it
/// forward, optionally applying a permanent parameter [`Shock`](crate::Shock)
/// along the way.
///
/// ```
/// use solow_core::{Parameters, Shock, Solow};
///
/// let mut model = Solow::new(Parameters::default().savings(0.35))?;
/// let path = model.transition_path(60, Some(Shock::Savings(0.5).at(10)))?;
///
/// assert_eq!(path.len(), 61);
/// assert_eq!(model.parameters().savings, 0.5);
/// # Ok::<(), solow_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solow {
    parameters: Parameters,
    steady_state: SteadyState,
    current: PeriodState,
}

impl Solow {
    /// Builds a model from `parameters`.
    ///
    /// The steady state is computed in closed form and the current period is
    /// evaluated at the default [`Start`], so a new model is immediately
    /// ready to produce a transition path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`], [`Error::DivisionByZero`], or
    /// [`Error::DegenerateSteadyState`] if the parameters do not admit a
    /// steady state.
    pub fn new(parameters: Parameters) -> Result<Self, Error> {
        let steady_state = SteadyState::for_parameters(&parameters)?;
        let current = evaluate_at(&parameters, steady_state.capital, 1.0, 1.0);
        Ok(Self {
            parameters,
            steady_state,
            current,
        })
    }

    /// The current structural parameters, including any shock already
    /// applied by a transition path.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The steady state implied by the current parameters.
    #[must_use]
    pub fn steady_state(&self) -> &SteadyState {
        &self.steady_state
    }

    /// The most recently evaluated period.
    #[must_use]
    pub fn current(&self) -> &PeriodState {
        &self.current
    }

    /// Evaluates one period at `start` and makes it the current period.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the starting capital stock is
    /// negative or not finite, or if either index is non-positive or not
    /// finite. The current period is left untouched on error.
    pub fn evaluate(&mut self, start: Start) -> Result<&PeriodState, Error> {
        let capital = start.capital.unwrap_or(self.steady_state.capital);
        self.current =
            checked_evaluate_at(&self.parameters, capital, start.effectiveness, start.labor)?;
        Ok(&self.current)
    }

    /// Iterates the model `horizon` periods forward from the current period.
    ///
    /// The returned path holds `horizon + 1` periods, the current period
    /// first. With a [`ScheduledShock`], the step into `shock.period` and
    /// every later step run under the shocked parameter value, and the
    /// model's steady state is recomputed at that point. A shock scheduled
    /// at `horizon + 1` is accepted but never activates within the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShockPeriodOutOfRange`] if the shock period is 0 or
    /// past `horizon + 1`, and [`Error::InvalidParameter`],
    /// [`Error::DivisionByZero`], or [`Error::DegenerateSteadyState`] if the
    /// shocked parameter set would not admit a steady state. Every step runs
    /// through the same input checks as [`evaluate`](Self::evaluate), so a
    /// calibration whose dynamics drive the carried capital stock negative,
    /// or push a scale index out of its positive range, fails with
    /// [`Error::InvalidParameter`] at that step. Any error leaves the model
    /// exactly as it was.
    pub fn transition_path(
        &mut self,
        horizon: usize,
        shock: Option<ScheduledShock>,
    ) -> Result<TransitionPath, Error> {
        if let Some(scheduled) = shock {
            if scheduled.period == 0 || scheduled.period > horizon + 1 {
                return Err(Error::ShockPeriodOutOfRange {
                    period: scheduled.period,
                    horizon,
                });
            }
            SteadyState::for_parameters(&scheduled.shock.applied(self.parameters))?;
        }

        // Step on copies; the model takes the result only once every step
        // has succeeded.
        let mut parameters = self.parameters;
        let mut steady_state = self.steady_state;
        let mut current = self.current;

        let mut periods = Vec::with_capacity(horizon + 1);
        periods.push(current);

        for period in 1..=horizon {
            if let Some(scheduled) = shock
                && period == scheduled.period
            {
                scheduled.shock.apply_to(&mut parameters);
                steady_state = SteadyState::for_parameters(&parameters)?;
                log::debug!(
                    "period {period}: applied {:?}, steady-state capital now {:.6}",
                    scheduled.shock,
                    steady_state.capital,
                );
            }

            current = checked_evaluate_at(
                &parameters,
                current.next_capital,
                current.next_effectiveness,
                current.next_labor,
            )?;
            periods.push(current);
        }

        self.parameters = parameters;
        self.steady_state = steady_state;
        self.current = current;

        log::debug!("transition path complete after {} periods", periods.len());
        Ok(TransitionPath::new(periods))
    }
}

/// Checks the capital stock and scale indices, then computes the period.
fn checked_evaluate_at(
    parameters: &Parameters,
    capital: f64,
    effectiveness: f64,
    labor: f64,
) -> Result<PeriodState, Error> {
    if !(capital.is_finite() && capital >= 0.0) {
        return Err(Error::InvalidParameter {
            name: "capital",
            requirement: "non-negative and finite",
            value: capital,
        });
    }
    if !(effectiveness.is_finite() && effectiveness > 0.0) {
        return Err(Error::InvalidParameter {
            name: "effectiveness",
            requirement: "positive and finite",
            value: effectiveness,
        });
    }
    if !(labor.is_finite() && labor > 0.0) {
        return Err(Error::InvalidParameter {
            name: "labor",
            requirement: "positive and finite",
            value: labor,
        });
    }
    Ok(evaluate_at(parameters, capital, effectiveness, labor))
}

/// Computes the full state of one period from the capital stock per
/// effective worker and the two scale indices.
fn evaluate_at(
    parameters: &Parameters,
    capital: f64,
    effectiveness: f64,
    labor: f64,
) -> PeriodState {
    let Parameters {
        alpha,
        technology,
        savings,
        population_growth,
        technology_growth,
        ..
    } = *parameters;
    let break_even = parameters.effective_depreciation();

    let output = technology * capital.powf(alpha);
    let consumption = (1.0 - savings) * output;
    let investment = savings * output;
    let net_investment = investment - break_even * capital;

    let per_effective_worker = Allocation {
        capital,
        output,
        consumption,
        investment,
    };
    let per_worker = per_effective_worker.scaled(effectiveness);
    let aggregate = per_worker.scaled(labor);

    // Output, consumption, and investment all inherit alpha times the
    // growth rate of capital from the production function.
    let capital_growth = savings * technology * capital.powf(alpha - 1.0) - break_even;
    let growth_per_effective_worker = Growth {
        capital: capital_growth,
        output: alpha * capital_growth,
        consumption: alpha * capital_growth,
        investment: alpha * capital_growth,
    };
    let growth_per_worker = growth_per_effective_worker.shifted(technology_growth);
    let growth_aggregate =
        growth_per_effective_worker.shifted(population_growth + technology_growth);

    PeriodState {
        per_effective_worker,
        net_investment,
        per_worker,
        aggregate,
        growth_per_effective_worker,
        growth_per_worker,
        growth_aggregate,
        indices: Indices {
            effectiveness,
            labor,
        },
        next_capital: capital + net_investment,
        next_effectiveness: (1.0 + technology_growth) * effectiveness,
        next_labor: (1.0 + population_growth) * labor,
    }
}
