use serde::{Deserialize, Serialize};

use crate::Parameters;

/// A permanent change to exactly one structural parameter.
///
/// The variant picks the parameter and the payload is its new value. A
/// shock takes effect through [`Solow::transition_path`](crate::Solow::transition_path)
/// once paired with a start period:
///
/// ```
/// use solow_core::Shock;
///
/// let scheduled = Shock::Savings(0.5).at(10);
///
/// assert_eq!(scheduled.period, 10);
/// assert_eq!(scheduled.shock, Shock::Savings(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shock {
    /// New technology level `A`.
    Technology(f64),
    /// New savings rate `s`.
    Savings(f64),
    /// New depreciation rate `delta`.
    Depreciation(f64),
    /// New population growth rate `n`.
    PopulationGrowth(f64),
    /// New technology growth rate `g`.
    TechnologyGrowth(f64),
}

impl Shock {
    /// Schedules the shock to take effect on the step into `period`.
    #[must_use]
    pub fn at(self, period: usize) -> ScheduledShock {
        ScheduledShock {
            period,
            shock: self,
        }
    }

    /// Picks the first override present, in the fixed priority order
    /// technology, savings, depreciation, population growth, technology
    /// growth.
    ///
    /// This resolution order is what the model applies when a caller holds
    /// several optional overrides at once. Only one parameter can change per
    /// shock; prefer constructing the intended [`Shock`] directly.
    #[must_use]
    pub fn first_of(
        technology: Option<f64>,
        savings: Option<f64>,
        depreciation: Option<f64>,
        population_growth: Option<f64>,
        technology_growth: Option<f64>,
    ) -> Option<Self> {
        match (
            technology,
            savings,
            depreciation,
            population_growth,
            technology_growth,
        ) {
            (Some(value), ..) => Some(Self::Technology(value)),
            (None, Some(value), ..) => Some(Self::Savings(value)),
            (None, None, Some(value), ..) => Some(Self::Depreciation(value)),
            (None, None, None, Some(value), _) => Some(Self::PopulationGrowth(value)),
            (None, None, None, None, Some(value)) => Some(Self::TechnologyGrowth(value)),
            (None, None, None, None, None) => None,
        }
    }

    /// The parameter set obtained by applying the shock to `parameters`.
    #[must_use]
    pub fn applied(self, parameters: Parameters) -> Parameters {
        let mut shocked = parameters;
        self.apply_to(&mut shocked);
        shocked
    }

    /// Overwrites the shocked parameter in place, leaving the rest untouched.
    pub(crate) fn apply_to(self, parameters: &mut Parameters) {
        match self {
            Self::Technology(value) => parameters.technology = value,
            Self::Savings(value) => parameters.savings = value,
            Self::Depreciation(value) => parameters.depreciation = value,
            Self::PopulationGrowth(value) => parameters.population_growth = value,
            Self::TechnologyGrowth(value) => parameters.technology_growth = value,
        }
    }
}

/// A [`Shock`] paired with the period on whose entering step it applies.
///
/// Periods are counted from the start of the path, so period 1 is the first
/// step taken. Once applied, the change is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShock {
    /// First period evaluated under the new parameter value.
    pub period: usize,
    /// The parameter change itself.
    pub shock: Shock,
}
