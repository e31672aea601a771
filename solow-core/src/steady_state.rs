use serde::{Deserialize, Serialize};

use crate::{Error, Parameters};

/// The steady state of the model in per-effective-worker terms.
///
/// At the steady state, investment exactly offsets the dilution of capital
/// from depreciation, population growth, and technology growth, so all four
/// per-effective-worker quantities are constant over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    /// Capital per effective worker, `(s * A / (n + g + delta))^(1 / (1 - alpha))`.
    pub capital: f64,
    /// Output per effective worker, `A * capital^alpha`.
    pub output: f64,
    /// Consumption per effective worker, `(1 - s) * output`.
    pub consumption: f64,
    /// Investment per effective worker, `s * output`.
    pub investment: f64,
}

impl SteadyState {
    /// Computes the steady state implied by `parameters` in closed form.
    ///
    /// The parameters are validated first, so this is the single gate through
    /// which every parameter set entering the model must pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] or [`Error::DivisionByZero`] if
    /// [`Parameters::validate`] rejects the set, and
    /// [`Error::DegenerateSteadyState`] if the closed form yields a capital
    /// stock that is zero or not finite. A zero savings rate is the common
    /// degenerate case: nothing is ever invested, so the only fixed point is
    /// an economy without capital.
    pub fn for_parameters(parameters: &Parameters) -> Result<Self, Error> {
        parameters.validate()?;

        let capital = (parameters.savings * parameters.technology
            / parameters.effective_depreciation())
        .powf(1.0 / (1.0 - parameters.alpha));

        if !(capital.is_finite() && capital > 0.0) {
            return Err(Error::DegenerateSteadyState { capital });
        }

        let output = parameters.technology * capital.powf(parameters.alpha);
        Ok(Self {
            capital,
            output,
            consumption: (1.0 - parameters.savings) * output,
            investment: parameters.savings * output,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn matches_closed_form_for_default_calibration() {
        let parameters = Parameters::default();
        let steady_state = SteadyState::for_parameters(&parameters).unwrap();

        let expected = (0.1_f64 / 0.07).powf(1.0 / 0.65);
        assert_relative_eq!(steady_state.capital, expected, max_relative = 1e-12);
        assert_abs_diff_eq!(steady_state.capital, 1.731_054, epsilon = 1e-4);
    }

    #[test]
    fn output_splits_into_consumption_and_investment() {
        let parameters = Parameters::default().savings(0.3);
        let steady_state = SteadyState::for_parameters(&parameters).unwrap();

        assert_relative_eq!(
            steady_state.output,
            parameters.technology * steady_state.capital.powf(parameters.alpha),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            steady_state.consumption + steady_state.investment,
            steady_state.output,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            steady_state.investment,
            parameters.savings * steady_state.output,
            max_relative = 1e-12
        );
    }

    #[test]
    fn higher_savings_raises_steady_state_capital() {
        let low = SteadyState::for_parameters(&Parameters::default().savings(0.1)).unwrap();
        let high = SteadyState::for_parameters(&Parameters::default().savings(0.3)).unwrap();

        assert!(high.capital > low.capital);
        assert!(high.output > low.output);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_savings_is_degenerate() {
        let result = SteadyState::for_parameters(&Parameters::default().savings(0.0));
        assert!(matches!(
            result,
            Err(Error::DegenerateSteadyState { capital }) if capital == 0.0
        ));
    }

    #[test]
    fn negative_effective_depreciation_is_degenerate() {
        // n + g + delta is negative, so the fractional root is undefined.
        let parameters = Parameters::default().population_growth(-0.1);

        assert!(matches!(
            SteadyState::for_parameters(&parameters),
            Err(Error::DegenerateSteadyState { .. })
        ));
    }

    #[test]
    fn invalid_parameters_are_rejected_before_the_closed_form() {
        let result = SteadyState::for_parameters(&Parameters::default().alpha(1.2));
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "alpha", .. })
        ));
    }
}
