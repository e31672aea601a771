use serde::{Deserialize, Serialize};

use crate::Error;

/// Structural parameters of the Solow growth model.
///
/// All six parameters are dimensionless levels or per-period rates.
/// `Default` is the standard calibration (`alpha` 0.35, `technology` 1,
/// `savings` 0.1, `depreciation` 0.04, `population_growth` 0.01,
/// `technology_growth` 0.02), and the chainable setters adjust individual
/// fields from there:
///
/// ```
/// use solow_core::Parameters;
///
/// let parameters = Parameters::default().savings(0.35).technology(1.2);
///
/// assert_eq!(parameters.savings, 0.35);
/// assert_eq!(parameters.alpha, 0.35);
/// ```
///
/// `Parameters` is plain data and never clamps. Range checks run in
/// [`validate`](Self::validate), which [`Solow::new`](crate::Solow::new)
/// calls before accepting a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Output elasticity of capital, strictly between 0 and 1.
    pub alpha: f64,
    /// Technology level `A`, positive.
    pub technology: f64,
    /// Savings rate `s`, within `[0, 1]`.
    pub savings: f64,
    /// Depreciation rate `delta`, non-negative.
    pub depreciation: f64,
    /// Population growth rate `n`.
    pub population_growth: f64,
    /// Technology growth rate `g`.
    pub technology_growth: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            alpha: 0.35,
            technology: 1.0,
            savings: 0.1,
            depreciation: 0.04,
            population_growth: 0.01,
            technology_growth: 0.02,
        }
    }
}

impl Parameters {
    /// Sets the output elasticity of capital.
    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the technology level `A`.
    #[must_use]
    pub fn technology(mut self, technology: f64) -> Self {
        self.technology = technology;
        self
    }

    /// Sets the savings rate `s`.
    #[must_use]
    pub fn savings(mut self, savings: f64) -> Self {
        self.savings = savings;
        self
    }

    /// Sets the depreciation rate `delta`.
    #[must_use]
    pub fn depreciation(mut self, depreciation: f64) -> Self {
        self.depreciation = depreciation;
        self
    }

    /// Sets the population growth rate `n`.
    #[must_use]
    pub fn population_growth(mut self, population_growth: f64) -> Self {
        self.population_growth = population_growth;
        self
    }

    /// Sets the technology growth rate `g`.
    #[must_use]
    pub fn technology_growth(mut self, technology_growth: f64) -> Self {
        self.technology_growth = technology_growth;
        self
    }

    /// The effective depreciation rate `n + g + delta`.
    ///
    /// Capital per effective worker is diluted at this combined rate, so it
    /// is the break-even investment rate of the model.
    #[must_use]
    pub fn effective_depreciation(&self) -> f64 {
        self.population_growth + self.technology_growth + self.depreciation
    }

    /// Checks every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first parameter that
    /// fails, or [`Error::DivisionByZero`] if the parameters are individually
    /// valid but `n + g + delta` is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::InvalidParameter {
                name: "alpha",
                requirement: "strictly between 0 and 1",
                value: self.alpha,
            });
        }
        if !(self.technology.is_finite() && self.technology > 0.0) {
            return Err(Error::InvalidParameter {
                name: "technology",
                requirement: "positive and finite",
                value: self.technology,
            });
        }
        if !(0.0..=1.0).contains(&self.savings) {
            return Err(Error::InvalidParameter {
                name: "savings",
                requirement: "within [0, 1]",
                value: self.savings,
            });
        }
        if !(self.depreciation.is_finite() && self.depreciation >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "depreciation",
                requirement: "non-negative and finite",
                value: self.depreciation,
            });
        }
        if !self.population_growth.is_finite() {
            return Err(Error::InvalidParameter {
                name: "population_growth",
                requirement: "finite",
                value: self.population_growth,
            });
        }
        if !self.technology_growth.is_finite() {
            return Err(Error::InvalidParameter {
                name: "technology_growth",
                requirement: "finite",
                value: self.technology_growth,
            });
        }
        if self.effective_depreciation() == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(())
    }
}
