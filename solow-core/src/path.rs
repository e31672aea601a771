use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::PeriodState;

/// The period-by-period record of a model run.
///
/// Index 0 holds the state the run started from, so a path over horizon `T`
/// contains `T + 1` periods. The path is a plain value: it stays valid and
/// unchanged however the model that produced it is used afterwards.
///
/// ```
/// use solow_core::{Parameters, Solow};
///
/// let mut model = Solow::new(Parameters::default())?;
/// let path = model.transition_path(60, None)?;
///
/// assert_eq!(path.len(), 61);
/// let capital: Vec<f64> = path.series(|period| period.per_effective_worker.capital);
/// assert_eq!(capital.len(), 61);
/// # Ok::<(), solow_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPath {
    periods: Vec<PeriodState>,
}

impl TransitionPath {
    pub(crate) fn new(periods: Vec<PeriodState>) -> Self {
        debug_assert!(!periods.is_empty());
        Self { periods }
    }

    /// All periods in order, starting period first.
    #[must_use]
    pub fn periods(&self) -> &[PeriodState] {
        &self.periods
    }

    /// Number of periods in the path, horizon plus one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the path contains no periods. Paths produced by the model
    /// always contain at least the starting period.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The period at `index`, or `None` past the end of the path.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PeriodState> {
        self.periods.get(index)
    }

    /// The starting period.
    #[must_use]
    pub fn first(&self) -> Option<&PeriodState> {
        self.periods.first()
    }

    /// The final period.
    #[must_use]
    pub fn last(&self) -> Option<&PeriodState> {
        self.periods.last()
    }

    /// Iterates over the periods in order.
    pub fn iter(&self) -> slice::Iter<'_, PeriodState> {
        self.periods.iter()
    }

    /// Extracts one quantity per period, in path order.
    ///
    /// This is the plotting shape: pick a field with a closure and get the
    /// whole series at once.
    pub fn series<F>(&self, selector: F) -> Vec<f64>
    where
        F: FnMut(&PeriodState) -> f64,
    {
        self.periods.iter().map(selector).collect()
    }
}

impl Index<usize> for TransitionPath {
    type Output = PeriodState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.periods[index]
    }
}

impl<'a> IntoIterator for &'a TransitionPath {
    type Item = &'a PeriodState;
    type IntoIter = slice::Iter<'a, PeriodState>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
