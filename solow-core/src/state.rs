use serde::{Deserialize, Serialize};

/// Capital, output, consumption, and investment at one scaling of the model.
///
/// The same four magnitudes appear three times in a [`PeriodState`]: per
/// effective worker, per worker, and in the aggregate. Only the scale factor
/// differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Capital stock.
    pub capital: f64,
    /// Output.
    pub output: f64,
    /// Consumption.
    pub consumption: f64,
    /// Investment.
    pub investment: f64,
}

impl Allocation {
    /// Rescales all four components by `factor`.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            capital: self.capital * factor,
            output: self.output * factor,
            consumption: self.consumption * factor,
            investment: self.investment * factor,
        }
    }
}

/// One-period growth rates of the four allocation components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Growth {
    /// Growth rate of capital.
    pub capital: f64,
    /// Growth rate of output.
    pub output: f64,
    /// Growth rate of consumption.
    pub consumption: f64,
    /// Growth rate of investment.
    pub investment: f64,
}

impl Growth {
    /// Adds `offset` to all four rates.
    ///
    /// Per-worker rates are the per-effective-worker rates shifted by `g`,
    /// and aggregate rates are shifted by `n + g`.
    pub(crate) fn shifted(&self, offset: f64) -> Self {
        Self {
            capital: self.capital + offset,
            output: self.output + offset,
            consumption: self.consumption + offset,
            investment: self.investment + offset,
        }
    }
}

/// The scale indices of one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indices {
    /// Labor-augmenting technology index `E`.
    pub effectiveness: f64,
    /// Labor force index `L`.
    pub labor: f64,
}

/// Everything the model reports about a single period.
///
/// Per-worker values are the per-effective-worker values scaled by the
/// effectiveness index, and aggregates are scaled further by the labor
/// index. The `next_*` fields carry the state forward: evaluating a period
/// at `next_capital`, `next_effectiveness`, and `next_labor` produces the
/// period that follows this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodState {
    /// Allocations per effective worker.
    pub per_effective_worker: Allocation,
    /// Net change in capital per effective worker over the period,
    /// investment minus break-even investment.
    pub net_investment: f64,
    /// Allocations per worker.
    pub per_worker: Allocation,
    /// Aggregate allocations.
    pub aggregate: Allocation,
    /// Growth rates per effective worker.
    pub growth_per_effective_worker: Growth,
    /// Growth rates per worker.
    pub growth_per_worker: Growth,
    /// Aggregate growth rates.
    pub growth_aggregate: Growth,
    /// Scale indices of this period.
    pub indices: Indices,
    /// Capital per effective worker entering the next period.
    pub next_capital: f64,
    /// Effectiveness index of the next period, `(1 + g) * E`.
    pub next_effectiveness: f64,
    /// Labor index of the next period, `(1 + n) * L`.
    pub next_labor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOCATION: Allocation = Allocation {
        capital: 4.0,
        output: 2.0,
        consumption: 1.5,
        investment: 0.5,
    };

    #[test]
    fn scaled_rescales_every_component() {
        let scaled = ALLOCATION.scaled(3.0);
        assert_eq!(
            scaled,
            Allocation {
                capital: 12.0,
                output: 6.0,
                consumption: 4.5,
                investment: 1.5,
            }
        );
    }

    #[test]
    fn shifted_offsets_every_rate() {
        let growth = Growth {
            capital: 0.25,
            output: 0.5,
            consumption: 0.5,
            investment: 0.5,
        };
        let shifted = growth.shifted(0.25);
        assert_eq!(
            shifted,
            Growth {
                capital: 0.5,
                output: 0.75,
                consumption: 0.75,
                investment: 0.75,
            }
        );
    }
}
