//! Permanent parameter shocks: timing, permanence, and convergence toward
//! the new steady state.

use approx::assert_relative_eq;
use solow_core::{Parameters, Shock, Solow, SteadyState};

#[test]
fn path_has_horizon_plus_one_periods() {
    let mut model = Solow::new(Parameters::default()).unwrap();
    let path = model
        .transition_path(60, Some(Shock::Savings(0.5).at(10)))
        .unwrap();
    assert_eq!(path.len(), 61);
}

#[test]
fn savings_shock_applies_from_its_period_onward() {
    let mut model = Solow::new(Parameters::default().savings(0.35)).unwrap();
    let path = model
        .transition_path(60, Some(Shock::Savings(0.5).at(10)))
        .unwrap();

    for (index, period) in path.iter().enumerate() {
        let savings = if index < 10 { 0.35 } else { 0.5 };
        assert_relative_eq!(
            period.per_effective_worker.investment,
            savings * period.per_effective_worker.output,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            period.per_effective_worker.consumption,
            (1.0 - savings) * period.per_effective_worker.output,
            max_relative = 1e-12
        );
    }
}

#[test]
fn technology_shock_shifts_output_from_its_period_onward() {
    let mut model = Solow::new(Parameters::default()).unwrap();
    let path = model
        .transition_path(20, Some(Shock::Technology(1.5).at(5)))
        .unwrap();

    for (index, period) in path.iter().enumerate() {
        let technology = if index < 5 { 1.0 } else { 1.5 };
        assert_relative_eq!(
            period.per_effective_worker.output,
            technology * period.per_effective_worker.capital.powf(0.35),
            max_relative = 1e-12
        );
    }
}

#[test]
fn population_growth_shock_changes_labor_growth_one_step_later() {
    let mut model = Solow::new(Parameters::default()).unwrap();
    let path = model
        .transition_path(20, Some(Shock::PopulationGrowth(0.03).at(10)))
        .unwrap();

    // The labor index entering period 10 was set while period 9 still ran
    // under the old rate, so the first ratio at the new rate is L(11)/L(10).
    for t in 1..=20 {
        let expected = if t <= 10 { 1.01 } else { 1.03 };
        let ratio = path[t].indices.labor / path[t - 1].indices.labor;
        assert_relative_eq!(ratio, expected, max_relative = 1e-12);
    }
}

#[test]
fn technology_growth_shock_changes_effectiveness_growth_one_step_later() {
    let mut model = Solow::new(Parameters::default()).unwrap();
    let path = model
        .transition_path(20, Some(Shock::TechnologyGrowth(0.04).at(10)))
        .unwrap();

    for t in 1..=20 {
        let expected = if t <= 10 { 1.02 } else { 1.04 };
        let ratio = path[t].indices.effectiveness / path[t - 1].indices.effectiveness;
        assert_relative_eq!(ratio, expected, max_relative = 1e-12);
    }
}

#[test]
fn depreciation_shock_raises_the_break_even_rate() {
    let mut model = Solow::new(Parameters::default()).unwrap();
    let path = model
        .transition_path(20, Some(Shock::Depreciation(0.08).at(10)))
        .unwrap();

    for (index, period) in path.iter().enumerate() {
        let delta = if index < 10 { 0.04 } else { 0.08 };
        let break_even = 0.01 + 0.02 + delta;
        assert_relative_eq!(
            period.net_investment,
            period.per_effective_worker.investment
                - break_even * period.per_effective_worker.capital,
            max_relative = 1e-9
        );
    }
}

#[test]
fn capital_converges_monotonically_to_the_new_steady_state() {
    let base = Parameters::default().savings(0.35);
    let mut model = Solow::new(base).unwrap();
    let old_capital = model.steady_state().capital;

    let path = model
        .transition_path(60, Some(Shock::Savings(0.5).at(10)))
        .unwrap();
    let new_capital = SteadyState::for_parameters(&Shock::Savings(0.5).applied(base))
        .unwrap()
        .capital;
    assert_relative_eq!(model.steady_state().capital, new_capital, max_relative = 1e-12);

    let capital = path.series(|period| period.per_effective_worker.capital);

    // Flat at the old steady state until the shock arrives.
    for value in &capital[..10] {
        assert_relative_eq!(*value, old_capital, max_relative = 1e-9);
    }

    // Then rising toward the new one, never overshooting it.
    for t in 10..capital.len() - 1 {
        assert!(capital[t + 1] > capital[t]);
        assert!(capital[t + 1] < new_capital);
    }

    let initial_gap = new_capital - capital[10];
    let final_gap = new_capital - capital[60];
    assert!(final_gap > 0.0);
    assert!(final_gap < 0.25 * initial_gap);
}
