//! # Savings Increase Away from the Golden Rule
//!
//! Starts a model at the golden-rule steady state, raises the savings rate
//! from 0.35 to 0.5 at period 10 of a 60-period path, and prints the
//! per-effective-worker series as JSON for an external plotting tool.
//!
//! Capital and output climb toward the new, higher steady state while
//! consumption drops on impact and never recovers its old level.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example savings_shock
//! ```

use solow_scenarios::experiments;

fn main() {
    env_logger::init();

    let experiment = experiments::savings_increase_from_golden_rule().unwrap();
    let path = &experiment.path;

    let series = serde_json::json!({
        "capital": path.series(|period| period.per_effective_worker.capital),
        "output": path.series(|period| period.per_effective_worker.output),
        "consumption": path.series(|period| period.per_effective_worker.consumption),
        "investment": path.series(|period| period.per_effective_worker.investment),
        "steady_state": experiment.model.steady_state(),
    });

    println!("{}", serde_json::to_string_pretty(&series).unwrap());
}
