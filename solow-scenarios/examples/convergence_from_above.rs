//! # Convergence from Above
//!
//! A high-saving economy begins with more than twice its steady-state
//! capital stock and decumulates toward it over 125 periods. Alongside the
//! path, the example samples the phase diagram whose crossing point marks
//! the steady state, and prints both as JSON.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example convergence_from_above
//! ```

use solow_scenarios::{diagram::PhaseDiagram, experiments};

fn main() {
    env_logger::init();

    let experiment = experiments::convergence_from_above().unwrap();
    let diagram = PhaseDiagram::sample(experiment.model.parameters(), 55.0, 551).unwrap();

    let series = serde_json::json!({
        "capital": experiment.path.series(|period| period.per_effective_worker.capital),
        "net_investment": experiment.path.series(|period| period.net_investment),
        "steady_state": experiment.model.steady_state(),
        "diagram": diagram,
    });

    println!("{}", serde_json::to_string_pretty(&series).unwrap());
}
