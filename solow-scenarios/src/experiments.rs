//! Canned model runs used in teaching material and by the examples.

use solow_core::{Error, Parameters, Shock, Solow, Start, TransitionPath};

/// A completed run: the model in its final state and the path it produced.
///
/// The model carries the post-run parameters and steady state, so a shocked
/// experiment exposes both the path and where it is ultimately headed.
#[derive(Debug, Clone)]
pub struct Experiment {
    /// The model after the run.
    pub model: Solow,
    /// The recorded transition path.
    pub path: TransitionPath,
}

/// Raises the savings rate from the golden-rule level 0.35 to 0.5 at period
/// 10 of a 60-period path.
///
/// The economy starts at the golden-rule steady state, so the extra saving
/// raises capital and output but permanently lowers consumption.
///
/// # Errors
///
/// Returns the underlying [`Error`] if construction or the run fails; the
/// baked-in calibration is valid, so this only happens if the model itself
/// regresses.
pub fn savings_increase_from_golden_rule() -> Result<Experiment, Error> {
    log::info!("running savings increase away from the golden rule");

    let mut model = Solow::new(Parameters::default().savings(0.35))?;
    let path = model.transition_path(60, Some(Shock::Savings(0.5).at(10)))?;

    Ok(Experiment { model, path })
}

/// Convergence to the steady state from above.
///
/// A high-saving economy (`savings` 0.5) starts with 45 units of capital per
/// effective worker against a steady state near 20.6, then runs 125 periods
/// with no shock. Capital decumulates monotonically along the way.
///
/// # Errors
///
/// Returns the underlying [`Error`] if construction or the run fails.
pub fn convergence_from_above() -> Result<Experiment, Error> {
    log::info!("running convergence to the steady state from above");

    let mut model = Solow::new(Parameters::default().savings(0.5))?;
    model.evaluate(Start::default().capital(45.0))?;
    let path = model.transition_path(125, None)?;

    Ok(Experiment { model, path })
}
