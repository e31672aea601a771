//! A discrete-time Solow growth model.
//!
//! The crate centers on [`Solow`], which owns a validated parameter set, the
//! steady state those parameters imply, and a single current period. From
//! there it can evaluate the economy at any starting point or iterate a
//! whole [`TransitionPath`], optionally applying a permanent parameter
//! [`Shock`] partway through.
//!
//! All quantities are reported at three scalings per period: per effective
//! worker, per worker, and aggregate, together with their growth rates.
//!
//! ```
//! use solow_core::{Parameters, Shock, Solow};
//!
//! // A new model rests at its steady state; raise the savings rate at
//! // period 10 and record the transition toward the new, higher one.
//! let mut model = Solow::new(Parameters::default().savings(0.35))?;
//! let path = model.transition_path(60, Some(Shock::Savings(0.5).at(10)))?;
//!
//! assert_eq!(path.len(), 61);
//! let capital = path.series(|period| period.per_effective_worker.capital);
//! assert!(capital.last() > capital.first());
//! # Ok::<(), solow_core::Error>(())
//! ```

mod error;
mod model;
mod parameters;
mod path;
mod shock;
mod state;
mod steady_state;

pub use error::Error;
pub use model::{Solow, Start};
pub use parameters::Parameters;
pub use path::TransitionPath;
pub use shock::{ScheduledShock, Shock};
pub use state::{Allocation, Growth, Indices, PeriodState};
pub use steady_state::SteadyState;
