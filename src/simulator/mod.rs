//! Balance simulator for Monte Carlo analysis.
//!
//! Runs many simulated characters through a year of tasks to see how the
//! formulas play out:
//! - Levels reached under each curve
//! - Experience and gold income under each reward model
//! - Damage taken, deaths and boss damage dealt
//! - Observed critical and drop rates
//!
//! All randomness lives here; the formula engine itself is deterministic.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
