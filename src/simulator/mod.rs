//! Battle simulator for Monte Carlo balance checks.
//!
//! Plays many battles with a fixed policy to see how each class fares
//! against the enemy table:
//! - Win rate overall and per enemy archetype
//! - Level pace and gold income
//! - Battle length in turns
//!
//! Battles run through the same engine as the game (`combat::logic` and
//! `core::progression`), with enemy turns resolved immediately instead of
//! on a timer.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{EnemyBreakdown, RunStats, SimReport};
pub use runner::{choose_action, run_simulation, simulate_battle};
