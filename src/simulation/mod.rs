//! Balance simulation and reporting.
//!
//! - [`engine`]: Monte Carlo quiz completions and per-archetype win counts
//! - [`statistics`]: Win shares, target checks and the pass/fail verdict

pub mod engine;
pub mod statistics;

pub use engine::{simulate_batch, simulate_trial, SimulationResult, TrialScores, WinCounts};
pub use statistics::{
    evaluate, win_percent, ArchetypeShare, BalanceCriteria, BalanceReport, ShareStatus,
};
