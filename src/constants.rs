//! Quiz shape and balance thresholds.
//!
//! The target archetypes are the ones earlier tuning rounds left
//! underrepresented; the run passes only when most of them clear
//! [`TARGET_MIN_PERCENT`].

use crate::types::Archetype;

/// Number of questions in the embedded quiz.
pub const NUM_QUESTIONS: usize = 20;

/// Every question offers exactly this many answers.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Default number of simulated quiz completions.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Archetypes whose win share is checked against [`TARGET_MIN_PERCENT`].
pub const TARGET_ARCHETYPES: [Archetype; 4] = [
    Archetype::Moses,
    Archetype::Luke,
    Archetype::Joseph,
    Archetype::Esther,
];

/// Minimum win share (%) for a target archetype to count as a success.
pub const TARGET_MIN_PERCENT: f64 = 3.0;

/// Minimum number of target successes for the run to pass.
pub const MIN_TARGET_SUCCESSES: usize = 3;

/// Acceptable win share (%) band for every non-target archetype, inclusive.
pub const ACCEPTABLE_MIN_PERCENT: f64 = 2.0;
pub const ACCEPTABLE_MAX_PERCENT: f64 = 10.0;

/// Where the balanced question set is written, relative to the base path.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/data/biblical_questions_final.json";
