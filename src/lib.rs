//! # Quiz Balance: biblical personality quiz with Monte Carlo verification
//!
//! Holds the 20-question "which biblical figure are you" quiz and checks that
//! answering it at random does not systematically favor a few archetypes.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`questions`] | Build the embedded question set (or load one with [`storage::load_questions`]) |
//! | 2 | [`types::QuestionSet::validate`] | Reject malformed questions before simulating |
//! | 3 | [`simulation::engine`] | Complete the quiz N times with uniform random answers, count each archetype's wins |
//! | 4 | [`simulation::statistics`] | Convert wins to shares, check target archetypes, decide pass/fail |
//! | 5 | [`storage`] | Persist the question set when the check passes |
//!
//! [`check::run_check`] runs steps 2–5 in order.
//!
//! ## Pass criteria
//!
//! Moses, Luke, Joseph and Esther were the archetypes random play reached
//! least often. Each must win at least 3% of trials; three of the four
//! clearing that bar is enough to pass. Every other archetype is expected to
//! land within 2–10%, which is reported but does not affect the verdict.

pub mod check;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod questions;
pub mod simulation;
pub mod storage;
pub mod types;

pub use check::{run_check, CheckOptions, CheckOutcome};
pub use error::{QuizError, Result};
pub use questions::question_set;
pub use types::{AnswerOption, Archetype, Question, QuestionSet};
