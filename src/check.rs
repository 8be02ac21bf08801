//! One balance check from validation to the persist decision.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::simulation::{evaluate, simulate_batch, BalanceCriteria, BalanceReport};
use crate::storage::{save_questions, save_report};
use crate::types::QuestionSet;

#[derive(Clone, Debug)]
pub struct CheckOptions {
    pub trials: usize,
    pub seed: u64,
    pub criteria: BalanceCriteria,
    /// Where to write the question set on success. `None` never writes.
    pub output: Option<PathBuf>,
    /// Where to write the JSON report, pass or fail.
    pub report: Option<PathBuf>,
}

impl CheckOptions {
    /// Options with the default criteria and no report. A dry run never
    /// writes the question set, whatever `output` says.
    pub fn new(trials: usize, seed: u64, output: PathBuf, dry_run: bool) -> Self {
        Self {
            trials,
            seed,
            criteria: BalanceCriteria::default(),
            output: (!dry_run).then_some(output),
            report: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub report: BalanceReport,
    /// Set only when the check passed and the question set was written.
    pub saved_to: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.report.passed()
    }
}

/// Validate `set`, simulate it, and persist it if the balance check passes.
pub fn run_check(set: &QuestionSet, opts: &CheckOptions) -> Result<CheckOutcome> {
    set.validate()?;
    info!(questions = set.len(), trials = opts.trials, seed = opts.seed, "running balance check");

    let result = simulate_batch(set, opts.trials, opts.seed);
    let report = evaluate(&result, &opts.criteria);

    if let Some(path) = &opts.report {
        save_report(&report, path)?;
    }

    let saved_to = if !report.passed() {
        warn!(
            met = report.target_successes(),
            required = opts.criteria.min_target_successes,
            "balance check failed, question set not saved"
        );
        None
    } else if let Some(path) = &opts.output {
        save_questions(set, path)?;
        Some(path.clone())
    } else {
        info!("balance check passed (dry run, nothing written)");
        None
    };

    Ok(CheckOutcome { report, saved_to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::types::{AnswerOption, Archetype, Question};

    fn opts(output: Option<PathBuf>) -> CheckOptions {
        CheckOptions {
            trials: 200,
            seed: 5,
            criteria: BalanceCriteria::default(),
            output,
            report: None,
        }
    }

    fn lopsided_set() -> QuestionSet {
        let option = |a: Archetype| AnswerOption {
            text: a.to_string(),
            scores: [(a, 1)].into_iter().collect(),
        };
        QuestionSet::new(vec![Question {
            id: 1,
            text: "pick".to_string(),
            options: vec![
                option(Archetype::David),
                option(Archetype::Peter),
                option(Archetype::Paul),
                option(Archetype::Mary),
            ],
        }])
    }

    #[test]
    fn test_failed_check_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        let outcome = run_check(&lopsided_set(), &opts(Some(out.clone()))).unwrap();
        assert!(!outcome.passed());
        assert_eq!(outcome.report.target_successes(), 0);
        assert!(outcome.saved_to.is_none());
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_set_is_rejected_before_simulation() {
        let mut set = lopsided_set().questions().to_vec();
        set[0].options.pop();
        let err = run_check(&QuestionSet::new(set), &opts(None)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { id: 1, .. }));
    }

    #[test]
    fn test_report_written_even_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let mut o = opts(None);
        o.report = Some(report_path.clone());
        let outcome = run_check(&lopsided_set(), &o).unwrap();
        assert!(!outcome.passed());
        assert!(report_path.exists());
    }

    #[test]
    fn test_dry_run_options_drop_output() {
        let out = PathBuf::from("out.json");
        assert_eq!(CheckOptions::new(10, 1, out.clone(), false).output, Some(out.clone()));
        assert_eq!(CheckOptions::new(10, 1, out, true).output, None);
    }

    #[test]
    fn test_oversized_awards_are_simulated_without_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("huge.json");
        let answer = r#"{"text":"a","scores":{"david":3000000000}}"#;
        let question = |id: u32| {
            format!(r#"{{"id":{id},"text":"q","options":[{answer},{answer},{answer},{answer}]}}"#)
        };
        std::fs::write(&input, format!("[{},{}]", question(1), question(2))).unwrap();

        let set = crate::storage::load_questions(&input).unwrap();
        let mut o = opts(None);
        o.trials = 1;
        let outcome = run_check(&set, &o).unwrap();

        assert_eq!(outcome.report.row(Archetype::David).unwrap().wins, 1);
        assert!(!outcome.passed());
    }
}
