//! Property-based tests for the quiz data and the balance engine.

use proptest::prelude::*;

use quiz_balance::constants::OPTIONS_PER_QUESTION;
use quiz_balance::simulation::{evaluate, simulate_batch, BalanceCriteria, TrialScores};
use quiz_balance::{question_set, AnswerOption, Archetype, Question, QuestionSet};

/// Strategy: any archetype.
fn archetype_strategy() -> impl Strategy<Value = Archetype> {
    (0..Archetype::COUNT).prop_map(|i| Archetype::ALL[i])
}

fn single_option_quiz(archetype: Archetype, points: u32) -> QuestionSet {
    QuestionSet::new(vec![Question {
        id: 1,
        text: "single".to_string(),
        options: vec![AnswerOption {
            text: "only".to_string(),
            scores: [(archetype, points)].into_iter().collect(),
        }],
    }])
}

// ── Static data ─────────────────────────────────────────────────────

#[test]
fn every_question_has_four_positive_options() {
    let set = question_set();
    assert_eq!(set.len(), 20);
    for q in set.questions() {
        assert_eq!(q.options.len(), OPTIONS_PER_QUESTION, "question {}", q.id);
        for opt in &q.options {
            assert!(!opt.scores.is_empty(), "question {}", q.id);
            for (&archetype, &points) in &opt.scores {
                assert!(points > 0, "question {} gives {} zero points", q.id, archetype);
                assert!(Archetype::ALL.contains(&archetype));
            }
        }
    }
    set.validate().unwrap();
}

#[test]
fn question_ids_run_one_to_twenty() {
    let ids: Vec<u32> = question_set().questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
}

#[test]
fn question_set_is_pure() {
    assert_eq!(question_set(), question_set());
}

#[test]
fn every_archetype_is_scored_somewhere() {
    assert_eq!(question_set().scored_archetypes(), Archetype::ALL.to_vec());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // 1. Every trial of the embedded quiz produces a winner
    #[test]
    fn wins_account_for_every_trial(seed in any::<u64>(), trials in 0usize..300) {
        let result = simulate_batch(&question_set(), trials, seed);
        prop_assert_eq!(result.skipped, 0);
        prop_assert_eq!(result.wins.total(), trials as u64);
    }

    // 2. A lone answer decides every trial
    #[test]
    fn single_option_wins_all(
        archetype in archetype_strategy(),
        points in 1u32..100,
        seed in any::<u64>(),
        trials in 0usize..200,
    ) {
        let result = simulate_batch(&single_option_quiz(archetype, points), trials, seed);
        prop_assert_eq!(result.wins.get(archetype), trials as u64);
        for (other, wins) in result.wins.iter() {
            if other != archetype {
                prop_assert_eq!(wins, 0);
            }
        }
    }

    // 3. Winner has the maximum total and no earlier archetype ties it
    #[test]
    fn winner_is_first_maximum(
        adds in prop::collection::vec((archetype_strategy(), 1u32..10), 1..40),
    ) {
        let mut scores = TrialScores::default();
        for &(a, p) in &adds {
            scores.add(a, p);
        }
        let winner = scores.winner().unwrap();
        let best = scores.get(winner);
        for a in Archetype::ALL {
            prop_assert!(scores.get(a) <= best);
            if a.index() < winner.index() {
                prop_assert!(scores.get(a) < best);
            }
        }
    }

    // 4. Same seed, same counts
    #[test]
    fn seed_determines_counts(seed in any::<u64>()) {
        let set = question_set();
        let a = simulate_batch(&set, 200, seed);
        let b = simulate_batch(&set, 200, seed);
        prop_assert_eq!(a.wins, b.wins);
    }

    // 5. Shares of a fully decided run add up to 100%
    #[test]
    fn shares_sum_to_hundred(seed in any::<u64>(), trials in 1usize..300) {
        let result = simulate_batch(&question_set(), trials, seed);
        prop_assert_eq!(result.skipped, 0);
        let report = evaluate(&result, &BalanceCriteria::default());
        let sum: f64 = report.rows.iter().map(|r| r.percent).sum();
        prop_assert!((sum - 100.0).abs() < 1e-9, "sum={sum}");
    }
}
