//! Monte Carlo balance engine. Completes the quiz N times at random.
//!
//! Each trial picks one answer per question uniformly at random, sums the
//! archetype points of the picked answers, and credits the archetype with the
//! highest total. The win counts across all trials show whether random play
//! already favors some archetypes over others.
//!
//! Ties for the highest total go to the archetype that comes first in
//! [`Archetype::ALL`].
//!
//! Trial `i` draws from its own `SmallRng` seeded with `seed + i`, so a seed
//! fully determines the win counts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::types::{AnswerOption, Archetype, Question, QuestionSet};

/// Accumulated points for one simulated quiz completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialScores {
    /// Widened so any number of `u32` awards sums without wrapping.
    totals: [u64; Archetype::COUNT],
    /// Whether any answer awarded points to this archetype.
    touched: [bool; Archetype::COUNT],
}

impl TrialScores {
    #[inline(always)]
    pub fn add(&mut self, archetype: Archetype, points: u32) {
        let i = archetype.index();
        self.totals[i] = self.totals[i].saturating_add(u64::from(points));
        self.touched[i] = true;
    }

    pub fn get(&self, archetype: Archetype) -> u64 {
        self.totals[archetype.index()]
    }

    /// True when no answer awarded points to any archetype.
    pub fn is_empty(&self) -> bool {
        !self.touched.iter().any(|&t| t)
    }

    /// Archetype with the strictly highest total, first in canonical order on
    /// ties. `None` if nothing was scored.
    pub fn winner(&self) -> Option<Archetype> {
        let mut best: Option<(Archetype, u64)> = None;
        for a in Archetype::ALL {
            if !self.touched[a.index()] {
                continue;
            }
            let total = self.totals[a.index()];
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((a, total)),
            }
        }
        best.map(|(a, _)| a)
    }
}

/// Number of trials each archetype won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinCounts {
    counts: [u64; Archetype::COUNT],
}

impl WinCounts {
    #[inline(always)]
    pub fn record(&mut self, winner: Archetype) {
        self.counts[winner.index()] += 1;
    }

    pub fn get(&self, archetype: Archetype) -> u64 {
        self.counts[archetype.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(archetype, wins)` for every archetype in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, u64)> + '_ {
        Archetype::ALL.iter().map(move |&a| (a, self.counts[a.index()]))
    }
}

/// Results of a batch simulation.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub wins: WinCounts,
    pub trials: usize,
    /// Trials where no archetype scored and no winner was recorded.
    pub skipped: usize,
    pub seed: u64,
    pub elapsed: Duration,
}

/// Pick one answer uniformly at random.
#[inline(always)]
fn pick_option<'q>(question: &'q Question, rng: &mut SmallRng) -> Option<&'q AnswerOption> {
    if question.options.is_empty() {
        return None;
    }
    let i = rng.random_range(0..question.options.len());
    question.options.get(i)
}

/// Complete the quiz once with random answers and return the point totals.
pub fn simulate_trial(questions: &[Question], rng: &mut SmallRng) -> TrialScores {
    let mut scores = TrialScores::default();
    for question in questions {
        if let Some(option) = pick_option(question, rng) {
            for (&archetype, &points) in &option.scores {
                scores.add(archetype, points);
            }
        }
    }
    scores
}

/// Run `trials` independent quiz completions and count each archetype's wins.
pub fn simulate_batch(set: &QuestionSet, trials: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();
    let questions = set.questions();

    let mut wins = WinCounts::default();
    let mut skipped = 0usize;
    for i in 0..trials {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        match simulate_trial(questions, &mut rng).winner() {
            Some(winner) => wins.record(winner),
            None => skipped += 1,
        }
    }

    let elapsed = start.elapsed();
    if skipped > 0 {
        debug!(skipped, "trials without any scored archetype");
    }
    info!(
        trials,
        seed,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "simulation finished"
    );

    SimulationResult {
        wins,
        trials,
        skipped,
        seed,
        elapsed,
    }
}
