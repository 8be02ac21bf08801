//! Balance report built from simulation win counts.
//!
//! Target archetypes must reach a minimum win share; every other archetype
//! should land inside an acceptable band. Only the target check decides
//! whether the run passes. The band check is informational.

use serde::Serialize;
use std::fmt;

use crate::constants::{
    ACCEPTABLE_MAX_PERCENT, ACCEPTABLE_MIN_PERCENT, MIN_TARGET_SUCCESSES, TARGET_ARCHETYPES,
    TARGET_MIN_PERCENT,
};
use crate::types::Archetype;

use super::engine::SimulationResult;

// ── Criteria ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceCriteria {
    pub targets: Vec<Archetype>,
    pub target_min_percent: f64,
    pub min_target_successes: usize,
    pub acceptable_min_percent: f64,
    pub acceptable_max_percent: f64,
}

impl Default for BalanceCriteria {
    fn default() -> Self {
        Self {
            targets: TARGET_ARCHETYPES.to_vec(),
            target_min_percent: TARGET_MIN_PERCENT,
            min_target_successes: MIN_TARGET_SUCCESSES,
            acceptable_min_percent: ACCEPTABLE_MIN_PERCENT,
            acceptable_max_percent: ACCEPTABLE_MAX_PERCENT,
        }
    }
}

impl BalanceCriteria {
    /// Default thresholds with a different target list. The success quota is
    /// capped at the number of targets.
    pub fn with_targets(targets: Vec<Archetype>) -> Self {
        let defaults = Self::default();
        Self {
            min_target_successes: defaults.min_target_successes.min(targets.len()),
            targets,
            ..defaults
        }
    }

    pub fn is_target(&self, archetype: Archetype) -> bool {
        self.targets.contains(&archetype)
    }

    fn classify(&self, archetype: Archetype, percent: f64) -> ShareStatus {
        if self.is_target(archetype) {
            if percent >= self.target_min_percent {
                ShareStatus::TargetMet
            } else {
                ShareStatus::TargetMissed
            }
        } else if (self.acceptable_min_percent..=self.acceptable_max_percent).contains(&percent) {
            ShareStatus::InRange
        } else {
            ShareStatus::OutOfRange
        }
    }
}

// ── Per-archetype rows ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareStatus {
    TargetMet,
    TargetMissed,
    InRange,
    OutOfRange,
}

impl ShareStatus {
    pub fn marker(self) -> &'static str {
        match self {
            ShareStatus::TargetMet | ShareStatus::InRange => "✅",
            ShareStatus::TargetMissed => "❌",
            ShareStatus::OutOfRange => "🔶",
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, ShareStatus::TargetMet | ShareStatus::InRange)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArchetypeShare {
    pub archetype: Archetype,
    pub wins: u64,
    pub percent: f64,
    pub target: bool,
    pub status: ShareStatus,
}

// ── Report ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
pub struct BalanceReport {
    pub trials: usize,
    pub seed: u64,
    /// Sorted by wins, descending; ties keep canonical order.
    pub rows: Vec<ArchetypeShare>,
    pub target_successes: usize,
    pub target_count: usize,
    pub passed: bool,
}

impl BalanceReport {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn target_successes(&self) -> usize {
        self.target_successes
    }

    pub fn row(&self, archetype: Archetype) -> Option<&ArchetypeShare> {
        self.rows.iter().find(|r| r.archetype == archetype)
    }
}

/// Win share in percent. Zero trials give 0.0 rather than NaN.
pub fn win_percent(wins: u64, trials: usize) -> f64 {
    if trials == 0 {
        0.0
    } else {
        wins as f64 / trials as f64 * 100.0
    }
}

/// Score a simulation against `criteria`.
pub fn evaluate(result: &SimulationResult, criteria: &BalanceCriteria) -> BalanceReport {
    let mut rows: Vec<ArchetypeShare> = result
        .wins
        .iter()
        .map(|(archetype, wins)| {
            let percent = win_percent(wins, result.trials);
            ArchetypeShare {
                archetype,
                wins,
                percent,
                target: criteria.is_target(archetype),
                status: criteria.classify(archetype, percent),
            }
        })
        .collect();
    // Stable sort keeps canonical order among equal counts.
    rows.sort_by(|a, b| b.wins.cmp(&a.wins));

    let target_successes = rows
        .iter()
        .filter(|r| r.status == ShareStatus::TargetMet)
        .count();

    BalanceReport {
        trials: result.trials,
        seed: result.seed,
        rows,
        target_successes,
        target_count: criteria.targets.len(),
        passed: target_successes >= criteria.min_target_successes,
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:^15} | {:^6} | {:^8} | {:^6}",
            "Archetype", "Wins", "Share(%)", "Status"
        )?;
        writeln!(f, "{}", "-".repeat(45))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:^15} | {:^6} | {:^8.2} | {:^6}",
                row.archetype,
                row.wins,
                row.percent,
                row.status.marker()
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Target archetypes met: {}/{}",
            self.target_successes, self.target_count
        )
    }
}
