//! Core data structures: archetypes, questions and the question set.
//!
//! [`Archetype`] is the closed set of characters a quiz taker can be matched
//! with. Its declaration order is the canonical order used everywhere an
//! archetype list is walked, including tie-breaking in the simulation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::OPTIONS_PER_QUESTION;
use crate::error::{QuizError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    David,
    Peter,
    Rebekah,
    Paul,
    Jeremiah,
    Mary,
    Barnabas,
    Esther,
    Noah,
    Moses,
    Luke,
    Solomon,
    Deborah,
    Joseph,
    Daniel,
}

impl Archetype {
    pub const COUNT: usize = 15;

    /// All archetypes in canonical order.
    pub const ALL: [Archetype; Archetype::COUNT] = [
        Archetype::David,
        Archetype::Peter,
        Archetype::Rebekah,
        Archetype::Paul,
        Archetype::Jeremiah,
        Archetype::Mary,
        Archetype::Barnabas,
        Archetype::Esther,
        Archetype::Noah,
        Archetype::Moses,
        Archetype::Luke,
        Archetype::Solomon,
        Archetype::Deborah,
        Archetype::Joseph,
        Archetype::Daniel,
    ];

    /// Position in [`Archetype::ALL`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in the persisted JSON.
    pub fn name(self) -> &'static str {
        match self {
            Archetype::David => "david",
            Archetype::Peter => "peter",
            Archetype::Rebekah => "rebekah",
            Archetype::Paul => "paul",
            Archetype::Jeremiah => "jeremiah",
            Archetype::Mary => "mary",
            Archetype::Barnabas => "barnabas",
            Archetype::Esther => "esther",
            Archetype::Noah => "noah",
            Archetype::Moses => "moses",
            Archetype::Luke => "luke",
            Archetype::Solomon => "solomon",
            Archetype::Deborah => "deborah",
            Archetype::Joseph => "joseph",
            Archetype::Daniel => "daniel",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Archetype {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        Archetype::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| QuizError::UnknownArchetype(s.to_string()))
    }
}

/// Points an answer awards, in authored order.
pub type Scores = IndexMap<Archetype, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub scores: Scores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// An ordered, immutable collection of questions.
///
/// Serializes as a bare JSON array of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check the structural rules every quiz must satisfy: unique ids, exactly
    /// [`OPTIONS_PER_QUESTION`] answers per question, and at least one
    /// positive score per answer.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for q in &self.questions {
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateQuestion(q.id));
            }
            if q.text.trim().is_empty() {
                return Err(QuizError::invalid(q.id, "empty prompt"));
            }
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(QuizError::invalid(
                    q.id,
                    format!(
                        "expected {} options, found {}",
                        OPTIONS_PER_QUESTION,
                        q.options.len()
                    ),
                ));
            }
            for (i, opt) in q.options.iter().enumerate() {
                if opt.scores.is_empty() {
                    return Err(QuizError::invalid(
                        q.id,
                        format!("option {} awards no points", i + 1),
                    ));
                }
                if let Some((archetype, _)) = opt.scores.iter().find(|(_, pts)| **pts == 0) {
                    return Err(QuizError::invalid(
                        q.id,
                        format!("option {} gives {} zero points", i + 1, archetype),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Archetypes that at least one answer awards points to, in canonical order.
    pub fn scored_archetypes(&self) -> Vec<Archetype> {
        let mut present = [false; Archetype::COUNT];
        for opt in self.questions.iter().flat_map(|q| &q.options) {
            for archetype in opt.scores.keys() {
                present[archetype.index()] = true;
            }
        }
        Archetype::ALL
            .iter()
            .copied()
            .filter(|a| present[a.index()])
            .collect()
    }
}
