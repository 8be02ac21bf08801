//! JSON I/O for question sets and balance reports.
//!
//! Question files are a pretty-printed array of
//! `{ "id", "text", "options": [{ "text", "scores": { name: points } }] }`.
//! Korean text is written as-is (no `\u` escapes) and score maps keep their
//! authored order.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{QuizError, Result};
use crate::simulation::BalanceReport;
use crate::types::QuestionSet;

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| QuizError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| QuizError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the full question set to `path`, creating parent directories.
pub fn save_questions(set: &QuestionSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_json(set, path)?;
    info!(path = %path.display(), questions = set.len(), "question set saved");
    Ok(())
}

/// Read a question set previously written by [`save_questions`].
pub fn load_questions(path: impl AsRef<Path>) -> Result<QuestionSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set: QuestionSet = serde_json::from_str(&text).map_err(|source| QuizError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), questions = set.len(), "question set loaded");
    Ok(set)
}

/// Write a balance report to `path`.
pub fn save_report(report: &BalanceReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_json(report, path)?;
    info!(path = %path.display(), "balance report saved");
    Ok(())
}
