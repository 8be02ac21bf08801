//! Process-level setup shared by the binaries: working directory and logging.
//!
//! `QUIZ_BASE_PATH` (default `"."`) is the directory relative output paths are
//! resolved against. `RUST_LOG` controls log verbosity.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::{QuizError, Result};

/// Default log directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "quiz_balance=info";

/// Install the fmt subscriber on stderr so stdout carries only the report.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read `QUIZ_BASE_PATH` (default `"."`) and chdir into it.
pub fn init_base_path() -> Result<PathBuf> {
    let base_path = std::env::var("QUIZ_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(&base_path);
    std::env::set_current_dir(&path).map_err(|source| QuizError::Io {
        path: path.clone(),
        source,
    })?;
    if let Ok(cwd) = std::env::current_dir() {
        info!(base_path = %cwd.display(), "working directory");
    }
    Ok(path)
}
