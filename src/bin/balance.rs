use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use quiz_balance::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_TRIALS};
use quiz_balance::env_config::{init_base_path, init_tracing};
use quiz_balance::simulation::BalanceCriteria;
use quiz_balance::storage::load_questions;
use quiz_balance::{question_set, run_check, Archetype, CheckOptions};

#[derive(Parser, Debug)]
#[command(
    name = "quiz-balance",
    version,
    about = "Verify the biblical quiz is balanced under random answers, then save it"
)]
struct Args {
    /// Number of simulated quiz completions
    #[arg(long, env = "QUIZ_TRIALS", default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// RNG seed (random if omitted)
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// Where to write the question set when the check passes
    #[arg(long, env = "QUIZ_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Re-check a previously saved question file instead of the embedded set
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also write the balance report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Evaluate only; never write the question set
    #[arg(long)]
    dry_run: bool,

    /// Replace the target archetypes (comma-separated, e.g. moses,luke)
    #[arg(long = "target", value_delimiter = ',')]
    targets: Vec<Archetype>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    init_base_path().context("failed to enter QUIZ_BASE_PATH")?;

    let set = match &args.input {
        Some(path) => load_questions(path)
            .with_context(|| format!("failed to load questions from {}", path.display()))?,
        None => question_set(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seed selected");

    println!(
        "Biblical quiz balance check ({} questions, {} trials)",
        set.len(),
        args.trials
    );

    let mut opts = CheckOptions::new(args.trials, seed, args.output.clone(), args.dry_run);
    opts.report = args.report.clone();
    if !args.targets.is_empty() {
        opts.criteria = BalanceCriteria::with_targets(args.targets.clone());
    }
    let outcome = run_check(&set, &opts).context("balance check aborted")?;

    println!();
    println!("{}", outcome.report);
    println!();

    if outcome.passed() {
        match &outcome.saved_to {
            Some(path) => println!("✅ Balanced question set saved to {}", path.display()),
            None => println!("✅ Balance check passed (dry run, nothing saved)"),
        }
        Ok(ExitCode::SUCCESS)
    } else {
        println!("❌ Target archetypes below threshold. Adjust the scores and re-run.");
        Ok(ExitCode::FAILURE)
    }
}
