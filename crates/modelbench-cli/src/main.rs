//! Command-line interface for the modelbench evaluation pipeline

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelbench_cli::{
    run_aggregate, run_all, run_guardrails, run_report, run_score, run_simulate, run_tasks,
    DataLayout,
};
use modelbench_simulate::{generate_response, SimulatorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modelbench")]
#[command(about = "Evaluate simulated LLM responders against a fixed task catalog")]
struct Cli {
    /// Root directory for pipeline artifacts
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Simulator config JSON (seed + model roster); defaults to the
    /// built-in roster when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the fixed task catalog
    Tasks,
    /// Generate one response per (task, model) pair
    Simulate,
    /// Score every response against its task reference
    Score,
    /// Flag responses for toxicity and refusal
    Guardrails,
    /// Merge automatic scores with human labels
    Aggregate,
    /// Summarize the final artifact into a report
    Report,
    /// Run tasks, simulate, score, guardrails, and aggregate in order
    Run,
    /// Ask one of the dummy responders an ad hoc prompt
    Chat {
        /// Responder name (gpt4_dummy, llama3_dummy, mistral_dummy)
        #[arg(long, short = 'm')]
        model: String,
        /// Prompt text
        prompt: String,
        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SimulatorConfig> {
    match path {
        Some(path) => SimulatorConfig::from_file(path),
        None => Ok(SimulatorConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let layout = DataLayout::new(&cli.data_dir);

    match cli.command {
        Command::Tasks => run_tasks(&layout)?,
        Command::Simulate => run_simulate(&layout, &load_config(cli.config.as_ref())?)?,
        Command::Score => run_score(&layout)?,
        Command::Guardrails => run_guardrails(&layout)?,
        Command::Aggregate => run_aggregate(&layout)?,
        Command::Report => run_report(&layout)?,
        Command::Run => run_all(&layout, &load_config(cli.config.as_ref())?)?,
        Command::Chat {
            model,
            prompt,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            println!("{}", generate_response(&mut rng, &model, &prompt));
        }
    }

    Ok(())
}
