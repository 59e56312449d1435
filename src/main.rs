//! Agro Aid CLI
//!
//! # Commands
//!
//! - `chat` (default): interactive crop / fertilizer recommendation session
//! - `train <crop|fertilizer> <dataset.csv>`: fit a model and its encoders
//! - `smoke-test`: run the reference sample through the fertilizer model

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt;

use agro_aid::adapters::console::{run_shell, ConsoleSink};
use agro_aid::adapters::models::{load_fertilizer_recommender, load_model_suite};
use agro_aid::application::smoke_test::run_smoke_test;
use agro_aid::application::training::{train, Dataset, TrainingPlan};
use agro_aid::config::{AppConfig, LoggingConfig};
use agro_aid::domain::dialogue::AgroAidBot;

/// Agro Aid - Crop & Fertilizer Recommendation
#[derive(Parser)]
#[command(name = "agro-aid")]
#[command(version)]
#[command(about = "Conversational crop and fertilizer recommendation assistant")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session on stdin/stdout
    Chat,
    /// Train a model from a CSV dataset
    Train(TrainArgs),
    /// Check the persisted fertilizer model with a known sample
    SmokeTest,
}

#[derive(clap::Args)]
struct TrainArgs {
    /// Which model to train
    #[arg(value_enum)]
    kind: ModelKind,

    /// CSV dataset with a header row
    dataset: PathBuf,

    /// Where to write the model (defaults to the configured path)
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Where to write the encoders (defaults to the configured path)
    #[arg(long)]
    encoders_out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelKind {
    Crop,
    Fertilizer,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging, cli.verbose);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(&config),
        Commands::Train(args) => train_model(&config, args),
        Commands::SmokeTest => smoke_test(&config),
    }
}

fn init_tracing(logging: &LoggingConfig, verbosity: u8) {
    let builder = fmt()
        .with_env_filter(logging.filter(verbosity))
        .with_target(true)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn chat(config: &AppConfig) -> anyhow::Result<()> {
    let models = load_model_suite(&config.models).context("failed to load model artifacts")?;
    let mut bot = AgroAidBot::new(models, ConsoleSink::new(io::stdout()));

    let exit = run_shell(&mut bot, io::stdin().lock()).context("failed to read input")?;
    tracing::debug!(?exit, "session ended");
    Ok(())
}

fn train_model(config: &AppConfig, args: TrainArgs) -> anyhow::Result<()> {
    let (plan, default_model, default_encoders, label) = match args.kind {
        ModelKind::Crop => (
            TrainingPlan::crop(),
            &config.models.crop_model,
            &config.models.crop_encoders,
            "Crop",
        ),
        ModelKind::Fertilizer => (
            TrainingPlan::fertilizer(),
            &config.models.fertilizer_model,
            &config.models.fertilizer_encoders,
            "Fertilizer",
        ),
    };

    let dataset = Dataset::from_path(&args.dataset)
        .with_context(|| format!("failed to read {}", args.dataset.display()))?;
    let artifacts = train(&plan, &dataset, &config.training)?;

    let model_out = args.model_out.unwrap_or_else(|| default_model.clone());
    let encoders_out = args.encoders_out.unwrap_or_else(|| default_encoders.clone());
    artifacts.save(&model_out, &encoders_out)?;

    println!("✅ {} Model Accuracy: {:.4}", label, artifacts.accuracy);
    Ok(())
}

fn smoke_test(config: &AppConfig) -> anyhow::Result<()> {
    let recommender =
        load_fertilizer_recommender(&config.models).context("failed to load fertilizer artifacts")?;

    let outcome = run_smoke_test(&recommender)?;
    for line in outcome.lines() {
        println!("{}", line);
    }
    Ok(())
}
