use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use debate_runner::{DebateOrchestrator, RunnerConfig, Transcript, TranscriptDebater};
use emotion_engine::{EmotionalState, Language};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "debate-runner",
    version,
    about = "Drive AI debates through the persona emotion engine"
)]
struct Cli {
    /// Runner config file (TOML). Environment is used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persona table (YAML) merged over the built-in personas.
    #[arg(long, global = true)]
    personas: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a recorded transcript and report the emotional trajectory.
    Replay {
        transcript: PathBuf,
        /// Rounds to replay (defaults to the transcript length).
        #[arg(long)]
        rounds: Option<u32>,
        /// Instruction language (en, ro).
        #[arg(long)]
        language: Option<Language>,
        /// Seed for the cooldown roll.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Analyze one opponent argument for a persona.
    Analyze {
        text: String,
        #[arg(long)]
        persona: Option<String>,
        #[arg(long, default_value = "neutral")]
        state: EmotionalState,
        #[arg(long, default_value_t = 2)]
        round: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List known personas and their progression parameters.
    Personas,
}

#[derive(Serialize)]
struct PersonaSummary<'a> {
    name: &'a str,
    temperament: &'a str,
    escalation_rate: f64,
    cooldown_rate: f64,
    max_intensity: f64,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = RunnerConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.personas {
        config.engine.personas_path = Some(path);
    }

    match cli.command {
        Command::Replay {
            transcript,
            rounds,
            language,
            seed,
        } => {
            let transcript = Transcript::load(&transcript)?;
            if let Some(seed) = seed {
                config.engine.seed = Some(seed);
            }
            // CLI flag, then transcript, then config.
            let language = language
                .or(transcript.language)
                .unwrap_or(config.engine.language);
            let rounds = rounds.unwrap_or(transcript.rounds.len() as u32);
            config.rounds = rounds;
            config.validate()?;

            info!(
                topic = %transcript.topic,
                rounds,
                language = %language,
                "Replaying transcript"
            );

            let engine = config.build_engine()?;
            let debater = TranscriptDebater::from(&transcript);
            let mut orchestrator =
                DebateOrchestrator::new(engine, debater, config.rounds).with_language(language);
            let report = orchestrator
                .run(
                    &transcript.topic,
                    transcript.pro_persona.as_deref(),
                    transcript.con_persona.as_deref(),
                )
                .await?;
            print_json(&report, cli.pretty)
        }
        Command::Analyze {
            text,
            persona,
            state,
            round,
            seed,
        } => {
            if let Some(seed) = seed {
                config.engine.seed = Some(seed);
            }
            let mut engine = config.build_engine()?;
            let analysis = engine.analyze(Some(&text), persona.as_deref(), state, round);
            print_json(&analysis, cli.pretty)
        }
        Command::Personas => {
            let engine = config.build_engine()?;
            let catalog = engine.catalog();
            let summaries: Vec<PersonaSummary<'_>> = catalog
                .names()
                .filter_map(|name| catalog.get(name).map(|profile| (name, profile)))
                .map(|(name, profile)| PersonaSummary {
                    name,
                    temperament: &profile.base_temperament,
                    escalation_rate: profile.state_progression.escalation_rate,
                    cooldown_rate: profile.state_progression.cooldown_rate,
                    max_intensity: profile.state_progression.max_intensity,
                })
                .collect();
            print_json(&summaries, cli.pretty)
        }
    }
}
