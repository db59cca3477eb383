// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! `plutchik`: describe emotional states from the command line.
//!
//! Threshold config comes from `--preset`, `--config <file>`, or the
//! `PLUTCHIK_CONFIG` environment variable, in that order of precedence.

mod handlers;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use plutchik_core::{Classifier, ClassifierConfig, Emotion, EmotionalState};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "plutchik", version, about = "Describe emotional states on Plutchik's wheel")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON classifier config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Named threshold preset: default, sensitive, reserved
    #[arg(long, global = true, conflicts_with = "config")]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a state, e.g. `plutchik describe -0.3 0.25 0 0`
    Describe {
        #[command(flatten)]
        state: StateArgs,
        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the active emotion of each axis, strongest first
    Rank {
        #[command(flatten)]
        state: StateArgs,
        #[arg(long)]
        json: bool,
    },
    /// Describe the blend of two named emotions
    Pair {
        first: Emotion,
        second: Emotion,
        intensity: f64,
        #[arg(long)]
        json: bool,
    },
    /// Print the dyad table for every pair of emotions
    Dyads {
        #[arg(long, default_value_t = 0.5)]
        intensity: f64,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct StateArgs {
    /// Anger (+) / Fear (-)
    #[arg(allow_negative_numbers = true)]
    sensitivity: f64,
    /// Anticipation (+) / Surprise (-)
    #[arg(allow_negative_numbers = true)]
    attention: f64,
    /// Joy (+) / Sadness (-)
    #[arg(allow_negative_numbers = true)]
    pleasantness: f64,
    /// Trust (+) / Disgust (-)
    #[arg(allow_negative_numbers = true)]
    aptitude: f64,
}

impl StateArgs {
    fn to_state(&self) -> Result<EmotionalState> {
        Ok(EmotionalState::try_new(
            self.sensitivity,
            self.attention,
            self.pleasantness,
            self.aptitude,
        )?)
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<ClassifierConfig> {
    if let Some(name) = &cli.preset {
        let Some(config) = ClassifierConfig::preset(name) else {
            bail!(
                "Unknown preset '{}'. Valid: {}",
                name,
                ClassifierConfig::PRESETS.join(", ")
            );
        };
        info!(preset = %name, "using classifier preset");
        return Ok(config);
    }

    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("PLUTCHIK_CONFIG").ok().map(PathBuf::from));

    match path {
        Some(path) => {
            let config = ClassifierConfig::load(&path)
                .with_context(|| format!("loading classifier config {}", path.display()))?;
            info!(path = %path.display(), "loaded classifier config");
            Ok(config)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

fn print_value(value: &Value, json: bool, text: impl FnOnce(&Value) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn description_text(value: &Value) -> String {
    value["description"].as_str().unwrap_or_default().to_string()
}

fn ranking_text(value: &Value) -> String {
    value["ranking"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    format!(
                        "{:<13} {:<13} {:.4}",
                        row["emotion"].as_str().unwrap_or_default(),
                        row["dimension"].as_str().unwrap_or_default(),
                        row["magnitude"].as_f64().unwrap_or_default(),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn dyads_text(value: &Value) -> String {
    value["pairs"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    let pair = format!(
                        "{} + {}",
                        row["first"].as_str().unwrap_or_default(),
                        row["second"].as_str().unwrap_or_default(),
                    );
                    format!("{:<28} {}", pair, row["description"].as_str().unwrap_or_default())
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    debug!(?config, "classifier thresholds");
    let classifier = Classifier::new(config);

    match &cli.command {
        Commands::Describe { state, json } => {
            let value = handlers::handle_describe(&classifier, &state.to_state()?)?;
            print_value(&value, *json, description_text)
        }
        Commands::Rank { state, json } => {
            let value = handlers::handle_rank(&state.to_state()?)?;
            print_value(&value, *json, ranking_text)
        }
        Commands::Pair {
            first,
            second,
            intensity,
            json,
        } => {
            let value = handlers::handle_pair(*first, *second, *intensity)?;
            print_value(&value, *json, description_text)
        }
        Commands::Dyads { intensity, json } => {
            let value = handlers::handle_dyads(*intensity)?;
            print_value(&value, *json, dyads_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from(["plutchik", "describe", "-0.3", "0.25", "0", "-1"]).unwrap();
        match cli.command {
            Commands::Describe { state, json } => {
                assert!(!json);
                let state = state.to_state().unwrap();
                assert_eq!(state.sensitivity(), -0.3);
                assert_eq!(state.aptitude(), -1.0);
            }
            _ => panic!("Expected Describe"),
        }
    }

    #[test]
    fn test_parse_pair() {
        let cli = Cli::try_parse_from(["plutchik", "pair", "Joy", "fear", "0.9", "--json"]).unwrap();
        match cli.command {
            Commands::Pair { first, second, json, .. } => {
                assert_eq!(first, Emotion::Joy);
                assert_eq!(second, Emotion::Fear);
                assert!(json);
            }
            _ => panic!("Expected Pair"),
        }
        assert!(Cli::try_parse_from(["plutchik", "pair", "love", "fear", "0.9"]).is_err());
    }

    #[test]
    fn test_non_finite_state_rejected() {
        let cli = Cli::try_parse_from(["plutchik", "describe", "NaN", "0", "0", "0"]).unwrap();
        match cli.command {
            Commands::Describe { state, .. } => assert!(state.to_state().is_err()),
            _ => panic!("Expected Describe"),
        }
    }

    #[test]
    fn test_resolve_preset() {
        let cli = Cli::try_parse_from(["plutchik", "--preset", "reserved", "dyads"]).unwrap();
        assert_eq!(resolve_config(&cli).unwrap(), ClassifierConfig::reserved());

        let cli = Cli::try_parse_from(["plutchik", "--preset", "stoic", "dyads"]).unwrap();
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("Unknown preset"));
    }

    #[test]
    fn test_resolve_missing_config_file() {
        let cli = Cli::try_parse_from([
            "plutchik",
            "--config",
            "/nonexistent/plutchik.json",
            "dyads",
        ])
        .unwrap();
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_text_renderers() {
        let value = handlers::handle_rank(&EmotionalState::new(0.9, 0.0, 0.0, 0.0)).unwrap();
        let text = ranking_text(&value);
        assert!(text.lines().next().unwrap().starts_with("anger"));
        assert_eq!(text.lines().count(), 4);

        let value = handlers::handle_dyads(0.5).unwrap();
        let text = dyads_text(&value);
        assert_eq!(text.lines().count(), 28);
        assert!(text.lines().next().unwrap().ends_with("love"));
    }
}
