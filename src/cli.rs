//! Command-line interface definition for Interviewer
//!
//! This module defines the CLI structure using clap's derive API,
//! providing the interactive practice session and a service probe.

use clap::{Parser, Subcommand};

/// Interviewer - practice technical interviews from the terminal
///
/// Answers are scored by a remote interview service; this client drives
/// the session and renders questions, feedback and progress.
#[derive(Parser, Debug, Clone)]
#[command(name = "interviewer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Deployment profile (development, production)
    #[arg(long)]
    pub profile: Option<String>,

    /// Override the service address for every profile
    #[arg(long)]
    pub api_url: Option<String>,

    /// Label language (en, ru)
    #[arg(long)]
    pub locale: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Interviewer
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive interview practice session
    Practice {
        /// Question topic (defaults to the configured topic)
        #[arg(short, long)]
        topic: Option<String>,

        /// Difficulty: junior/beginner, middle, senior/advanced
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Number of questions
        #[arg(short = 'n', long)]
        questions: Option<u32>,
    },

    /// Query the service root and print what it reports about itself
    Info {
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
