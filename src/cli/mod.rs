pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Probe CLI - black-box endpoint checks against a deployed backend API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the probe battery against a target base URL")]
    Run {
        #[arg(long, help = "Target base URL (falls back to PROBE_BASE_URL)")]
        base_url: Option<String>,

        #[arg(long, help = "Per-request timeout in seconds (falls back to PROBE_TIMEOUT_SECS)")]
        timeout: Option<u64>,

        #[arg(long, help = "Only run cases whose name contains this substring")]
        only: Option<String>,
    },

    #[command(about = "List the probe battery without sending requests")]
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Run {
            base_url,
            timeout,
            only,
        } => commands::run::handle(base_url, timeout, only, output_format).await,
        Commands::List => commands::list::handle(output_format),
    }
}
