//! Seamap CLI - Species distribution predictions from the terminal
//!
//! # Commands
//!
//! ```bash
//! seamap predict data.csv                              # Upload and print the map URL
//! seamap predict data.csv --species rails --analyze    # Also ask for an analysis
//! seamap predict data.csv --download map.png           # Also save the artifact
//! seamap endpoints --variant basic                     # Show resolved endpoint URLs
//! ```
//!
//! The backend address comes from `--backend-url`, `SEAMAP_BACKEND_URL`
//! (a `.env` file is honoured) or the built-in default.

use clap::{Parser, Subcommand};
use seamap_cli::{describe_endpoints, run_predict, CliResult, PredictOptions};
use seamap_workflow::{BackendConfig, Species, Variant, DEFAULT_BACKEND_URL};
use std::io;
use std::path::PathBuf;
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seamap")]
#[command(about = "Generate species distribution prediction maps from CSV data", long_about = None)]
struct Cli {
    /// Show workflow debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a CSV and generate a prediction map
    Predict {
        /// Input CSV file (LAT_DD, LONG_DD, Salinite, Temp, DO, pH)
        input: PathBuf,

        /// Species to predict
        #[arg(short, long, default_value = "sardine")]
        species: Species,

        /// Request an analysis of the generated map
        #[arg(short, long)]
        analyze: bool,

        /// Save the downloadable artifact to this path
        #[arg(short, long)]
        download: Option<PathBuf>,

        /// Print the outcome as JSON on stdout
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Show the endpoints a configuration talks to
    Endpoints {
        #[command(flatten)]
        backend: BackendArgs,
    },
}

#[derive(clap::Args)]
struct BackendArgs {
    /// Backend base URL
    #[arg(long, env = "SEAMAP_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Page variant (basic: upload to `/`, no analysis)
    #[arg(long, default_value = "analysis")]
    variant: Variant,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let local = LocalSet::new();
    let result = local.run_until(run(cli.command)).await;

    if let Err(e) = result {
        if !e.already_reported() {
            eprintln!("❌ Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Predict {
            input,
            species,
            analyze,
            download,
            json,
            backend,
        } => {
            let options = PredictOptions {
                input,
                species,
                analyze,
                download,
                backend_url: backend.backend_url,
                variant: backend.variant,
            };
            let outcome = run_predict(&options).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.map_url);
                if let Some(text) = &outcome.analysis {
                    println!("\n{}", text);
                }
            }
            eprintln!("\n✨ Done!");
            Ok(())
        }

        Commands::Endpoints { backend } => {
            let config = BackendConfig::new(backend.backend_url, backend.variant);
            println!("{}", describe_endpoints(&config));
            Ok(())
        }
    }
}
