mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::ConfigArgs;
use planner_core::types::DEFAULT_MODEL;
use planner_core::NormalizationMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "planner",
    about = "AI project planner — turn a project name into a structured plan",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, env = "PLANNER_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "PLANNER_PORT", default_value = "8000")]
        port: u16,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Generate one plan and print the response JSON
    Generate {
        /// Project name embedded in the prompt
        project_name: String,

        /// Model requested from the completion endpoint
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Free-text requirements appended to the prompt
        #[arg(long, default_value = "")]
        requirements: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Normalize saved model output without calling the API
    Normalize {
        /// passthrough, plain_text, sections or json
        #[arg(long, default_value = "json")]
        mode: NormalizationMode,

        /// File to read (default: stdin)
        file: Option<PathBuf>,
    },
}

fn main() {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve { host, port, config } => cmd::serve::run(config, &host, port),
        Commands::Generate {
            project_name,
            model,
            requirements,
            config,
        } => cmd::generate::run(config, project_name, model, requirements),
        Commands::Normalize { mode, file } => cmd::normalize::run(mode, file.as_deref()),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
