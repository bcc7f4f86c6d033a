//! Pictor CLI - Turn short text prompts into images from the terminal.
//!
//! Two screens share one engine: the History visualizer enhances a
//! historical event description and returns a placeholder image, and the
//! Studio generator sends a styled prompt to the Clipdrop API.
//!
//! # Usage
//!
//! ```bash
//! # Guided menus
//! pictor
//!
//! # One-shot generation
//! CLIPDROP_API_KEY=... pictor generate --prompt "A castle" --style fantasy
//!
//! # Simulated history image
//! pictor generate --screen history --prompt "The fall of Rome"
//!
//! # View configuration
//! pictor config show
//! ```

use clap::{Parser, Subcommand};
use std::io::IsTerminal;

mod cli;
mod logging;

/// Pictor - Turn short text prompts into images.
#[derive(Parser, Debug)]
#[command(name = "pictor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one image from a prompt
    Generate(cli::generate::GenerateArgs),

    /// List the built-in example prompts
    Prompts(cli::prompts::PromptsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match pictor_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `pictor config path`."
            );
            pictor_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Pictor v{}", pictor_core::VERSION);

    match cli.command {
        Some(Commands::Generate(args)) => cli::generate::execute(args, &config).await,
        Some(Commands::Prompts(args)) => cli::prompts::execute(args),
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() => {
            cli::interactive::run(&config).await
        }
        None => {
            anyhow::bail!("No command given. Run `pictor --help` for usage.")
        }
    }
}
