mod commands;
mod values;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "urlgen")]
#[command(version = rhtmx_urlgen::VERSION, about = "Resolve route values to URLs using a route configuration", long_about = None)]
struct Cli {
    /// Route configuration (.json, .toml, or a .js bootstrap script)
    #[arg(short, long, global = true, default_value = "routes.json")]
    config: PathBuf,

    /// Log route matching decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a URL from route values
    Route {
        /// Route values as key=value
        values: Vec<String>,
    },

    /// Build a URL for a controller action
    Action {
        /// Controller name
        controller: String,

        /// Action name
        action: String,

        /// Extra route values as key=value
        values: Vec<String>,
    },

    /// List configured routes in matching order
    List,

    /// Compile every constraint and report invalid patterns
    Check,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "rhtmx_urlgen=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Route { values } => {
            commands::route::execute(&cli.config, &values)?;
        }
        Commands::Action {
            controller,
            action,
            values,
        } => {
            commands::route::execute_action(&cli.config, &controller, &action, &values)?;
        }
        Commands::List => {
            commands::list::execute(&cli.config)?;
        }
        Commands::Check => {
            commands::check::execute(&cli.config)?;
        }
    }

    Ok(())
}
