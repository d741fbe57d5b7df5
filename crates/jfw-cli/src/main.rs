mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jfw")]
#[command(version, about = "JFW CLI - declarative cross-field validation", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check JSON records against a model declared in jfw.toml
    Check {
        /// Configuration file
        #[arg(short, long, default_value = "jfw.toml")]
        config: PathBuf,

        /// Model name to check against
        #[arg(short, long)]
        model: String,

        /// Print the validation messages as HTML markup
        #[arg(long)]
        render: bool,

        /// With --render, print only the message texts
        #[arg(long, requires = "render")]
        only_message: bool,

        /// JSON file holding one object or an array of objects
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            config,
            model,
            render,
            only_message,
            input,
        } => {
            let clean = commands::check::execute(commands::check::CheckOptions {
                config,
                model,
                render,
                only_message,
                input,
            })?;
            if !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
