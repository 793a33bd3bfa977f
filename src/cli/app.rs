//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;

/// taskgate - Task API router for serverless gateways
#[derive(Parser, Debug)]
#[command(
    name = "taskgate",
    version,
    about = "Task API router for serverless gateways",
    long_about = "Routes gateway events for a small task-tracking API.\n\n\
                  `invoke` runs a single gateway proxy event through the router.\n\
                  `serve` runs a local HTTP server that behaves like the gateway."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config_dir>/taskgate/config.toml)
    #[arg(short, long, global = true, env = "TASKGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one gateway proxy event and print the response
    Invoke {
        /// Event JSON file (reads stdin when omitted or "-")
        #[arg(short, long)]
        event: Option<PathBuf>,
    },

    /// Serve the API over local HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = taskgate::config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Invoke { event }) => commands::invoke(&config, event.as_deref()),
        #[cfg(feature = "server")]
        Some(Command::Serve { host, port }) => commands::serve(config, host, port),
        Some(Command::Config) => commands::show_config(&config),
        Some(Command::Version) => {
            println!("taskgate v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        },
        None => {
            println!("taskgate v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'taskgate --help' for usage");
            Ok(())
        },
    }
}
