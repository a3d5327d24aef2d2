//! # wasp CLI entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! subcommand handlers. Logs go to stderr; stdout carries run outputs only.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wasp_cli::keygen::{run_keygen, KeygenArgs};
use wasp_cli::publish::{run_publish, PublishArgs};
use wasp_cli::resolve::{run_resolve, ResolveArgs};

/// Publish local files to a wallet-attached storage space.
#[derive(Parser, Debug)]
#[command(name = "wasp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload files matching a selection to a space.
    Publish(PublishArgs),

    /// Generate an Ed25519 key for signing writes.
    Keygen(KeygenArgs),

    /// Print the space URL a storage URL resolves to, without writing.
    Resolve(ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "wasp starting");

    let result = match cli.command {
        Commands::Publish(args) => run_publish(&args),
        Commands::Keygen(args) => run_keygen(&args),
        Commands::Resolve(args) => run_resolve(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
