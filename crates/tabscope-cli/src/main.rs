//! Tabscope CLI - upload a CSV, get statistics and charts.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            upload_dir,
            max_upload_mb,
            no_open,
        } => commands::serve::run(host, port, upload_dir, max_upload_mb, no_open),

        Commands::Describe { file, json, charts } => {
            commands::describe::run(file, json, charts, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over info.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug,hyper=info,tower_http=debug")
        } else {
            EnvFilter::new("info,hyper=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
