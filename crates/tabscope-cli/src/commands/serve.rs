//! Serve command - run the upload web server.

use std::path::PathBuf;

use colored::Colorize;
use tracing::info;

use crate::server::{
    app,
    state::{AppState, ServerConfig},
};

pub fn run(
    host: String,
    port: u16,
    upload_dir: PathBuf,
    max_upload_mb: usize,
    no_open: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::new(host, port, upload_dir, max_upload_mb);

    // The only process-wide side effect.
    std::fs::create_dir_all(&config.upload_dir)?;
    info!(dir = %config.upload_dir.display(), "upload directory ready");

    let url = config.url();
    println!();
    println!(
        "{} {}",
        "Starting tabscope at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Uploads: {}", config.upload_dir.display());
    println!("  Limit:   {} MB", config.max_upload_mb());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let state = AppState::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state).await
    })
}
