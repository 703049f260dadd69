//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabscope: upload a CSV, get a preview, statistics, and charts
#[derive(Parser)]
#[command(name = "tabscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the upload web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for web server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Directory created at startup for uploads
        #[arg(long, default_value = "uploads")]
        upload_dir: PathBuf,

        /// Largest accepted upload, in megabytes
        #[arg(long, default_value = "16")]
        max_upload_mb: usize,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Describe a local file without starting the server
    Describe {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write wave.png and bars.png into this directory
        #[arg(long, value_name = "DIR")]
        charts: Option<PathBuf>,
    },
}
