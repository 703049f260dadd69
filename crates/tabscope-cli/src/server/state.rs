//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use tabscope::Tabscope;

/// Bytes in one megabyte of upload limit.
const MEGABYTE: usize = 1024 * 1024;

/// Server settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Created once at startup.
    pub upload_dir: PathBuf,
    /// Request bodies above this size are rejected.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16, upload_dir: PathBuf, max_upload_mb: usize) -> Self {
        Self {
            host,
            port,
            upload_dir,
            max_upload_bytes: max_upload_mb.saturating_mul(MEGABYTE),
        }
    }

    /// Upload limit in whole megabytes, for messages.
    pub fn max_upload_mb(&self) -> usize {
        self.max_upload_bytes / MEGABYTE
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1".to_string(), 5000, PathBuf::from("uploads"), 16)
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server settings.
    pub config: Arc<ServerConfig>,
    /// The pipeline run for each upload.
    pub tabscope: Arc<Tabscope>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            tabscope: Arc::new(Tabscope::new()),
        }
    }
}
