//! Application settings loaded via OrthoConfig.
//!
//! Values come from `WATCHLIST_*` environment variables, configuration files
//! and command-line overrides, falling back to the defaults below.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_POOL_SIZE: u32 = 4;

fn default_database_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data.db")
}

/// Runtime configuration for the server and the admin commands.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WATCHLIST")]
pub struct AppSettings {
    /// SQLite database file.
    pub database_path: Option<PathBuf>,
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// Port the HTTP server binds to.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Maximum pooled database connections.
    pub pool_size: Option<u32>,
}

impl AppSettings {
    /// Configured database file, defaulting to `data.db` in the crate
    /// directory.
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(default_database_path)
    }

    /// Database path as the string Diesel connects with.
    pub fn database_url(&self) -> String {
        self.database_path().to_string_lossy().into_owned()
    }

    /// Configured bind host.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured pool size.
    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    /// Socket address assembled from host and port.
    ///
    /// # Errors
    ///
    /// Returns an error when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port).parse()
    }
}
