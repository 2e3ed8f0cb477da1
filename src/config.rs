//! Application configuration management.
//!
//! Configuration is read from the environment (with `.env` support) and
//! covers the two things the crate needs from its surroundings: where the
//! catalog API lives and where to keep the persisted cart snapshot.

use std::path::PathBuf;

use anyhow::Result;

/// Application name used for the default snapshot directory path
const APP_NAME: &str = "cartcache";

/// Default catalog API base URL (local development server)
const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Environment variable overriding the catalog API base URL
const ENV_API_URL: &str = "CARTCACHE_API_URL";

/// Environment variable overriding the snapshot directory
const ENV_DATA_DIR: &str = "CARTCACHE_DATA_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            api_base_url: std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            data_dir: std::env::var_os(ENV_DATA_DIR).map(PathBuf::from),
        }
    }

    /// Directory holding the persisted cart snapshot.
    ///
    /// The explicit override wins; otherwise the platform data directory
    /// (e.g. `~/.local/share/cartcache`) is used.
    pub fn snapshot_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
