//! Runtime server configuration.

use std::path::{Path, PathBuf};

use orgchart_api::StatusPolicy;
use serde::Deserialize;

/// Runtime server configuration, deserialised from `config.toml` and
/// `ORGCHART_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub store_path:    PathBuf,
  /// JSON array of employees to upsert at startup.
  #[serde(default)]
  pub seed_path:     Option<PathBuf>,
  #[serde(default)]
  pub status_policy: StatusPolicy,
}

impl ServerConfig {
  /// Read `file` (if it exists), then overlay the environment.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "orgchart.db")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ORGCHART").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
