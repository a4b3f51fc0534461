//! Configuration for the search endpoint, dataset location, and ranking knobs.
//!
//! The config is an explicitly constructed value passed into
//! [`crate::search::Resolver::new`]; there is no process-wide singleton.

use std::{
   fs,
   path::{Path, PathBuf},
   time::Duration,
};

use figment::{
   Figment,
   providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{KbSearchError, Result};

pub const CONFIG_FILE: &str = "kbsearch.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
   /// Remote search endpoint, tried before any local work.
   pub endpoint: String,

   /// Path to the local JSON dataset used when the remote is unavailable.
   pub dataset_path: PathBuf,

   /// Deadline for the remote call in milliseconds. Zero disables the
   /// deadline, leaving an unresponsive endpoint to stall that search.
   pub remote_timeout_ms: u64,

   /// How many leading dataset items to show when nothing matches.
   pub sample_limit: usize,
}

impl Default for Config {
   fn default() -> Self {
      Self {
         endpoint:          "/api/search".to_string(),
         dataset_path:      PathBuf::from("knowledge.json"),
         remote_timeout_ms: 0,
         sample_limit:      6,
      }
   }
}

impl Config {
   /// Loads configuration from `kbsearch.toml` (written with defaults if
   /// absent) and `KBSEARCH_` environment variables, layered over the
   /// defaults.
   pub fn load() -> Self {
      Self::load_from(Path::new(CONFIG_FILE))
   }

   pub fn load_from(path: &Path) -> Self {
      if !path.exists() {
         if let Err(e) = Self::write_default(path) {
            tracing::debug!("failed to write default config: {e}");
         }
      }

      Figment::from(Serialized::defaults(Self::default()))
         .merge(Toml::file(path))
         .merge(Env::prefixed("KBSEARCH_").lowercase(false))
         .extract()
         .inspect_err(|e| tracing::warn!("failed to parse config: {e}"))
         .unwrap_or_default()
   }

   /// Writes the default configuration to `path`, creating parent
   /// directories as needed.
   pub fn write_default(path: &Path) -> Result<()> {
      let rendered = toml::to_string_pretty(&Self::default())
         .map_err(|e| KbSearchError::Config(format!("failed to serialize defaults: {e}")))?;

      if let Some(parent) = path.parent()
         && !parent.as_os_str().is_empty()
      {
         fs::create_dir_all(parent)?;
      }
      fs::write(path, rendered)?;
      Ok(())
   }

   /// The remote deadline, or `None` when disabled.
   pub fn remote_timeout(&self) -> Option<Duration> {
      (self.remote_timeout_ms > 0).then(|| Duration::from_millis(self.remote_timeout_ms))
   }
}
