//! Configuration for the board store and CLI
//!
//! Sources, later overriding earlier:
//! 1. Defaults
//! 2. Global file `~/.ikanban/config.{toml,yaml,yml,json}`
//! 3. Project file `./.ikanban/config.{toml,yaml,yml,json}`
//! 4. `IKANBAN_*` environment variables
//!
//! Command line flags are applied by the caller on top of the result.

use crate::logging::Pretty;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Name of the per-user and per-project configuration directory
pub const CONFIG_DIR: &str = ".ikanban";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "IKANBAN_";

/// Default storage quota, the usual browser local-storage budget
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },

    /// Current directory could not be determined
    #[error("unable to determine current directory: {0}")]
    CurrentDirectory(#[source] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(source: figment::Error) -> Self {
        Self::Parse {
            source: Box::new(source),
        }
    }
}

/// Settings that shape store behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Snapshot file used by the CLI
    pub state_path: PathBuf,
    /// Largest snapshot accepted by file storage; 0 disables the check
    pub quota_bytes: u64,
    /// Picks the default board background
    pub dark_mode: bool,
    /// Entries returned by `list activity` when no limit is given
    pub activity_limit: usize,
    /// Recorded on activity log entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Whether archived cards on live boards still feed the task feed
    pub feed_include_archived_cards: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
            dark_mode: false,
            activity_limit: 50,
            actor: None,
            feed_include_archived_cards: true,
        }
    }
}

fn default_state_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(CONFIG_DIR)
        .join("state.json")
}

impl BoardConfig {
    /// Load from the home directory, the current directory and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDirectory)?;
        Self::load_from(dirs::home_dir().as_deref(), Some(&cwd))
    }

    /// Load with explicit global and project roots. Each root is searched for
    /// `.ikanban/config.*`.
    pub fn load_from(
        global_root: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(BoardConfig::default()));

        for root in [global_root, project_root].into_iter().flatten() {
            figment = figment.merge(config_files(&root.join(CONFIG_DIR)));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()));

        let config: BoardConfig = figment.extract()?;
        debug!("loaded configuration: {}", Pretty(&config));
        Ok(config)
    }

    /// The quota to enforce, if any
    pub fn quota(&self) -> Option<u64> {
        (self.quota_bytes > 0).then_some(self.quota_bytes)
    }
}

/// Every `config.*` file present in `dir`, in a fixed format order
fn config_files(dir: &Path) -> Figment {
    let mut figment = Figment::new();
    for ext in ["toml", "yaml", "yml", "json"] {
        let path = dir.join(format!("config.{ext}"));
        if !path.is_file() {
            continue;
        }
        trace!(path = %path.display(), "loading config file");
        figment = match ext {
            "toml" => figment.merge(Toml::file(&path)),
            "json" => figment.merge(Json::file(&path)),
            _ => figment.merge(Yaml::file(&path)),
        };
    }
    figment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, body: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = BoardConfig::load_from(None, None).unwrap();
        assert_eq!(config.quota(), Some(DEFAULT_QUOTA_BYTES));
        assert_eq!(config.activity_limit, 50);
        assert!(config.feed_include_archived_cards);
        assert!(config.state_path.ends_with(".ikanban/state.json"));
    }

    #[test]
    #[serial]
    fn test_project_overrides_global() {
        let global = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_config(global.path(), "config.toml", "dark_mode = true\nactivity_limit = 10\n");
        write_config(project.path(), "config.yaml", "activity_limit: 5\nactor: alice\n");

        let config = BoardConfig::load_from(Some(global.path()), Some(project.path())).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.activity_limit, 5);
        assert_eq!(config.actor.as_deref(), Some("alice"));
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "config.json", r#"{"quota_bytes": 1024}"#);

        std::env::set_var("IKANBAN_QUOTA_BYTES", "0");
        let config = BoardConfig::load_from(None, Some(project.path()));
        std::env::remove_var("IKANBAN_QUOTA_BYTES");

        assert_eq!(config.unwrap().quota(), None);
    }

    #[test]
    #[serial]
    fn test_bad_file_is_parse_error() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "config.toml", "activity_limit = \"lots\"\n");

        let err = BoardConfig::load_from(None, Some(project.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
