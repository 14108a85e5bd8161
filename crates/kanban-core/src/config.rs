//! Board configuration (`kanban.toml`).

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::board::AppState;
use crate::error::{BoardError, BoardResult};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "kanban.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3040;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KanbanConfig {
    pub server: ServerConfig,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Page title.
    pub title: String,
    pub seed: Seed,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Kanban".to_string(),
            seed: Seed::Sample,
        }
    }
}

/// Which board the store starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    #[default]
    Sample,
    Empty,
}

impl Seed {
    pub fn initial_state(self) -> AppState {
        match self {
            Self::Sample => AppState::sample(),
            Self::Empty => AppState::default(),
        }
    }
}

impl KanbanConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> BoardResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `kanban.toml` in `dir`
    /// is read if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>, dir: &Path) -> BoardResult<Self> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(BoardError::config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.exists() {
                    debug!(dir = %dir.display(), "No kanban.toml found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "Loading configuration");
        let text = std::fs::read_to_string(&path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = KanbanConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, KanbanConfig::default());
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.board.seed, Seed::Sample);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[server]\nport = 8080\n\n[board]\nseed = \"empty\"\n",
        )
        .unwrap();

        let config = KanbanConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.board.title, "Kanban");
        assert_eq!(config.board.seed, Seed::Empty);
        assert!(config.board.seed.initial_state().lists.is_empty());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = KanbanConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = KanbanConfig::from_toml("[server]\nthreads = 4\n").unwrap_err();
        assert!(matches!(err, BoardError::Toml(_)));
    }
}
