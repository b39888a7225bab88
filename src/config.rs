use crate::error::{GradebookError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".gradebook.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradebookConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

/// How new entities get their id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Per-table counter that never goes backwards, starting after the
    /// largest seeded id.
    #[default]
    Sequential,
    /// `len + 1` of the table at insert time. Ids can repeat after deletes.
    Length,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Directory with `courses.json`, `students.json` and `grades.json`.
    /// Falls back to the embedded dataset when unset.
    #[serde(default)]
    pub seed_dir: Option<PathBuf>,
}

impl GradebookConfig {
    /// Searches upward from `start_path` for a config file, using defaults
    /// when none exists.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            GradebookError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        let mut config: GradebookConfig = serde_yaml::from_str(&content)?;

        // Relative seed paths are relative to the config file, not the cwd
        if let Some(seed_dir) = config.store.seed_dir.take() {
            let resolved = if seed_dir.is_relative() {
                let base = config_path.parent().ok_or_else(|| {
                    GradebookError::Config("Config file has no parent directory".to_string())
                })?;
                base.join(seed_dir)
            } else {
                seed_dir
            };
            config.store.seed_dir = Some(resolved);
        }

        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GradebookConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.graphiql);
        assert_eq!(config.store.id_policy, IdPolicy::Sequential);
        assert!(config.store.seed_dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GradebookConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store.id_policy, IdPolicy::Sequential);
    }

    #[test]
    fn test_id_policy_parses_lowercase() {
        let config: GradebookConfig =
            serde_yaml::from_str("store:\n  id_policy: length\n").unwrap();
        assert_eq!(config.store.id_policy, IdPolicy::Length);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = GradebookConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_discover_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 4321\nstore:\n  seed_dir: data\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = GradebookConfig::discover(&nested).unwrap();
        assert_eq!(config.server.port, 4321);
        assert_eq!(config.store.seed_dir, Some(temp_dir.path().join("data")));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        std::fs::write(
            &path,
            "server:\n  port: 9000\n  graphiql: false\nstore:\n  id_policy: length\n  seed_dir: /srv/seed\n",
        )
        .unwrap();

        let loaded = GradebookConfig::load(&path).unwrap();
        assert_eq!(loaded.server.port, 9000);
        assert!(!loaded.server.graphiql);
        assert_eq!(loaded.store.id_policy, IdPolicy::Length);
        assert_eq!(loaded.store.seed_dir, Some(PathBuf::from("/srv/seed")));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "server: [not, a, map]\n").unwrap();

        assert!(GradebookConfig::load(&path).is_err());
    }
}
