use anyhow::{Context, Result};
use hilite_engine::BulkPolarity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "hilite.db";

/// Resolve the data directory holding `config.toml` and the default database:
/// 1. HILITE_PATH environment variable (with tilde expansion)
/// 2. XDG data directory
/// 3. ~/.hilite
pub fn resolve_workspace_path() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("HILITE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("hilite"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".hilite"));
    }

    anyhow::bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scan database; relative paths are taken from the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    #[serde(default)]
    pub bulk: BulkPolarity,
}

impl Config {
    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        if let Some(db) = &config.database {
            let db = expand_tilde(&db.to_string_lossy());
            config.database = Some(match path.parent() {
                Some(dir) if db.is_relative() => dir.join(db),
                _ => db,
            });
        }

        Ok(config)
    }

    /// Database path: explicit flag, then the config file, then the data directory
    pub fn database_path(&self, explicit: Option<&str>, data_dir: &Path) -> PathBuf {
        if let Some(path) = explicit {
            return expand_tilde(path);
        }
        self.database
            .clone()
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bulk.removal_agent, 2);
    }

    #[test]
    fn test_load_database_and_polarity() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "database = \"scans/main.db\"\n\n[bulk]\nremoval_agent = 9\n")
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.database, Some(dir.path().join("scans/main.db")));
        assert_eq!(config.bulk.removal_agent, 9);
    }

    #[test]
    fn test_empty_bulk_table_keeps_default_sentinel() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[bulk]\n").unwrap();

        assert_eq!(Config::load_from(&path).unwrap().bulk.removal_agent, 2);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "database = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_database_path_priority() {
        let data_dir = Path::new("/data");
        let config = Config {
            database: Some(PathBuf::from("/scans/a.db")),
            ..Default::default()
        };

        assert_eq!(
            config.database_path(Some("/tmp/x.db"), data_dir),
            PathBuf::from("/tmp/x.db")
        );
        assert_eq!(
            config.database_path(None, data_dir),
            PathBuf::from("/scans/a.db")
        );
        assert_eq!(
            Config::default().database_path(None, data_dir),
            data_dir.join(DATABASE_FILE)
        );
    }
}
