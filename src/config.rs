use std::path::{Path, PathBuf};

use color_eyre::{Result, eyre::Context};
use serde::{Deserialize, Serialize};

use crate::models::Playlist;
use crate::spotify_rs::auth::SPOTIFY_TOKEN_URL;
use crate::spotify_rs::client::SPOTIFY_API_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Overridden by `DB_CONNECTION_STRING`
    #[serde(default)]
    pub database_url: Option<String>,
    /// Synced in the order listed
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

fn default_api_base_url() -> String {
    SPOTIFY_API_URL.to_string()
}

fn default_token_url() -> String {
    SPOTIFY_TOKEN_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        let playlist = |id: &str, name: &str| Playlist {
            id: id.to_string(),
            name: name.to_string(),
        };

        Self {
            api_base_url: default_api_base_url(),
            token_url: default_token_url(),
            database_url: None,
            playlists: vec![
                playlist("1y8GwyganCtgF0XqsCHkaw", "HITSTER (Eng)"),
                playlist("5mQVbkcILLiU2aqVOplsMy", "HITSTER (Swe)"),
                playlist("2fiSqo8purGffbAeTAKVwF", "HITSTER Expansion (Swe)"),
                playlist("79RL8j33YuRiJ7j2ywzP9L", "HITSTER (Den)"),
                playlist("4uWJqAGuzZ7gTgU4F1ZmAE", "HITSTER (Nor)"),
                playlist("6Nn768rDkJXxIrGg8CjyKL", "HITSTER (Fin)"),
            ],
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .wrap_err(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Default location of the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("playlist-cache").join("config.toml"))
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;

        Self::from_file(&config_path)
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn create_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err(format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents =
            toml::to_string_pretty(&Config::default()).wrap_err("Failed to serialize config")?;
        std::fs::write(path, contents)
            .wrap_err(format!("Failed to write config file: {}", path.display()))?;
        Ok(true)
    }

    /// Database url, preferring the one given on the command line / environment
    pub fn database_url(&self, from_env: Option<&str>) -> Result<String> {
        from_env
            .map(str::to_string)
            .or_else(|| self.database_url.clone())
            .ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "No database configured. Set DB_CONNECTION_STRING or database_url in the config file"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(Config::create_default_at(&path).unwrap());
        assert!(!Config::create_default_at(&path).unwrap());

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.playlists.len(), 6);
    }

    #[test]
    fn test_minimal_config_uses_defaults_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
database_url = "sqlite://cache.db?mode=rwc"

[[playlists]]
id = "b"
name = "Second alphabetically"

[[playlists]]
id = "a"
name = "First alphabetically"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.api_base_url, SPOTIFY_API_URL);
        assert_eq!(config.token_url, SPOTIFY_TOKEN_URL);
        let ids: Vec<_> = config.playlists.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_database_url_precedence() {
        let config = Config {
            database_url: Some("sqlite://file.db".into()),
            ..Config::default()
        };

        assert_eq!(
            config.database_url(Some("postgres://env")).unwrap(),
            "postgres://env"
        );
        assert_eq!(config.database_url(None).unwrap(), "sqlite://file.db");
        assert!(Config::default().database_url(None).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(Config::from_file(&dir.path().join("nope.toml")).is_err());
    }
}
