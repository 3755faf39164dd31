use crate::error::{BiostrapError, Result};
use crate::utils::fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CLIENT_VERSION_URL: &str =
    "https://clientsettings.roblox.com/v2/client-version/WindowsPlayer/channel/LIVE";
pub const DEFAULT_CDN_BASE_URL: &str = "https://setup-aws.rbxcdn.com";
pub const DEFAULT_USER_AGENT: &str = "BiostrapCLI 0.1";

/// Overrides the application folder, mostly useful for portable installs and tests.
pub const HOME_ENV_VAR: &str = "BIOSTRAP_HOME";

const CONFIG_FILE_NAME: &str = "config.json";

/// Settings stored in `config.json`. Missing keys fall back to the defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub client_version_url: String,
    pub cdn_base_url: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            client_version_url: DEFAULT_CLIENT_VERSION_URL.to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub biostrap_dir: PathBuf,
}

impl Config {
    pub fn new(biostrap_dir: PathBuf, settings: Settings) -> Self {
        Config {
            settings,
            biostrap_dir,
        }
    }

    /// Resolve the application folder and load (or create) its `config.json`.
    pub fn load() -> Result<Self> {
        let biostrap_dir = get_biostrap_dir()?;
        Self::load_from(&biostrap_dir)
    }

    pub fn load_from(biostrap_dir: &Path) -> Result<Self> {
        let biostrap_dir = fs::absolutize(biostrap_dir)?;
        let config_path = biostrap_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            let config = Self::new(biostrap_dir, Settings::default());
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;

        log::debug!("Loaded configuration from {config_path:?}");
        Ok(Self::new(biostrap_dir, settings))
    }

    pub fn save(&self) -> Result<()> {
        fs::ensure_dir_exists(&self.biostrap_dir)?;

        let content = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(self.config_path(), content)?;

        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.biostrap_dir.join(CONFIG_FILE_NAME)
    }

    pub fn get_versions_dir(&self) -> PathBuf {
        self.biostrap_dir.join("versions")
    }

    pub fn get_version_dir(&self, version: &str) -> PathBuf {
        self.get_versions_dir().join(version)
    }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("client_version_url", &self.client_version_url),
            ("cdn_base_url", &self.cdn_base_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(BiostrapError::config_error(format!(
                    "{key} must be an http(s) URL, got '{value}'"
                )));
            }
        }

        if self.user_agent.trim().is_empty() {
            return Err(BiostrapError::config_error("user_agent must not be empty"));
        }

        Ok(())
    }
}

fn get_biostrap_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("br0k3x").join("Biostrap"))
        .ok_or(BiostrapError::DataDirectoryNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.settings, Settings::default());
        assert!(dir.path().join("config.json").exists());
        assert_eq!(
            config.get_version_dir("version-abc"),
            config.biostrap_dir.join("versions").join("version-abc")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{ "cdn_base_url": "https://mirror.example.com" }"#,
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.settings.cdn_base_url, "https://mirror.example.com");
        assert_eq!(config.settings.client_version_url, DEFAULT_CLIENT_VERSION_URL);
        assert_eq!(config.settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{ "cdn_base_url": "ftp://mirror.example.com" }"#,
        )
        .unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, BiostrapError::ConfigError { .. }));
    }
}
