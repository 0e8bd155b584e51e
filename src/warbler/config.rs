use crate::error::{Result, WarblerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HANDLE: &str = "@Scrimba";
const DEFAULT_PROFILE_PIC: &str = "assets/scrimbalogo.png";

/// Keys accepted by [`WarblerConfig::get`] and [`WarblerConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["handle", "profile-pic", "seed-file"];

/// Configuration for warbler, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarblerConfig {
    /// Author handle stamped on composed posts
    #[serde(default = "default_handle")]
    pub handle: String,

    /// Avatar for composed posts and the compose form
    #[serde(default = "default_profile_pic")]
    pub profile_pic: String,

    /// JSON file replacing the embedded seed feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_handle() -> String {
    DEFAULT_HANDLE.to_string()
}

fn default_profile_pic() -> String {
    DEFAULT_PROFILE_PIC.to_string()
}

impl Default for WarblerConfig {
    fn default() -> Self {
        Self {
            handle: default_handle(),
            profile_pic: default_profile_pic(),
            seed_file: None,
        }
    }
}

impl WarblerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WarblerError::Io)?;
        let config: WarblerConfig =
            serde_json::from_str(&content).map_err(WarblerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(WarblerError::Io)?;

        let content = serde_json::to_string_pretty(self).map_err(WarblerError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(WarblerError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "handle" => Some(self.handle.clone()),
            "profile-pic" => Some(self.profile_pic.clone()),
            "seed-file" => Some(
                self.seed_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `seed-file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "handle" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("handle cannot be empty".to_string());
                }
                self.handle = if value.starts_with('@') {
                    value.to_string()
                } else {
                    format!("@{}", value)
                };
            }
            "profile-pic" => self.profile_pic = value.to_string(),
            "seed-file" => {
                self.seed_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// Every key with its current value, in [`CONFIG_KEYS`] order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .map(|k| (*k, self.get(k).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WarblerConfig::default();
        assert_eq!(config.handle, "@Scrimba");
        assert_eq!(config.profile_pic, "assets/scrimbalogo.png");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_set_handle_adds_at_sign() {
        let mut config = WarblerConfig::default();
        config.set("handle", "robin").unwrap();
        assert_eq!(config.handle, "@robin");
        config.set("handle", "@wren").unwrap();
        assert_eq!(config.handle, "@wren");
        assert!(config.set("handle", "  ").is_err());
    }

    #[test]
    fn test_seed_file_set_and_clear() {
        let mut config = WarblerConfig::default();
        config.set("seed-file", "/tmp/posts.json").unwrap();
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/posts.json")));
        config.set("seed-file", "").unwrap();
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = WarblerConfig::default();
        assert!(config.get("color").is_none());
        assert!(config.set("color", "blue").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = WarblerConfig::load(temp.path()).unwrap();
        assert_eq!(config, WarblerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = WarblerConfig::default();
        config.set("profile-pic", "me.png").unwrap();
        config.save(&dir).unwrap();

        let loaded = WarblerConfig::load(&dir).unwrap();
        assert_eq!(loaded.profile_pic, "me.png");
        assert_eq!(loaded.handle, "@Scrimba");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"handle":"@me"}"#).unwrap();
        let loaded = WarblerConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.handle, "@me");
        assert_eq!(loaded.profile_pic, DEFAULT_PROFILE_PIC);
    }

    #[test]
    fn test_list_all_order() {
        let keys: Vec<&str> = WarblerConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }
}
