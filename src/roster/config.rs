use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NAME_WIDTH: usize = 60;
const MIN_NAME_WIDTH: usize = 8;

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Names loaded into every fresh session, in order
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,

    /// Ask before removing records
    #[serde(default = "default_confirm_remove")]
    pub confirm_remove: bool,

    /// Display width names are truncated to when listing
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_seed() -> Vec<String> {
    vec![
        "Harry Potter".to_string(),
        "Edward".to_string(),
        "Noname".to_string(),
    ]
}

fn default_confirm_remove() -> bool {
    true
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            confirm_remove: default_confirm_remove(),
            name_width: default_name_width(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: RosterConfig = serde_json::from_str(&content)?;
        if config.name_width < MIN_NAME_WIDTH {
            warn!(
                name_width = config.name_width,
                min = MIN_NAME_WIDTH,
                "name-width below minimum, clamping"
            );
            config.name_width = MIN_NAME_WIDTH;
        }
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed" => Some(self.seed.join(", ")),
            "confirm-remove" => Some(self.confirm_remove.to_string()),
            "name-width" => Some(self.name_width.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its textual form. Leaves the config untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "seed" => {
                self.seed = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "confirm-remove" => {
                self.confirm_remove = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for confirm-remove: {}", value))?;
            }
            "name-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid value for name-width: {}", value))?;
                if width < MIN_NAME_WIDTH {
                    return Err(format!("name-width must be at least {}", MIN_NAME_WIDTH));
                }
                self.name_width = width;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        ["seed", "confirm-remove", "name-width"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|v| (key, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.seed, vec!["Harry Potter", "Edward", "Noname"]);
        assert!(config.confirm_remove);
        assert_eq!(config.name_width, 60);
    }

    #[test]
    fn test_set_seed_splits_and_trims() {
        let mut config = RosterConfig::default();
        config.set("seed", " Ann , ,Bob ").unwrap();
        assert_eq!(config.seed, vec!["Ann", "Bob"]);
        assert_eq!(config.get("seed").unwrap(), "Ann, Bob");
    }

    #[test]
    fn test_set_confirm_remove() {
        let mut config = RosterConfig::default();
        config.set("confirm-remove", "no").unwrap();
        assert!(!config.confirm_remove);
        assert!(config.set("confirm-remove", "maybe").is_err());
        assert!(!config.confirm_remove);
    }

    #[test]
    fn test_set_name_width_validates() {
        let mut config = RosterConfig::default();
        config.set("name-width", "40").unwrap();
        assert_eq!(config.name_width, 40);

        assert!(config.set("name-width", "3").is_err());
        assert!(config.set("name-width", "wide").is_err());
        assert_eq!(config.name_width, 40);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = RosterConfig::default();
        assert!(config.get("colour").is_none());
        assert!(config.set("colour", "red").unwrap_err().contains("Unknown"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("roster");

        let mut config = RosterConfig::default();
        config.set("name-width", "20").unwrap();
        config.save(&dir).unwrap();

        let loaded = RosterConfig::load(&dir).unwrap();
        assert_eq!(loaded.name_width, 20);
        assert_eq!(loaded.seed, config.seed);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"seed": []}"#).unwrap();

        let loaded = RosterConfig::load(temp.path()).unwrap();
        assert!(loaded.seed.is_empty());
        assert!(loaded.confirm_remove);
        assert_eq!(loaded.name_width, 60);
    }

    #[test]
    fn test_load_clamps_narrow_name_width() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"name_width": 0}"#).unwrap();

        let loaded = RosterConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.name_width, MIN_NAME_WIDTH);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(RosterConfig::load(temp.path()).is_err());
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let keys: Vec<_> = RosterConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["seed", "confirm-remove", "name-width"]);
    }
}
