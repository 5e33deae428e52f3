//! Config management use case

use crate::error::{FolioError, Result};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};

pub const CONFIG_KEYS: [&str; 6] = [
    "site_name",
    "tags_dir",
    "writeups_dir",
    "date_format",
    "recent_posts_limit",
    "created",
];

/// Service for managing site configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "site_name" => config.site_name = value.to_string(),
            "tags_dir" => config.tags_dir = value.to_string(),
            "writeups_dir" => config.writeups_dir = value.to_string(),
            "date_format" => config.date_format = value.to_string(),
            "recent_posts_limit" => {
                config.recent_posts_limit = match value.trim() {
                    "" | "all" | "none" => None,
                    n => Some(n.parse().map_err(|_| {
                        FolioError::Config(format!(
                            "Invalid recent_posts_limit: '{}'. Use a number or 'all'",
                            value
                        ))
                    })?),
                }
            }
            "created" => {
                return Err(FolioError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(FolioError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    CONFIG_KEYS[..5].join(", ")
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values as key/value pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| value_of(&config, key).map(|value| (*key, value)))
            .collect()
    }
}

fn value_of(config: &SiteConfig, key: &str) -> Result<String> {
    match key {
        "site_name" => Ok(config.site_name.clone()),
        "tags_dir" => Ok(config.tags_dir.clone()),
        "writeups_dir" => Ok(config.writeups_dir.clone()),
        "date_format" => Ok(config.date_format.clone()),
        "recent_posts_limit" => Ok(config
            .recent_posts_limit
            .map_or_else(|| "all".to_string(), |n| n.to_string())),
        "created" => Ok(config.created.to_rfc3339()),
        _ => Err(FolioError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            CONFIG_KEYS.join(", ")
        ))),
    }
}
