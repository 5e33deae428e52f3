//! Configuration management

use crate::domain::entity::{tag_filename, writeup_filename};
use crate::domain::HtmlRenderer;
use crate::error::{FolioError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".folio";
const CONFIG_FILE: &str = "config.toml";

fn default_site_name() -> String {
    "Portfolio".to_string()
}

fn default_tags_dir() -> String {
    "tags".to_string()
}

fn default_writeups_dir() -> String {
    "writeups".to_string()
}

fn default_date_format() -> String {
    "%B %d, %Y".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_tags_dir")]
    pub tags_dir: String,
    #[serde(default = "default_writeups_dir")]
    pub writeups_dir: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Cap on the home page's recent posts; absent means every writeup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_posts_limit: Option<usize>,
    pub created: DateTime<Utc>,
}

impl SiteConfig {
    /// Create a new config with default values
    pub fn new(site_name: impl Into<String>) -> Self {
        SiteConfig {
            site_name: site_name.into(),
            tags_dir: default_tags_dir(),
            writeups_dir: default_writeups_dir(),
            date_format: default_date_format(),
            recent_posts_limit: None,
            created: Utc::now(),
        }
    }

    /// Load config from .folio/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotFolioDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        let config: SiteConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .folio/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (key, dir) in [("tags_dir", &self.tags_dir), ("writeups_dir", &self.writeups_dir)] {
            if dir.trim().is_empty() || Path::new(dir).is_absolute() || dir.contains("..") {
                return Err(FolioError::Config(format!(
                    "Invalid {}: '{}'. Use a directory name relative to the site root",
                    key, dir
                )));
            }
        }
        validate_date_format(&self.date_format)
    }

    /// Site-relative path of a tag document.
    pub fn tag_document(&self, name: &str) -> PathBuf {
        Path::new(&self.tags_dir).join(tag_filename(name))
    }

    /// Site-relative path of a writeup document, by filename.
    pub fn writeup_document(&self, filename: &str) -> PathBuf {
        Path::new(&self.writeups_dir).join(filename)
    }

    /// Site-relative path of the writeup document a title would create.
    pub fn writeup_document_for_title(&self, title: &str) -> PathBuf {
        self.writeup_document(&writeup_filename(title))
    }

    pub fn renderer(&self) -> HtmlRenderer {
        HtmlRenderer::new(&self.site_name, &self.tags_dir, &self.writeups_dir)
    }

    /// Today's date rendered with `date_format`.
    pub fn today(&self) -> String {
        Local::now().format(&self.date_format).to_string()
    }
}

/// Reject strftime strings chrono cannot render.
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FolioError::Config(format!(
            "Invalid date format: '{}'. Use strftime syntax such as '%B %d, %Y'",
            format
        )));
    }
    Ok(())
}
