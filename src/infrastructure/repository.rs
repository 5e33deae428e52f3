//! File system repository

use crate::error::{FolioError, Result};
use crate::infrastructure::config::{SiteConfig, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

pub const ROOT_ENV_VAR: &str = "FOLIO_ROOT";

/// A document found in one of the site's content directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub created: SystemTime,
}

/// Where a site keeps its settings, and whether it has been set up yet
pub trait SiteRepository {
    /// Directory holding `.folio/` and the listing pages
    fn root(&self) -> &Path;

    fn load_config(&self) -> Result<SiteConfig>;

    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// True once `folio init` has run here
    fn is_initialized(&self) -> bool;

    /// Mark the root as a site; fails if it already is one
    fn initialize(&self) -> Result<()>;
}

/// A site stored as plain files under `root`
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the site: `FOLIO_ROOT` wins when set, otherwise the nearest
    /// ancestor of the working directory that holds `.folio/`.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_folio_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "{} is set to '{}' but no .folio directory found. \
                    Run 'folio init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Nearest ancestor of `start` (itself included) that holds `.folio/`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_folio_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FolioError::NotFolioDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_folio_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_folio_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let folio_dir = self.root.join(CONFIG_DIR);

        if folio_dir.exists() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&folio_dir)?;
        Ok(())
    }
}

// Document operations; paths are relative to the site root.
impl FileSystemRepository {
    pub fn document_exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }

    pub fn read_document(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.root.join(path)).map_err(FolioError::Io)
    }

    /// Write a document relative to the site root.
    ///
    /// An existing document is truncated and rewritten in place, so it keeps its
    /// creation time and with it its position in `list_documents`. A new document
    /// is written to a temp file beside it and renamed into place, so a partial
    /// write never shows up as a writeup or tag.
    pub fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        let path = self.root.join(path);

        if path.is_file() {
            fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "rewrote document");
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            ".{}.folio-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document.html"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(FolioError::Io(e));
        }
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
        Ok(())
    }

    /// Delete a document; returns false if it was already gone.
    pub fn delete_document(&self, path: &Path) -> Result<bool> {
        match fs::remove_file(self.root.join(path)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FolioError::Io(e)),
        }
    }

    /// Create a directory (and parents) relative to the site root.
    pub fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(self.root.join(dir)).map_err(FolioError::Io)
    }

    /// List `prefix*suffix` files directly inside `dir`, oldest first.
    ///
    /// Age is the creation time where the platform reports one, else the
    /// modification time; ties are broken by file name. A missing directory
    /// lists as empty.
    pub fn list_documents(&self, dir: &Path, prefix: &str, suffix: &str) -> Result<Vec<DocumentEntry>> {
        let full_dir = self.root.join(dir);
        if !full_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&full_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| FolioError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !file_name.starts_with(prefix) || !file_name.ends_with(suffix) {
                continue;
            }
            let metadata = entry.metadata().map_err(|e| FolioError::Io(e.into()))?;
            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            documents.push(DocumentEntry {
                path: dir.join(file_name),
                file_name: file_name.to_string(),
                created,
            });
        }

        documents.sort_by(|a, b| {
            a.created
                .cmp(&b.created)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        Ok(documents)
    }
}
