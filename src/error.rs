//! Error types for folio

use crate::domain::splice::RegionNotFound;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a folio site: {0}")]
    NotFolioDirectory(PathBuf),

    #[error("Tag '{0}' already exists")]
    TagAlreadyExists(String),

    #[error("Writeup '{title}' already exists ({filename})")]
    WriteupAlreadyExists { title: String, filename: String },

    #[error("Tag '{0}' not found")]
    TagNotFound(String),

    #[error("Writeup '{0}' not found")]
    WriteupNotFound(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid writeup title: {0}")]
    InvalidTitle(String),

    #[error("{document}: {source}")]
    Region {
        document: String,
        #[source]
        source: RegionNotFound,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotFolioDirectory(_) => 2,
            FolioError::TagAlreadyExists(_) | FolioError::WriteupAlreadyExists { .. } => 3,
            FolioError::TagNotFound(_) | FolioError::WriteupNotFound(_) => 4,
            FolioError::Region { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotFolioDirectory(path) => {
                format!(
                    "Not a folio site: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' in this directory to create a new site\n\
                    • Pass the site root with -C <dir>\n\
                    • Set FOLIO_ROOT environment variable to your site path",
                    path.display()
                )
            }
            FolioError::WriteupAlreadyExists { title, filename } => {
                format!(
                    "Writeup '{}' already exists\n   File: {}\n\n\
                    Suggestions:\n\
                    • Use a different title\n\
                    • Remove the existing writeup first: folio remove \"{}\"",
                    title, filename, title
                )
            }
            FolioError::TagNotFound(tag) => {
                format!(
                    "Tag '{}' not found\n\n\
                    Suggestions:\n\
                    • Use 'folio list' to see existing tags\n\
                    • Tag names are lower-case (e.g., active-directory)",
                    tag
                )
            }
            FolioError::WriteupNotFound(title) => {
                format!(
                    "Writeup '{}' not found\n\n\
                    Suggestions:\n\
                    • Use 'folio list' to see existing writeups\n\
                    • Writeups are matched by the title they were created with",
                    title
                )
            }
            FolioError::InvalidTag(tag) => {
                format!(
                    "Invalid tag: {}\n\n\
                    Allowed characters: letters, numbers, '-', '_'\n\
                    Example: folio tag active-directory",
                    tag
                )
            }
            FolioError::InvalidTitle(title) => {
                format!(
                    "Invalid writeup title: {}\n\n\
                    Titles become file names and cannot contain '/' or '\\'.\n\
                    Example: folio writeup \"HTB Sau\" --tags web",
                    title
                )
            }
            FolioError::Region { document, source } => {
                format!(
                    "{}: {}\n\n\
                    The document no longer contains the markers folio writes.\n\
                    Restore the region by hand or regenerate the page.",
                    document, source
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_failure_class() {
        assert_eq!(FolioError::NotFolioDirectory(PathBuf::from("/tmp")).exit_code(), 2);
        assert_eq!(FolioError::TagAlreadyExists("linux".into()).exit_code(), 3);
        assert_eq!(
            FolioError::WriteupAlreadyExists {
                title: "Box".into(),
                filename: "writeup-box.html".into(),
            }
            .exit_code(),
            3
        );
        assert_eq!(FolioError::TagNotFound("smb".into()).exit_code(), 4);
        assert_eq!(FolioError::WriteupNotFound("Box".into()).exit_code(), 4);
        assert_eq!(
            FolioError::Region {
                document: "tags.html".into(),
                source: RegionNotFound::MissingStart("tags listing"),
            }
            .exit_code(),
            5
        );
        assert_eq!(FolioError::Config("bad".into()).exit_code(), 1);
    }

    #[test]
    fn test_not_folio_directory_suggestion() {
        let err = FolioError::NotFolioDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("folio init"));
        assert!(msg.contains("FOLIO_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_writeup_exists_names_file() {
        let err = FolioError::WriteupAlreadyExists {
            title: "Box".into(),
            filename: "writeup-box.html".into(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("writeup-box.html"));
        assert!(msg.contains("folio remove \"Box\""));
    }

    #[test]
    fn test_region_error_names_document() {
        let err = FolioError::Region {
            document: "index.html".into(),
            source: RegionNotFound::MissingEnd("recent posts"),
        };
        assert!(err.to_string().starts_with("index.html: "));
        assert!(err.display_with_suggestions().contains("markers"));
    }

    #[test]
    fn test_invalid_title_names_separators() {
        let err = FolioError::InvalidTitle("HTB/Sau".into());
        assert_eq!(err.exit_code(), 1);
        assert!(err.display_with_suggestions().contains("cannot contain '/'"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = FolioError::Config("Unknown config key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: Unknown config key");
    }
}
