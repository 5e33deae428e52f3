//! Create tag use case

use super::report::OperationReport;
use super::site::Site;
use crate::domain::entity::normalize_tag;
use crate::domain::Tag;
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default)]
pub struct CreateTagOptions {
    pub name: String,
    pub description: Option<String>,
    /// Writeups to attach the new tag to, by title.
    pub writeup_titles: Vec<String>,
}

/// Write a new tag document and attach the tag to the named writeups.
///
/// Fails without touching anything if the tag already exists. Titles that do
/// not resolve are recorded as warnings and skipped.
pub fn create_tag(site: &mut Site, options: CreateTagOptions) -> Result<OperationReport> {
    let name = normalize_tag(&options.name)?;
    let path = site.config().tag_document(&name);

    if site.model().has_tag(&name) || site.repository().document_exists(&path) {
        return Err(FolioError::TagAlreadyExists(name));
    }

    let description = options
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let tag = Tag::new(name.clone(), description);
    site.repository()
        .write_document(&path, &site.renderer().tag_document(&tag))?;
    site.model_mut().insert_tag(&name);

    let mut report = OperationReport::new();
    report.done(format!("Created tag '{}' ({})", name, path.display()));

    for title in &options.writeup_titles {
        let Some(index) = site.model().find_writeup(title) else {
            report.warning(format!("Writeup '{}' not found, skipping", title));
            continue;
        };
        let found = site.model().writeups()[index].title.clone();

        if !site.model_mut().attach_tag(index, &name) {
            report.info(format!("'{}' already tagged with '{}'", found, name));
            continue;
        }
        match site.rewrite_writeup_tags(index) {
            Ok(()) => report.done(format!("Tagged '{}' with '{}'", found, name)),
            Err(e) => report.failed(format!("Could not retag '{}': {}", found, e)),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report::StepStatus;
    use crate::domain::extract::extract_writeup;
    use crate::domain::Writeup;
    use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
    use std::path::Path;
    use tempfile::TempDir;

    fn open_site(temp: &TempDir, writeups: &[&str]) -> Site {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let config = SiteConfig::new("V01");
        let renderer = config.renderer();
        repo.save_config(&config).unwrap();
        for title in writeups {
            let writeup = Writeup::new(*title);
            repo.write_document(
                &config.writeup_document(&writeup.filename),
                &renderer.writeup_document(&writeup),
            )
            .unwrap();
        }
        Site::open(repo).unwrap().0
    }

    fn options(name: &str, titles: &[&str]) -> CreateTagOptions {
        CreateTagOptions {
            name: name.to_string(),
            description: None,
            writeup_titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn creates_document_and_model_entry() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, &[]);

        let report = create_tag(&mut site, options("#Linux", &[])).unwrap();

        assert!(site.model().has_tag("linux"));
        assert!(temp.path().join("tags/tag-linux.html").exists());
        assert_eq!(report.count(StepStatus::Done), 1);
    }

    #[test]
    fn existing_tag_is_rejected_without_changes() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, &[]);
        create_tag(&mut site, options("linux", &[])).unwrap();
        let before = std::fs::read_to_string(temp.path().join("tags/tag-linux.html")).unwrap();

        let mut again = options("linux", &[]);
        again.description = Some("changed".to_string());
        match create_tag(&mut site, again).unwrap_err() {
            FolioError::TagAlreadyExists(name) => assert_eq!(name, "linux"),
            other => panic!("Expected TagAlreadyExists, got {}", other),
        }
        let after = std::fs::read_to_string(temp.path().join("tags/tag-linux.html")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn invalid_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, &[]);
        assert!(matches!(
            create_tag(&mut site, options("bad tag", &[])),
            Err(FolioError::InvalidTag(_))
        ));
        assert_eq!(site.model().tag_count(), 0);
    }

    #[test]
    fn attaches_to_resolved_writeups_and_skips_unknown() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, &["Machine One"]);

        let report = create_tag(&mut site, options("smb", &["machine one", "Ghost"])).unwrap();

        assert_eq!(site.model().writeups()[0].tags, vec!["smb"]);
        let html = site
            .repository()
            .read_document(Path::new("writeups/writeup-machine-one.html"))
            .unwrap();
        assert_eq!(extract_writeup(&html, "writeup-machine-one.html").tags, vec!["smb"]);
        assert_eq!(report.messages(StepStatus::Warning), vec!["Writeup 'Ghost' not found, skipping"]);
        assert!(!report.has_failures());
    }
}
