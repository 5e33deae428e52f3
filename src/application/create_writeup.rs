//! Create writeup use case

use super::create_tag::{create_tag, CreateTagOptions};
use super::report::OperationReport;
use super::site::Site;
use crate::domain::entity::{normalize_tags, validate_writeup_title};
use crate::domain::Writeup;
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default)]
pub struct CreateWriteupOptions {
    pub title: String,
    pub tags: Vec<String>,
    pub photo: Option<String>,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
    pub difficulty: Option<String>,
    pub os: Option<String>,
    pub ip: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Render a new writeup document, creating any tags it names that are unknown.
pub fn create_writeup(site: &mut Site, options: CreateWriteupOptions) -> Result<OperationReport> {
    let title = options.title.trim();
    validate_writeup_title(title)?;
    let tags = normalize_tags(&options.tags)?;

    let mut writeup = Writeup::new(title);
    let path = site.config().writeup_document(&writeup.filename);
    if site.repository().document_exists(&path)
        || site.model().find_writeup_by_filename(&writeup.filename).is_some()
    {
        return Err(FolioError::WriteupAlreadyExists {
            title: writeup.title,
            filename: path.display().to_string(),
        });
    }

    let mut report = OperationReport::new();
    for tag in &tags {
        if site.model().has_tag(tag) {
            continue;
        }
        let implicit = CreateTagOptions {
            name: tag.clone(),
            ..CreateTagOptions::default()
        };
        match create_tag(site, implicit) {
            Ok(created) => report.merge(created),
            Err(FolioError::TagAlreadyExists(_)) => {
                site.model_mut().insert_tag(tag);
                report.info(format!("Tag '{}' already exists", tag));
            }
            Err(e) => report.failed(format!("Could not create tag '{}': {}", tag, e)),
        }
    }

    let created = non_empty(options.created_date).unwrap_or_else(|| site.config().today());
    writeup.updated = non_empty(options.updated_date).unwrap_or_else(|| created.clone());
    writeup.created = created;
    writeup.photo = non_empty(options.photo);
    writeup.tags = tags;
    writeup.difficulty = non_empty(options.difficulty);
    writeup.os = non_empty(options.os);
    writeup.ip = non_empty(options.ip);

    site.repository()
        .write_document(&path, &site.renderer().writeup_document(&writeup))?;
    report.done(format!("Created writeup '{}' ({})", writeup.title, path.display()));
    site.model_mut().push_writeup(writeup);

    Ok(report)
}
