//! Loading a site into a content model and writing regions back

use super::report::OperationReport;
use crate::domain::entity::{is_writeup_filename, tag_name_from_filename};
use crate::domain::extract::{extract_projects, extract_writeup};
use crate::domain::regions::WRITEUP_TAGS;
use crate::domain::splice::{splice, Region};
use crate::domain::{ContentModel, HtmlRenderer, ListingPage};
use crate::error::{FolioError, Result};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
use std::collections::BTreeSet;
use std::path::Path;

/// An opened site: its configuration and the model rebuilt from its documents.
///
/// The model lives for one invocation. Operations mutate it and write every
/// affected document before returning; nothing else persists it.
#[derive(Debug)]
pub struct Site {
    repository: FileSystemRepository,
    config: SiteConfig,
    renderer: HtmlRenderer,
    model: ContentModel,
}

impl Site {
    /// Load the configuration and scan the tag, writeup and projects documents.
    ///
    /// Documents that cannot be read are skipped and recorded as warnings.
    pub fn open(repository: FileSystemRepository) -> Result<(Site, OperationReport)> {
        let config = repository.load_config()?;
        let mut report = OperationReport::new();

        let tags: BTreeSet<String> = repository
            .list_documents(Path::new(&config.tags_dir), "tag-", ".html")?
            .iter()
            .filter_map(|doc| tag_name_from_filename(&doc.file_name))
            .map(str::to_string)
            .collect();

        let mut writeups = Vec::new();
        let writeup_docs = repository
            .list_documents(Path::new(&config.writeups_dir), "writeup-", ".html")?
            .into_iter()
            .filter(|doc| is_writeup_filename(&doc.file_name));
        for doc in writeup_docs {
            match repository.read_document(&doc.path) {
                Ok(content) => writeups.push(extract_writeup(&content, &doc.file_name)),
                Err(e) => report.warning(format!("Skipped {}: {}", doc.path.display(), e)),
            }
        }

        let projects_path = Path::new(ListingPage::Projects.filename());
        let projects = if repository.document_exists(projects_path) {
            match repository.read_document(projects_path) {
                Ok(content) => extract_projects(&content),
                Err(e) => {
                    report.warning(format!("Skipped {}: {}", projects_path.display(), e));
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        tracing::debug!(
            root = %repository.root.display(),
            tags = tags.len(),
            writeups = writeups.len(),
            projects = projects.len(),
            "loaded site"
        );

        let renderer = config.renderer();
        let site = Site {
            repository,
            config,
            renderer,
            model: ContentModel::new(tags, writeups, projects),
        };
        Ok((site, report))
    }

    pub fn repository(&self) -> &FileSystemRepository {
        &self.repository
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    pub fn model(&self) -> &ContentModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ContentModel {
        &mut self.model
    }

    /// Replace the inner text of `region` in the document at `path`.
    pub fn splice_document(&self, path: &Path, region: &Region, inner: &str) -> Result<()> {
        let content = self.repository.read_document(path)?;
        let updated = splice(&content, region, inner).map_err(|source| FolioError::Region {
            document: path.display().to_string(),
            source,
        })?;
        if updated != content {
            self.repository.write_document(path, &updated)?;
        }
        Ok(())
    }

    /// Rewrite a writeup document's tag region from the writeup's current tags.
    pub fn rewrite_writeup_tags(&self, index: usize) -> Result<()> {
        let writeup = self
            .model
            .writeup(index)
            .ok_or_else(|| FolioError::WriteupNotFound(format!("#{}", index)))?;
        let path = self.config.writeup_document(&writeup.filename);
        self.splice_document(&path, &WRITEUP_TAGS, &self.renderer.writeup_tag_region(&writeup.tags))
    }
}
