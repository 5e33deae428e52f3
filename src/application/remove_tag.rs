//! Remove tag use case

use super::report::OperationReport;
use super::site::Site;
use crate::domain::entity::normalize_tag;
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default)]
pub struct RemoveTagOptions {
    pub name: String,
    /// Detach only from these writeups; `None` or an empty list means all of them.
    pub from_writeup_titles: Option<Vec<String>>,
}

/// Detach a tag from writeups and delete it once nothing references it.
pub fn remove_tag(site: &mut Site, options: RemoveTagOptions) -> Result<OperationReport> {
    let name = normalize_tag(&options.name)?;
    let path = site.config().tag_document(&name);
    if !site.repository().document_exists(&path) {
        return Err(FolioError::TagNotFound(name));
    }

    let mut report = OperationReport::new();
    let targets = match options.from_writeup_titles.filter(|titles| !titles.is_empty()) {
        Some(titles) => {
            let mut targets: Vec<usize> = Vec::new();
            for title in &titles {
                match site.model().find_writeup(title) {
                    Some(index) if !targets.contains(&index) => targets.push(index),
                    Some(_) => {}
                    None => report.warning(format!("Writeup '{}' not found, skipping", title)),
                }
            }
            targets
        }
        None => site.model().writeup_indices_tagged(&name),
    };

    for index in targets {
        let title = site.model().writeups()[index].title.clone();
        if !site.model_mut().detach_tag(index, &name) {
            report.info(format!("'{}' is not tagged with '{}'", title, name));
            continue;
        }
        match site.rewrite_writeup_tags(index) {
            Ok(()) => report.done(format!("Removed tag '{}' from '{}'", name, title)),
            Err(e) => report.failed(format!("Could not retag '{}': {}", title, e)),
        }
    }

    let still_used = site.model().writeups_tagged(&name).count();
    if still_used > 0 {
        report.info(format!(
            "Tag '{}' still used by {} writeup(s), keeping tag file",
            name, still_used
        ));
        return Ok(report);
    }

    site.model_mut().remove_tag(&name);
    match site.repository().delete_document(&path) {
        Ok(_) => report.done(format!("Deleted tag '{}' ({})", name, path.display())),
        Err(e) => report.failed(format!("Could not delete {}: {}", path.display(), e)),
    }
    Ok(report)
}
