//! Remove writeup use case

use super::refresh::refresh_listings;
use super::report::OperationReport;
use super::site::Site;
use crate::domain::entity::writeup_filename;
use crate::domain::regions::WRITEUP_CARD;
use crate::domain::splice::remove_blocks;
use crate::error::{FolioError, Result};

/// Delete a writeup and cascade the removal through tags and listings.
///
/// The writeup is resolved by the filename its title derives to. Every later
/// step is best-effort: a step that fails is recorded and the cascade goes on.
pub fn remove_writeup(site: &mut Site, title: &str) -> Result<OperationReport> {
    let filename = writeup_filename(title.trim());
    let index = site
        .model()
        .find_writeup_by_filename(&filename)
        .ok_or_else(|| FolioError::WriteupNotFound(title.to_string()))?;

    let mut report = OperationReport::new();
    let path = site.config().writeup_document(&filename);
    match site.repository().delete_document(&path) {
        Ok(true) => report.done(format!("Deleted {}", path.display())),
        Ok(false) => report.warning(format!("{} was already missing", path.display())),
        Err(e) => report.failed(format!("Could not delete {}: {}", path.display(), e)),
    }

    let Some(removed) = site.model_mut().remove_writeup(index) else {
        return Ok(report);
    };
    report.done(format!("Removed writeup '{}'", removed.title));

    purge_cards(site, &filename, &mut report);

    for tag in &removed.tags {
        if site.model().is_referenced(tag) {
            report.info(format!(
                "Tag '{}' still used by other writeups, keeping tag file",
                tag
            ));
            continue;
        }
        if !site.model_mut().remove_tag(tag) {
            continue;
        }
        let tag_path = site.config().tag_document(tag);
        match site.repository().delete_document(&tag_path) {
            Ok(true) => report.done(format!("Deleted unused tag '{}'", tag)),
            Ok(false) => report.warning(format!("{} was already missing", tag_path.display())),
            Err(e) => report.failed(format!("Could not delete {}: {}", tag_path.display(), e)),
        }
    }

    report.merge(refresh_listings(site));
    Ok(report)
}

/// Drop every card linking to `filename` from every tag document.
fn purge_cards(site: &Site, filename: &str, report: &mut OperationReport) {
    let needle = format!("{}/{}\"", site.config().writeups_dir, filename);

    for tag in site.model().tags() {
        let path = site.config().tag_document(tag);
        if !site.repository().document_exists(&path) {
            continue;
        }
        let result = site.repository().read_document(&path).and_then(|content| {
            let (purged, removed) = remove_blocks(&content, &WRITEUP_CARD, &needle);
            if removed > 0 {
                site.repository().write_document(&path, &purged)?;
            }
            Ok(removed)
        });
        match result {
            Ok(0) => {}
            Ok(removed) => report.done(format!(
                "Removed {} card(s) from {}",
                removed,
                path.display()
            )),
            Err(e) => report.failed(format!("Could not update {}: {}", path.display(), e)),
        }
    }
}
