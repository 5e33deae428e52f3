//! Initialize site use case

use super::report::OperationReport;
use crate::domain::ListingPage;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new site at the specified path.
///
/// Listing documents that already exist are kept as they are.
pub fn init(path: &Path, site_name: Option<String>) -> Result<OperationReport> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = match site_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
        Some(name) => SiteConfig::new(name),
        None => SiteConfig::new("Portfolio"),
    };
    repo.save_config(&config)?;

    let mut report = OperationReport::new();
    report.done(format!(
        "Initialized folio site '{}' at {}",
        config.site_name,
        path.display()
    ));

    repo.create_dir_all(Path::new(&config.tags_dir))?;
    repo.create_dir_all(Path::new(&config.writeups_dir))?;

    let renderer = config.renderer();
    for page in ListingPage::ALL {
        let page_path = Path::new(page.filename());
        if repo.document_exists(page_path) {
            report.info(format!("Kept existing {}", page.filename()));
            continue;
        }
        repo.write_document(page_path, &renderer.listing_document(page))?;
        report.done(format!("Created {}", page.filename()));
    }

    Ok(report)
}
