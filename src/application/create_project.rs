//! Create project use case

use super::report::OperationReport;
use super::site::Site;
use crate::domain::Project;
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    pub title: String,
    pub description: String,
    pub url: String,
    pub date: Option<String>,
}

/// Append a project to the model.
///
/// Projects only live as cards on the projects listing, so nothing is written
/// until the next listing refresh.
pub fn create_project(site: &mut Site, options: CreateProjectOptions) -> Result<OperationReport> {
    let title = options.title.trim().to_string();
    let url = options.url.trim().to_string();
    if title.is_empty() || url.is_empty() {
        return Err(FolioError::Config(
            "A project needs both a title and a URL".to_string(),
        ));
    }

    let date = options
        .date
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| site.config().today());
    let description = Some(options.description.trim().to_string()).filter(|d| !d.is_empty());

    let mut report = OperationReport::new();
    report.done(format!("Added project '{}' ({})", title, url));
    site.model_mut().push_project(Project {
        title,
        description,
        url,
        date: Some(date),
    });
    Ok(report)
}
