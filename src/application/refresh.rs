//! Listing refresh use case

use super::report::OperationReport;
use super::site::Site;
use crate::domain::regions::TAG_MEMBERS;
use crate::domain::splice::Region;
use crate::domain::{CardPlacement, ListingPage};
use std::path::Path;

/// Regenerate every listing region from the current model.
///
/// Each document is spliced on its own; a missing document or region is
/// recorded and the remaining documents are still refreshed.
pub fn refresh_listings(site: &Site) -> OperationReport {
    let mut report = OperationReport::new();
    let model = site.model();
    let renderer = site.renderer();

    for page in [
        ListingPage::Writeups,
        ListingPage::Tags,
        ListingPage::Projects,
        ListingPage::Home,
    ] {
        let cards: Vec<String> = match page {
            ListingPage::Writeups => model
                .writeups()
                .iter()
                .map(|w| renderer.writeup_card(w, CardPlacement::SiteRoot))
                .collect(),
            ListingPage::Tags => model.tags().map(|t| renderer.tag_card(t)).collect(),
            ListingPage::Projects => model
                .projects()
                .iter()
                .map(|p| renderer.project_card(p))
                .collect(),
            ListingPage::Home => model
                .writeups()
                .iter()
                .rev()
                .take(site.config().recent_posts_limit.unwrap_or(usize::MAX))
                .map(|w| renderer.writeup_card(w, CardPlacement::Home))
                .collect(),
        };
        refresh_document(site, Path::new(page.filename()), page.region(), &cards, &mut report);
    }

    for tag in model.tags() {
        let cards: Vec<String> = model
            .writeups_tagged(tag)
            .map(|w| renderer.writeup_card(w, CardPlacement::TagPage))
            .collect();
        let path = site.config().tag_document(tag);
        refresh_document(site, &path, &TAG_MEMBERS, &cards, &mut report);
    }

    report
}

fn refresh_document(
    site: &Site,
    path: &Path,
    region: &Region,
    cards: &[String],
    report: &mut OperationReport,
) {
    if !site.repository().document_exists(path) {
        report.warning(format!("{} not found, skipping", path.display()));
        return;
    }
    match site.splice_document(path, region, &cards.join("\n")) {
        Ok(()) => report.done(format!("Updated {} ({} entries)", path.display(), cards.len())),
        Err(e) => report.failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_writeup::{create_writeup, CreateWriteupOptions};
    use crate::application::report::StepStatus;
    use crate::domain::splice::region_inner;
    use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
    use std::fs;
    use tempfile::TempDir;

    fn open_site(temp: &TempDir, config: SiteConfig) -> Site {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let renderer = config.renderer();
        repo.save_config(&config).unwrap();
        for page in ListingPage::ALL {
            fs::write(temp.path().join(page.filename()), renderer.listing_document(page)).unwrap();
        }
        Site::open(repo).unwrap().0
    }

    fn add(site: &mut Site, title: &str, tags: &[&str]) {
        let options = CreateWriteupOptions {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_date: Some("January 05, 2025".to_string()),
            ..CreateWriteupOptions::default()
        };
        create_writeup(site, options).unwrap();
    }

    fn read(temp: &TempDir, name: &str) -> String {
        fs::read_to_string(temp.path().join(name)).unwrap()
    }

    #[test]
    fn listings_follow_model_order() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, SiteConfig::new("V01"));
        add(&mut site, "Alpha", &["web"]);
        add(&mut site, "Bravo", &["linux", "web"]);

        let report = refresh_listings(&site);
        assert!(!report.has_failures());
        assert_eq!(report.count(StepStatus::Done), 6);

        let writeups = read(&temp, "writeups.html");
        assert!(writeups.find("writeup-alpha.html") < writeups.find("writeup-bravo.html"));

        let home = read(&temp, "index.html");
        assert!(home.find("writeup-bravo.html") < home.find("writeup-alpha.html"));

        let tags = read(&temp, "tags.html");
        assert!(tags.find("tag-linux.html").unwrap() < tags.find("tag-web.html").unwrap());

        let linux = read(&temp, "tags/tag-linux.html");
        assert!(linux.contains("../writeups/writeup-bravo.html"));
        assert!(!linux.contains("writeup-alpha.html"));
    }

    #[test]
    fn refresh_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, SiteConfig::new("V01"));
        add(&mut site, "Alpha", &["web"]);

        refresh_listings(&site);
        let first = read(&temp, "index.html");
        let first_tag = read(&temp, "tags/tag-web.html");
        refresh_listings(&site);
        assert_eq!(read(&temp, "index.html"), first);
        assert_eq!(read(&temp, "tags/tag-web.html"), first_tag);
    }

    #[test]
    fn recent_posts_limit_caps_home_page() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::new("V01");
        config.recent_posts_limit = Some(1);
        let mut site = open_site(&temp, config);
        add(&mut site, "Alpha", &[]);
        add(&mut site, "Bravo", &[]);

        refresh_listings(&site);

        let home = read(&temp, "index.html");
        let region = region_inner(&home, ListingPage::Home.region()).unwrap();
        assert!(region.contains("writeup-bravo.html"));
        assert!(!region.contains("writeup-alpha.html"));
    }

    #[test]
    fn broken_document_does_not_stop_the_others() {
        let temp = TempDir::new().unwrap();
        let mut site = open_site(&temp, SiteConfig::new("V01"));
        add(&mut site, "Alpha", &[]);
        fs::write(temp.path().join("tags.html"), "<html>edited by hand</html>").unwrap();
        fs::remove_file(temp.path().join("projects.html")).unwrap();

        let report = refresh_listings(&site);

        assert_eq!(report.messages(StepStatus::Warning), vec!["projects.html not found, skipping"]);
        assert_eq!(
            report.messages(StepStatus::Failed),
            vec!["tags.html: could not find the start of the tags listing region"]
        );
        assert!(read(&temp, "writeups.html").contains("writeup-alpha.html"));
        assert!(read(&temp, "index.html").contains("writeup-alpha.html"));
    }
}
