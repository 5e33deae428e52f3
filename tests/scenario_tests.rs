//! End-to-end consistency scenarios driven through the application layer

use folio::application::init::init;
use folio::application::{
    create_project, create_tag, create_writeup, refresh_listings, remove_tag, remove_writeup,
    CreateProjectOptions, CreateTagOptions, CreateWriteupOptions, RemoveTagOptions, Site,
    StepStatus,
};
use folio::domain::extract::extract_writeup;
use folio::error::FolioError;
use folio::infrastructure::FileSystemRepository;
use std::fs;
use tempfile::TempDir;

fn new_site(temp: &TempDir) -> Site {
    init(temp.path(), Some("V01".to_string())).unwrap();
    reopen(temp)
}

/// Rebuild the model from disk, as a fresh invocation would.
fn reopen(temp: &TempDir) -> Site {
    let (site, report) = Site::open(FileSystemRepository::new(temp.path().to_path_buf())).unwrap();
    assert!(report.is_empty());
    site
}

fn writeup(title: &str, tags: &[&str]) -> CreateWriteupOptions {
    CreateWriteupOptions {
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_date: Some("January 05, 2025".to_string()),
        ..CreateWriteupOptions::default()
    }
}

fn read(temp: &TempDir, path: &str) -> String {
    fs::read_to_string(temp.path().join(path)).unwrap()
}

fn assert_consistent(temp: &TempDir, site: &Site) {
    assert!(site.model().dangling_tags().is_empty());
    for w in site.model().writeups() {
        for tag in &w.tags {
            let tag_doc = temp.path().join("tags").join(format!("tag-{}.html", tag));
            assert!(tag_doc.exists(), "missing tag document for '{}'", tag);
        }
    }
}

#[test]
fn scenario_a_writeup_creates_missing_tags() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);

    create_writeup(&mut site, writeup("Machine One", &["linux", "smb"])).unwrap();

    assert!(temp.path().join("tags/tag-linux.html").exists());
    assert!(temp.path().join("tags/tag-smb.html").exists());
    let html = read(&temp, "writeups/writeup-machine-one.html");
    assert!(html.contains("href=\"../tags/tag-linux.html\""));
    assert!(html.contains("href=\"../tags/tag-smb.html\""));
    assert_consistent(&temp, &site);
}

#[test]
fn scenario_b_known_tag_is_reused() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);

    create_tag(
        &mut site,
        CreateTagOptions {
            name: "linux".to_string(),
            ..CreateTagOptions::default()
        },
    )
    .unwrap();
    let report = create_writeup(&mut site, writeup("Machine One", &["linux"])).unwrap();

    assert_eq!(report.count(StepStatus::Done), 1);
    assert_eq!(site.model().tag_count(), 1);
    assert_eq!(site.model().writeups().len(), 1);

    let site = reopen(&temp);
    assert_eq!(site.model().tag_count(), 1);
    assert_eq!(site.model().writeups().len(), 1);
}

#[test]
fn scenario_c_remove_writeup_cascades() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);
    create_writeup(&mut site, writeup("Machine One", &["linux"])).unwrap();
    refresh_listings(&site);
    assert!(read(&temp, "tags/tag-linux.html").contains("writeup-machine-one.html"));

    let mut site = reopen(&temp);
    let report = remove_writeup(&mut site, "Machine One").unwrap();

    assert!(!report.has_failures());
    assert!(!temp.path().join("writeups/writeup-machine-one.html").exists());
    assert!(site.model().writeups().is_empty());
    assert!(!temp.path().join("tags/tag-linux.html").exists());
    assert!(!read(&temp, "writeups.html").contains("writeup-machine-one.html"));
    assert!(!read(&temp, "index.html").contains("writeup-machine-one.html"));
    assert!(!read(&temp, "tags.html").contains("tag-linux.html"));
    assert_consistent(&temp, &site);
}

#[test]
fn scenario_d_partial_tag_removal_keeps_shared_tag() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);
    create_writeup(&mut site, writeup("Machine Two", &["linux", "smb"])).unwrap();
    create_writeup(&mut site, writeup("Machine Three", &["smb"])).unwrap();

    let mut site = reopen(&temp);
    remove_tag(
        &mut site,
        RemoveTagOptions {
            name: "smb".to_string(),
            from_writeup_titles: Some(vec!["Machine Two".to_string()]),
        },
    )
    .unwrap();

    let two = read(&temp, "writeups/writeup-machine-two.html");
    assert_eq!(extract_writeup(&two, "writeup-machine-two.html").tags, vec!["linux"]);
    let three = read(&temp, "writeups/writeup-machine-three.html");
    assert_eq!(extract_writeup(&three, "writeup-machine-three.html").tags, vec!["smb"]);
    assert!(temp.path().join("tags/tag-smb.html").exists());
    assert!(site.model().has_tag("smb"));
    assert_consistent(&temp, &site);
}

#[test]
fn scenario_e_duplicate_writeup_is_rejected() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);
    create_writeup(&mut site, writeup("Box", &["web"])).unwrap();

    match create_writeup(&mut site, writeup("Box", &["web"])) {
        Err(FolioError::WriteupAlreadyExists { title, .. }) => assert_eq!(title, "Box"),
        other => panic!("Expected WriteupAlreadyExists, got {:?}", other.map(|_| ())),
    }
    assert_eq!(site.model().writeups().len(), 1);
    assert_eq!(reopen(&temp).model().writeups().len(), 1);
}

#[test]
fn invariant_holds_across_operation_sequence() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);

    create_writeup(&mut site, writeup("Alpha", &["linux", "web"])).unwrap();
    create_writeup(&mut site, writeup("Bravo", &["web", "smb"])).unwrap();
    create_tag(
        &mut site,
        CreateTagOptions {
            name: "windows".to_string(),
            writeup_titles: vec!["bravo".to_string()],
            ..CreateTagOptions::default()
        },
    )
    .unwrap();
    assert_consistent(&temp, &site);

    remove_tag(
        &mut site,
        RemoveTagOptions {
            name: "web".to_string(),
            from_writeup_titles: None,
        },
    )
    .unwrap();
    assert!(!temp.path().join("tags/tag-web.html").exists());
    assert_consistent(&temp, &site);

    remove_writeup(&mut site, "Alpha").unwrap();
    assert_consistent(&temp, &site);

    let site = reopen(&temp);
    assert_eq!(
        site.model().tags().collect::<Vec<_>>(),
        vec!["smb", "windows"]
    );
    assert_eq!(site.model().writeups()[0].tags, vec!["smb", "windows"]);
    assert_consistent(&temp, &site);
}

fn titles(site: &Site) -> Vec<&str> {
    site.model().writeups().iter().map(|w| w.title.as_str()).collect()
}

#[test]
fn retagging_keeps_writeup_order() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);
    create_writeup(&mut site, writeup("Bravo", &["web"])).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(20));
    create_writeup(&mut site, writeup("Alpha", &["web"])).unwrap();
    assert_eq!(titles(&reopen(&temp)), vec!["Bravo", "Alpha"]);

    let mut site = reopen(&temp);
    std::thread::sleep(std::time::Duration::from_millis(20));
    create_tag(
        &mut site,
        CreateTagOptions {
            name: "linux".to_string(),
            writeup_titles: vec!["Bravo".to_string()],
            ..CreateTagOptions::default()
        },
    )
    .unwrap();
    assert_eq!(titles(&reopen(&temp)), vec!["Bravo", "Alpha"]);

    let mut site = reopen(&temp);
    remove_tag(
        &mut site,
        RemoveTagOptions {
            name: "web".to_string(),
            from_writeup_titles: Some(vec!["Bravo".to_string()]),
        },
    )
    .unwrap();
    let site = reopen(&temp);
    assert_eq!(titles(&site), vec!["Bravo", "Alpha"]);
    assert_eq!(site.model().writeups()[0].tags, vec!["linux"]);
}

#[test]
fn title_with_path_separator_leaves_site_untouched() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);

    assert!(matches!(
        create_writeup(&mut site, writeup("HTB/Sau", &["web"])),
        Err(FolioError::InvalidTitle(_))
    ));

    let site = reopen(&temp);
    assert_eq!(site.model().tag_count(), 0);
    assert!(site.model().writeups().is_empty());
    assert_consistent(&temp, &site);
}

#[test]
fn projects_survive_refresh() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);

    create_project(
        &mut site,
        CreateProjectOptions {
            title: "Port Scanner".to_string(),
            description: "Fast async scanner.".to_string(),
            url: "https://github.com/a/scanner".to_string(),
            date: Some("March 01, 2025".to_string()),
        },
    )
    .unwrap();
    refresh_listings(&site);

    let site = reopen(&temp);
    let projects = site.model().projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].description.as_deref(), Some("Fast async scanner."));

    refresh_listings(&site);
    let again = reopen(&temp);
    assert_eq!(again.model().projects(), projects);
}

#[test]
fn refresh_leaves_hand_written_markup_alone() {
    let temp = TempDir::new().unwrap();
    let mut site = new_site(&temp);
    let home = read(&temp, "index.html").replace(
        "<main class=\"my-4\">",
        "<main class=\"my-4\">\n<p class=\"intro\">Hello there</p>",
    );
    fs::write(temp.path().join("index.html"), &home).unwrap();

    create_writeup(&mut site, writeup("Machine One", &["linux"])).unwrap();
    refresh_listings(&site);

    let refreshed = read(&temp, "index.html");
    assert!(refreshed.contains("<p class=\"intro\">Hello there</p>"));
    assert!(refreshed.contains("writeup-machine-one.html"));
}
