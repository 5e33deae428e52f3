//! HTML rendering of documents and listing fragments
//!
//! Templates use `{NAME}` placeholders filled in a single pass, so values that
//! happen to contain braces are never expanded again. Regions are always
//! emitted through the shared constants in [`super::regions`].

use super::entity::{tag_filename, Project, Tag, Writeup};
use super::regions::{ListingPage, TAG_MEMBERS, WRITEUP_TAGS};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE} - {SITE_NAME}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css" rel="stylesheet">
    <link href="{ROOT}assets/css/style.css" rel="stylesheet">
</head>
<body>
    <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
        <div class="container">
            <a class="navbar-brand" href="{ROOT}index.html">{SITE_NAME}</a>
            <ul class="navbar-nav ms-auto">
                <li class="nav-item"><a class="nav-link" href="{ROOT}index.html"><i class="fas fa-home me-1"></i>Home</a></li>
                <li class="nav-item"><a class="nav-link" href="{ROOT}writeups.html"><i class="fas fa-file-alt me-1"></i>Writeups</a></li>
                <li class="nav-item"><a class="nav-link" href="{ROOT}projects.html"><i class="fas fa-code me-1"></i>Projects</a></li>
                <li class="nav-item"><a class="nav-link" href="{ROOT}tags.html"><i class="fas fa-tags me-1"></i>Tags</a></li>
            </ul>
        </div>
    </nav>

    <div class="container-fluid">
        <div class="row">
            <div class="col-md-9 col-lg-10 main-content">
                <main class="my-4">
{MAIN}
            </div>
        </div>
    </div>

    <footer class="bg-dark text-light py-3 mt-5">
        <div class="container">
            <p class="mb-0">&copy; {SITE_NAME}</p>
        </div>
    </footer>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"></script>
{SCRIPTS}    <script src="{ROOT}assets/js/script.js"></script>
</body>
</html>
"#;

const WRITEUP_MAIN: &str = r#"                    <div class="card border-0 shadow-sm">
                        <div class="card-body">
                            <div class="d-flex align-items-start gap-4">
                                <div class="flex-grow-1">
                                    <h1 class="card-title mb-3">{TITLE}</h1>

                                    <div class="mb-3">
                                        <small class="text-muted">
                                            <i class="fas fa-calendar me-1"></i>Created: {CREATED}
                                            <br><i class="fas fa-edit me-1"></i>Updated: {UPDATED}
                                        </small>
                                    </div>

                                    {TAG_REGION}
{MACHINE_INFO}                                </div>
{PHOTO}                            </div>

                            <div id="markdown-content" class="markdown-content" style="display: none;">
# Overview

Add your writeup content here using **markdown** syntax!

## Reconnaissance

## Exploitation

## Privilege Escalation

## Conclusion
                            </div>
                        </div>
                    </div>
                </main>"#;

const WRITEUP_SCRIPTS: &str = r#"    <script src="https://cdn.jsdelivr.net/npm/marked/marked.min.js"></script>
    <script>
        document.addEventListener('DOMContentLoaded', function() {
            const container = document.getElementById('markdown-content');
            if (container) {
                container.innerHTML = marked.parse(container.textContent);
                container.style.display = 'block';
            }
        });
    </script>
"#;

const MACHINE_INFO: &str = r#"
                                    <div class="machine-info mb-3">
                                        <h6 class="text-muted mb-2"><i class="fas fa-server me-1"></i>Machine Information:</h6>
                                        <div class="d-flex flex-wrap">
                                            {BADGES}
                                        </div>
                                    </div>
"#;

const PHOTO: &str = r#"
                                <div class="d-none d-md-block"><img src="{PHOTO}" alt="Machine Photo" class="img-fluid rounded" style="max-width: 300px; height: auto;"></div>
"#;

const TAG_MAIN: &str = r#"                    <div class="mb-4">
                        <h2><i class="fas fa-tag me-2"></i>Tag: {NAME}</h2>
{DESCRIPTION}                    </div>

                    {MEMBERS}"#;

const WRITEUP_CARD: &str = r#"    <div class="{COLUMN} writeup-card" data-category="">
        <div class="card h-100 border-0 shadow-sm">
            <div class="card-body d-flex align-items-start gap-3">
                <div class="flex-grow-1">
                    <h5 class="card-title mb-2 writeup-title">
                        <a href="{WRITEUPS}{FILENAME}" class="text-decoration-none">
                            {TITLE}
                        </a>
                    </h5>
                    <p class="card-text project-excerpt mb-2">
                        {TITLE} This writeup documents the discovery and analysis...
                    </p>
                    <small class="project-date mb-2">
                        <i class="fas fa-calendar me-1"></i>{CREATED}
                    </small>
                    <div class="tag-container">
                        {TAG_LINKS}
                    </div>
                </div>
                <div class="d-none d-md-block">
                    <img src="{THUMB}" alt="Writeup image" class="writeup-thumb" />
                </div>
            </div>
        </div>
    </div>"#;

const TAG_CARD: &str = r#"    <div class="col-auto mb-2 tag-card" data-category="">
        <a href="{TAGS}{FILENAME}" class="tag-badge">{NAME}</a>
    </div>"#;

const PROJECT_CARD: &str = r#"    <div class="col-lg-6 col-xl-4 mb-4 project-card" data-category="">
        <div class="card h-100 border-0 shadow-sm">
            <div class="card-body">
                <h5 class="card-title mb-2">
                    <a href="{URL}" target="_blank" class="text-decoration-none">
                        {TITLE}
                    </a>
                </h5>
                <p class="card-text project-excerpt mb-2">
                    {DESCRIPTION}
                </p>
                <small class="project-date">
                    <i class="fas fa-calendar me-1"></i>{DATE}
                </small>
            </div>
        </div>
    </div>"#;

const PLACEHOLDER_THUMB: &str = "assets/img/writeup-placeholder.png";

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Z_]+)\}").unwrap())
}

/// Fill `{NAME}` placeholders; unknown placeholders are left as they are.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            vars.iter()
                .find(|(key, _)| *key == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}

/// Where a writeup card is placed; decides link prefixes and column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPlacement {
    /// A listing document at the site root.
    SiteRoot,
    /// The recent posts column on the home page.
    Home,
    /// A tag document inside the tags directory.
    TagPage,
}

impl CardPlacement {
    fn column(&self) -> &'static str {
        match self {
            CardPlacement::Home => "col-12 mb-4",
            CardPlacement::SiteRoot | CardPlacement::TagPage => "col-lg-6 col-xl-4 mb-4",
        }
    }

    fn root(&self) -> &'static str {
        match self {
            CardPlacement::TagPage => "../",
            CardPlacement::SiteRoot | CardPlacement::Home => "",
        }
    }
}

/// Renders folio's documents and fragments for one site.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    site_name: String,
    tags_dir: String,
    writeups_dir: String,
}

impl HtmlRenderer {
    pub fn new(
        site_name: impl Into<String>,
        tags_dir: impl Into<String>,
        writeups_dir: impl Into<String>,
    ) -> Self {
        HtmlRenderer {
            site_name: site_name.into(),
            tags_dir: tags_dir.into(),
            writeups_dir: writeups_dir.into(),
        }
    }

    fn page(&self, title: &str, root: &str, main: &str, scripts: &str) -> String {
        fill(
            PAGE_TEMPLATE,
            &[
                ("PAGE_TITLE", title),
                ("SITE_NAME", &self.site_name),
                ("ROOT", root),
                ("MAIN", main),
                ("SCRIPTS", scripts),
            ],
        )
    }

    /// Tag links as written into a region, one per line.
    pub fn tag_links(&self, tags: &[String], prefix: &str) -> String {
        tags.iter()
            .map(|tag| {
                format!(
                    "<a href=\"{}{}\" class=\"tag-badge me-1\">{}</a>",
                    prefix,
                    tag_filename(tag),
                    tag
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Inner text of a writeup document's tag region.
    pub fn writeup_tag_region(&self, tags: &[String]) -> String {
        self.tag_links(tags, &format!("../{}/", self.tags_dir))
    }

    pub fn tag_document(&self, tag: &Tag) -> String {
        let description = match tag.description.as_deref() {
            Some(text) if !text.trim().is_empty() => format!(
                "                        <p class=\"text-muted\">{}</p>\n",
                text.trim()
            ),
            _ => String::new(),
        };
        let members = TAG_MEMBERS.enclose("");
        let main = fill(
            TAG_MAIN,
            &[
                ("NAME", &tag.name),
                ("DESCRIPTION", &description),
                ("MEMBERS", &members),
            ],
        );
        self.page(&format!("Tag: {}", tag.name), "../", &main, "")
    }

    pub fn writeup_document(&self, writeup: &Writeup) -> String {
        let badges: Vec<String> = [
            ("bg-primary", "fa-star", "Difficulty", &writeup.difficulty),
            ("bg-info", "fa-desktop", "OS", &writeup.os),
            ("bg-secondary", "fa-network-wired", "IP", &writeup.ip),
        ]
        .iter()
        .filter_map(|(color, icon, label, value)| {
            value.as_deref().filter(|v| !v.is_empty()).map(|v| {
                format!(
                    "<span class=\"badge {} me-2\"><i class=\"fas {} me-1\"></i>{}: {}</span>",
                    color, icon, label, v
                )
            })
        })
        .collect();

        let machine_info = if badges.is_empty() {
            String::new()
        } else {
            fill(MACHINE_INFO, &[("BADGES", &badges.join(""))])
        };

        let photo = match writeup.photo.as_deref() {
            Some(url) if !url.is_empty() => fill(PHOTO, &[("PHOTO", url)]),
            _ => String::new(),
        };

        let tag_region = WRITEUP_TAGS.enclose(&self.writeup_tag_region(&writeup.tags));
        let main = fill(
            WRITEUP_MAIN,
            &[
                ("TITLE", &writeup.title),
                ("CREATED", &writeup.created),
                ("UPDATED", &writeup.updated),
                ("TAG_REGION", &tag_region),
                ("MACHINE_INFO", &machine_info),
                ("PHOTO", &photo),
            ],
        );
        self.page(&writeup.title, "../", &main, WRITEUP_SCRIPTS)
    }

    /// A singleton listing document with its region present and empty.
    pub fn listing_document(&self, page: ListingPage) -> String {
        self.page(page.title(), "", &page.region().enclose(""), "")
    }

    pub fn writeup_card(&self, writeup: &Writeup, placement: CardPlacement) -> String {
        let writeups = format!("{}{}/", placement.root(), self.writeups_dir);
        let tags_prefix = match placement {
            CardPlacement::TagPage => String::new(),
            CardPlacement::SiteRoot | CardPlacement::Home => format!("{}/", self.tags_dir),
        };
        let thumb = match writeup.photo.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{}{}", placement.root(), PLACEHOLDER_THUMB),
        };
        fill(
            WRITEUP_CARD,
            &[
                ("COLUMN", placement.column()),
                ("WRITEUPS", &writeups),
                ("FILENAME", &writeup.filename),
                ("TITLE", &writeup.title),
                ("CREATED", &writeup.created),
                ("TAG_LINKS", &self.tag_links(&writeup.tags, &tags_prefix)),
                ("THUMB", &thumb),
            ],
        )
    }

    pub fn tag_card(&self, name: &str) -> String {
        fill(
            TAG_CARD,
            &[
                ("TAGS", &format!("{}/", self.tags_dir)),
                ("FILENAME", &tag_filename(name)),
                ("NAME", name),
            ],
        )
    }

    pub fn project_card(&self, project: &Project) -> String {
        fill(
            PROJECT_CARD,
            &[
                ("URL", &project.url),
                ("TITLE", &project.title),
                ("DESCRIPTION", project.description.as_deref().unwrap_or("")),
                ("DATE", project.date.as_deref().unwrap_or("")),
            ],
        )
    }
}
