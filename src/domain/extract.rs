//! Entity extraction from existing documents
//!
//! Every field is recovered by an independent pattern search, so a document
//! that lacks one field still yields the others.

use super::entity::{title_from_filename, Project, Writeup};
use super::regions::PROJECTS_LISTING;
use super::splice::region_inner;
use regex::Regex;
use std::sync::OnceLock;

fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<h1[^>]*>([^<]+)</h1>").unwrap())
}

fn created_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Created:\s*([^<\n]+)").unwrap())
}

fn updated_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Updated:\s*([^<\n]+)").unwrap())
}

fn photo_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"<img[^>]*src="([^"]*)"[^>]*alt="Machine Photo""#).unwrap())
}

fn tag_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"href="[^"]*tag-([^"/]+)\.html""#).unwrap())
}

fn difficulty_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\bDifficulty:\s*([^<]+)").unwrap())
}

fn os_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\bOS:\s*([^<]+)").unwrap())
}

fn ip_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\bIP:\s*([^<]+)").unwrap())
}

fn project_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"<h5[^>]*>\s*<a[^>]*href="([^"]*)"[^>]*>\s*([^<]+?)\s*</a>"#).unwrap()
    })
}

fn project_excerpt_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"(?s)<p class="card-text project-excerpt[^"]*">\s*(.*?)\s*</p>"#).unwrap()
    })
}

fn project_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"fa-calendar[^"]*"></i>([^<\n]*)"#).unwrap())
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Rebuild a writeup from its document text.
pub fn extract_writeup(content: &str, filename: &str) -> Writeup {
    let title =
        first_capture(title_regex(), content).unwrap_or_else(|| title_from_filename(filename));

    let mut tags: Vec<String> = Vec::new();
    for caps in tag_link_regex().captures_iter(content) {
        let tag = &caps[1];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    Writeup {
        title,
        filename: filename.to_string(),
        created: first_capture(created_regex(), content).unwrap_or_default(),
        updated: first_capture(updated_regex(), content).unwrap_or_default(),
        photo: first_capture(photo_regex(), content),
        tags,
        difficulty: first_capture(difficulty_regex(), content),
        os: first_capture(os_regex(), content),
        ip: first_capture(ip_regex(), content),
    }
}

/// Best-effort recovery of projects from the projects listing document.
///
/// Title and URL come from the heading link of each card. The description and
/// date are taken from the same card when it carries them.
pub fn extract_projects(content: &str) -> Vec<Project> {
    let scope = region_inner(content, &PROJECTS_LISTING).unwrap_or(content);
    let links: Vec<_> = project_link_regex().captures_iter(scope).collect();

    links
        .iter()
        .enumerate()
        .map(|(index, caps)| {
            let card_start = caps.get(0).map_or(0, |m| m.end());
            let card_end = links
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map_or(scope.len(), |m| m.start());
            let card = &scope[card_start..card_end];

            Project {
                title: caps[2].trim().to_string(),
                description: first_capture(project_excerpt_regex(), card),
                url: caps[1].to_string(),
                date: first_capture(project_date_regex(), card),
            }
        })
        .collect()
}
