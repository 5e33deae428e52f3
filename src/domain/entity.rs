//! Content entities and the naming rules that tie them to filenames

use crate::error::{FolioError, Result};

const TAG_PREFIX: &str = "tag-";
const WRITEUP_PREFIX: &str = "writeup-";
const DOCUMENT_SUFFIX: &str = ".html";

/// A labeled category attachable to writeups, backed by one tag document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Tag {
            name: name.into(),
            description,
        }
    }
}

/// A writeup document and the metadata recovered from (or rendered into) it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writeup {
    pub title: String,
    pub filename: String,
    pub created: String,
    pub updated: String,
    pub photo: Option<String>,
    pub tags: Vec<String>,
    pub difficulty: Option<String>,
    pub os: Option<String>,
    pub ip: Option<String>,
}

impl Writeup {
    /// Create a writeup with the filename derived from its title and no metadata.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Writeup {
            filename: writeup_filename(&title),
            title,
            created: String::new(),
            updated: String::new(),
            photo: None,
            tags: Vec::new(),
            difficulty: None,
            os: None,
            ip: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// An external project shown on the projects listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub date: Option<String>,
}

/// Derive the writeup filename from a title.
///
/// Lower-cases, turns spaces into hyphens and drops colons and periods:
/// `"Machine One: Part 2."` becomes `writeup-machine-one-part-2.html`.
pub fn writeup_filename(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(|ch| *ch != ':' && *ch != '.')
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .collect();
    format!("{}{}{}", WRITEUP_PREFIX, slug, DOCUMENT_SUFFIX)
}

/// Check that a writeup title yields a filename directly inside the writeups directory.
pub fn validate_writeup_title(title: &str) -> Result<()> {
    if title.trim().is_empty() || title.contains(['/', '\\']) {
        return Err(FolioError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

/// Filename of the document backing a tag.
pub fn tag_filename(name: &str) -> String {
    format!("{}{}{}", TAG_PREFIX, name, DOCUMENT_SUFFIX)
}

/// Recover a tag name from a tag document filename.
pub fn tag_name_from_filename(filename: &str) -> Option<&str> {
    filename
        .strip_prefix(TAG_PREFIX)?
        .strip_suffix(DOCUMENT_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Whether a filename looks like a writeup document.
pub fn is_writeup_filename(filename: &str) -> bool {
    filename.len() > WRITEUP_PREFIX.len() + DOCUMENT_SUFFIX.len()
        && filename.starts_with(WRITEUP_PREFIX)
        && filename.ends_with(DOCUMENT_SUFFIX)
}

/// Reconstruct a display title from a writeup filename when the document has no heading.
pub fn title_from_filename(filename: &str) -> String {
    let slug = filename.strip_prefix(WRITEUP_PREFIX).unwrap_or(filename);
    let slug = slug.strip_suffix(DOCUMENT_SUFFIX).unwrap_or(slug);
    title_case(&slug.replace('-', " "))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            output.push(ch);
            previous_alphabetic = false;
        }
    }
    output
}

/// Normalize a caller-supplied tag name (`#Linux` -> `linux`).
pub fn normalize_tag(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let tag = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if tag.is_empty() {
        return Err(FolioError::InvalidTag(input.to_string()));
    }

    if !tag
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
    {
        return Err(FolioError::InvalidTag(input.to_string()));
    }

    Ok(tag.to_ascii_lowercase())
}

/// Normalize a list of tag names, dropping duplicates but keeping first-seen order.
pub fn normalize_tags(inputs: &[String]) -> Result<Vec<String>> {
    let mut tags: Vec<String> = Vec::with_capacity(inputs.len());
    for input in inputs {
        let tag = normalize_tag(input)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}
