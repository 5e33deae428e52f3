//! In-memory content model rebuilt from the site documents on every run

use super::entity::{Project, Writeup};
use std::collections::BTreeSet;

/// Tags, writeups and projects of one site, plus the writeup <-> tag relation.
///
/// Writeups keep creation order (oldest first). Titles are not unique: every
/// title lookup is case-insensitive and resolves to the first writeup in that
/// order, so a later writeup with the same title is unreachable by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentModel {
    tags: BTreeSet<String>,
    writeups: Vec<Writeup>,
    projects: Vec<Project>,
}

impl ContentModel {
    pub fn new(tags: BTreeSet<String>, writeups: Vec<Writeup>, projects: Vec<Project>) -> Self {
        ContentModel {
            tags,
            writeups,
            projects,
        }
    }

    /// Tag names in lexicographic order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Returns false if the tag was already known.
    pub fn insert_tag(&mut self, name: &str) -> bool {
        self.tags.insert(name.to_string())
    }

    pub fn remove_tag(&mut self, name: &str) -> bool {
        self.tags.remove(name)
    }

    /// Writeups in creation order.
    pub fn writeups(&self) -> &[Writeup] {
        &self.writeups
    }

    pub fn writeup(&self, index: usize) -> Option<&Writeup> {
        self.writeups.get(index)
    }

    /// Index of the first writeup whose title matches, ignoring case.
    pub fn find_writeup(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        self.writeups
            .iter()
            .position(|w| w.title.to_lowercase() == wanted)
    }

    pub fn find_writeup_by_filename(&self, filename: &str) -> Option<usize> {
        self.writeups.iter().position(|w| w.filename == filename)
    }

    /// Append a writeup as the newest one.
    pub fn push_writeup(&mut self, writeup: Writeup) {
        self.writeups.push(writeup);
    }

    pub fn remove_writeup(&mut self, index: usize) -> Option<Writeup> {
        if index < self.writeups.len() {
            Some(self.writeups.remove(index))
        } else {
            None
        }
    }

    /// Add a tag to a writeup; returns false if it already carried it.
    pub fn attach_tag(&mut self, index: usize, tag: &str) -> bool {
        match self.writeups.get_mut(index) {
            Some(writeup) if !writeup.has_tag(tag) => {
                writeup.tags.push(tag.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a tag from a writeup; returns false if it did not carry it.
    pub fn detach_tag(&mut self, index: usize, tag: &str) -> bool {
        match self.writeups.get_mut(index) {
            Some(writeup) if writeup.has_tag(tag) => {
                writeup.tags.retain(|t| t != tag);
                true
            }
            _ => false,
        }
    }

    /// Writeups carrying `tag`, in model order.
    pub fn writeups_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Writeup> + 'a {
        self.writeups.iter().filter(move |w| w.has_tag(tag))
    }

    /// Indices of writeups carrying `tag`, in model order.
    pub fn writeup_indices_tagged(&self, tag: &str) -> Vec<usize> {
        self.writeups
            .iter()
            .enumerate()
            .filter(|(_, w)| w.has_tag(tag))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_referenced(&self, tag: &str) -> bool {
        self.writeups.iter().any(|w| w.has_tag(tag))
    }

    /// Tags referenced by some writeup but missing from the tag set.
    pub fn dangling_tags(&self) -> BTreeSet<&str> {
        self.writeups
            .iter()
            .flat_map(|w| w.tags.iter())
            .map(String::as_str)
            .filter(|tag| !self.tags.contains(*tag))
            .collect()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn push_project(&mut self, project: Project) {
        self.projects.push(project);
    }
}
