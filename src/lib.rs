//! folio - Static portfolio generator
//!
//! Keeps a site of writeup, tag and project pages consistent. The content
//! model is rebuilt from the HTML documents on every run, and derived listing
//! regions are rewritten in place with marker-anchored splicing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
