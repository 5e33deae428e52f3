//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::SiteConfig;
pub use repository::{DocumentEntry, FileSystemRepository, SiteRepository};
