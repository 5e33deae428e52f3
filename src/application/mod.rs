//! Application layer - Use cases and orchestration

pub mod create_project;
pub mod create_tag;
pub mod create_writeup;
pub mod init;
pub mod manage_config;
pub mod refresh;
pub mod remove_tag;
pub mod remove_writeup;
pub mod report;
pub mod site;

pub use create_project::{create_project, CreateProjectOptions};
pub use create_tag::{create_tag, CreateTagOptions};
pub use create_writeup::{create_writeup, CreateWriteupOptions};
pub use manage_config::ConfigService;
pub use refresh::refresh_listings;
pub use remove_tag::{remove_tag, RemoveTagOptions};
pub use remove_writeup::remove_writeup;
pub use report::{OperationReport, StepOutcome, StepStatus};
pub use site::Site;
