//! Domain layer - Content model, extraction and document rewriting

pub mod entity;
pub mod extract;
pub mod model;
pub mod regions;
pub mod splice;
pub mod template;

pub use entity::{Project, Tag, Writeup};
pub use model::ContentModel;
pub use regions::ListingPage;
pub use template::{CardPlacement, HtmlRenderer};
