//! Regions and blocks that folio rewrites inside its documents.
//!
//! The renderer emits every region through [`Region::enclose`] with these same
//! constants, so the marker pairs below are the only copy of the contract
//! between rendered pages and the splice engine.

use super::splice::{Block, Region};
use regex::Regex;
use std::sync::OnceLock;

/// Closes every listing region; it sits right before `</main>`.
const LISTING_END: &str = "</div>\n\n                </main>";

/// Tag links inside a writeup document.
pub const WRITEUP_TAGS: Region = Region {
    name: "writeup tags",
    start: "<div class=\"tag-container mb-4\">",
    end: "</div>",
    lead: "\n                                        ",
    trail: "\n                                    ",
};

/// Member cards on a tag document.
pub const TAG_MEMBERS: Region = Region {
    name: "tag members",
    start: "<div class=\"row\" id=\"writeupsContainer\">",
    end: LISTING_END,
    lead: "\n",
    trail: "\n",
};

/// Cards on the global writeups page.
pub const WRITEUPS_LISTING: Region = Region {
    name: "writeups listing",
    start: "<div class=\"row\" id=\"writeupsContainer\">",
    end: LISTING_END,
    lead: "\n",
    trail: "\n",
};

/// Cards on the global tags page.
pub const TAGS_LISTING: Region = Region {
    name: "tags listing",
    start: "<div class=\"row\" id=\"tagsContainer\">",
    end: LISTING_END,
    lead: "\n",
    trail: "\n",
};

/// Cards on the projects page.
pub const PROJECTS_LISTING: Region = Region {
    name: "projects listing",
    start: "<div class=\"mb-4\">\n    <h2><i class=\"fas fa-code me-2\"></i>Projects</h2>\n</div>\n\n<div class=\"row\">",
    end: LISTING_END,
    lead: "\n",
    trail: "\n",
};

/// Cards under "Recent Posts" on the home page.
pub const RECENT_POSTS: Region = Region {
    name: "recent posts",
    start: "<div class=\"mb-4\">\n    <h2><i class=\"fas fa-clock me-2\"></i>Recent Posts</h2>\n</div>\n\n<div class=\"row\">",
    end: LISTING_END,
    lead: "\n",
    trail: "\n",
};

fn writeup_card_close() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"</div>\s*</div>\s*</div>\s*</div>").unwrap())
}

/// A writeup card as rendered on tag documents.
///
/// After the card's link, the first run of four closing `</div>` tags is the
/// thumbnail, card body, card and column closing together.
pub const WRITEUP_CARD: Block = Block {
    name: "writeup card",
    begin: "<div class=\"col-lg-6 col-xl-4 mb-4 writeup-card\"",
    close: writeup_card_close,
};

/// The singleton listing documents at the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPage {
    Home,
    Writeups,
    Tags,
    Projects,
}

impl ListingPage {
    pub const ALL: [ListingPage; 4] = [
        ListingPage::Home,
        ListingPage::Writeups,
        ListingPage::Tags,
        ListingPage::Projects,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            ListingPage::Home => "index.html",
            ListingPage::Writeups => "writeups.html",
            ListingPage::Tags => "tags.html",
            ListingPage::Projects => "projects.html",
        }
    }

    pub fn region(&self) -> &'static Region {
        match self {
            ListingPage::Home => &RECENT_POSTS,
            ListingPage::Writeups => &WRITEUPS_LISTING,
            ListingPage::Tags => &TAGS_LISTING,
            ListingPage::Projects => &PROJECTS_LISTING,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListingPage::Home => "Home",
            ListingPage::Writeups => "Writeups",
            ListingPage::Tags => "Tags",
            ListingPage::Projects => "Projects",
        }
    }
}
