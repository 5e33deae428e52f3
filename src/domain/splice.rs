//! Marker-anchored region splicing.
//!
//! Documents are treated as opaque text. A region is found by its literal start
//! marker (first occurrence) and the first occurrence of its end marker after
//! that; only the text between the two is ever replaced. Nesting is not tracked,
//! so a region's end marker must never occur inside the content rendered into it.

use regex::Regex;
use thiserror::Error;

/// A named, marker-delimited region of a document.
///
/// `lead` and `trail` are the separators written around the inner text, so a
/// spliced region reads `start + lead + inner + trail + end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub lead: &'static str,
    pub trail: &'static str,
}

impl Region {
    /// The region as it appears in a freshly rendered document.
    pub fn enclose(&self, inner: &str) -> String {
        let mut output = String::with_capacity(
            self.start.len() + self.lead.len() + inner.len() + self.trail.len() + self.end.len(),
        );
        output.push_str(self.start);
        output.push_str(self.lead);
        output.push_str(inner);
        output.push_str(self.trail);
        output.push_str(self.end);
        output
    }
}

/// A repeated block that can be purged by the needle it contains.
///
/// A block runs from `begin` to the first match of `close` after the needle.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub name: &'static str,
    pub begin: &'static str,
    pub close: fn() -> &'static Regex,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionNotFound {
    #[error("could not find the start of the {0} region")]
    MissingStart(&'static str),

    #[error("could not find the end of the {0} region")]
    MissingEnd(&'static str),
}

/// Byte range of the text between the start and end markers.
fn locate(document: &str, region: &Region) -> Result<(usize, usize), RegionNotFound> {
    let start = document
        .find(region.start)
        .ok_or(RegionNotFound::MissingStart(region.name))?;
    let inner_start = start + region.start.len();
    let inner_end = document[inner_start..]
        .find(region.end)
        .map(|offset| inner_start + offset)
        .ok_or(RegionNotFound::MissingEnd(region.name))?;
    Ok((inner_start, inner_end))
}

/// Replace the inner text of the first occurrence of `region`.
///
/// Everything before the end of the start marker and everything from the end
/// marker onwards is copied through unchanged.
pub fn splice(document: &str, region: &Region, inner: &str) -> Result<String, RegionNotFound> {
    let (inner_start, inner_end) = locate(document, region)?;

    let mut output = String::with_capacity(
        document.len() - (inner_end - inner_start)
            + region.lead.len()
            + inner.len()
            + region.trail.len(),
    );
    output.push_str(&document[..inner_start]);
    output.push_str(region.lead);
    output.push_str(inner);
    output.push_str(region.trail);
    output.push_str(&document[inner_end..]);

    tracing::debug!(
        region = region.name,
        replaced = inner_end - inner_start,
        inserted = inner.len(),
        "spliced region"
    );
    Ok(output)
}

/// Read back the inner text of the first occurrence of `region`, without separators.
pub fn region_inner<'a>(document: &'a str, region: &Region) -> Result<&'a str, RegionNotFound> {
    let (inner_start, inner_end) = locate(document, region)?;
    let raw = &document[inner_start..inner_end];
    let raw = raw.strip_prefix(region.lead).unwrap_or(raw);
    Ok(raw.strip_suffix(region.trail).unwrap_or(raw))
}

/// Remove every block that contains `needle`, returning the new text and the removal count.
///
/// The needle only counts when it occurs before the next block begins, and the
/// close sequence must also end before it, so neighbouring blocks are never
/// swallowed. Blocks without a close sequence are left as they are.
pub fn remove_blocks(document: &str, block: &Block, needle: &str) -> (String, usize) {
    let close = (block.close)();
    let mut output = String::with_capacity(document.len());
    let mut cursor = 0usize;
    let mut scan = 0usize;
    let mut removed = 0usize;

    while let Some(offset) = document[scan..].find(block.begin) {
        let begin = scan + offset;
        let body = begin + block.begin.len();
        let next_begin = document[body..]
            .find(block.begin)
            .map_or(document.len(), |offset| body + offset);
        scan = body;

        let Some(needle_at) = document[body..next_begin].find(needle) else {
            continue;
        };
        let Some(close_match) = close.find_at(document, body + needle_at + needle.len()) else {
            continue;
        };
        if close_match.end() > next_begin {
            continue;
        }

        output.push_str(&document[cursor..begin]);
        cursor = close_match.end();
        scan = cursor;
        removed += 1;
    }

    output.push_str(&document[cursor..]);

    if removed > 0 {
        tracing::debug!(block = block.name, removed, "removed blocks");
    }
    (output, removed)
}
