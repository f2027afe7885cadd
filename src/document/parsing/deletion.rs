//! Tracked-change deletion removal
//!
//! `<w:del>` blocks are removed from the whole content stream before it is
//! segmented, so a deletion whose open and close tags sit in different
//! paragraphs is still removed in full.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::scan::{Blocks, open_tag_pattern};

static DELETION_OPEN: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:del"));
const DELETION_CLOSE: &str = "</w:del>";

/// Return `xml` with every well-formed deletion block cut out.
pub(crate) fn strip_deletions(xml: &str) -> Cow<'_, str> {
    let mut deletions = Blocks::new(xml, &DELETION_OPEN, DELETION_CLOSE).peekable();
    if deletions.peek().is_none() {
        return Cow::Borrowed(xml);
    }

    let mut cleaned = String::with_capacity(xml.len());
    let mut kept_from = 0;
    for deletion in deletions {
        cleaned.push_str(&xml[kept_from..deletion.start]);
        kept_from = deletion.end;
    }
    cleaned.push_str(&xml[kept_from..]);

    log::debug!(
        "removed {} bytes of tracked deletions",
        xml.len() - cleaned.len()
    );
    Cow::Owned(cleaned)
}
