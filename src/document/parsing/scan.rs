//! Raw markup scanning primitives
//!
//! The main document part is scanned as a plain character stream instead of
//! being handed to an XML parser: conformant parsers drop whitespace inside
//! `<w:t>` leaves that lack `xml:space="preserve"`, and that whitespace is
//! part of the text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Opening tag of `name`, with or without attributes, including the
/// self-closing form. The name must be followed by whitespace, `/` or `>`,
/// so `w:p` never matches `w:pPr`, `w:r` never matches `w:rPr` and `w:b`
/// never matches `w:bCs`. Group 1 holds the attribute text, if any.
pub(crate) fn open_tag_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"<{}(\s[^>]*)?/?>", regex::escape(name)))
        .expect("tag pattern is valid")
}

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Value of the attribute `name` inside the attribute text of a tag.
pub(crate) fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE.captures_iter(attributes).find_map(|caps| {
        if &caps[1] != name {
            return None;
        }
        caps.get(2).or_else(|| caps.get(3)).map(|value| value.as_str())
    })
}

/// Lazy left-to-right scan for `<tag …>…</tag>` blocks.
///
/// Each item is the byte range of one block, from the start of its opening
/// tag to the end of the first closing tag after it. Self-closing tags are
/// yielded as blocks of their own. The cursor is local to the iterator;
/// scanning a nested level means creating a new `Blocks` over the parent's
/// substring.
pub(crate) struct Blocks<'a> {
    source: &'a str,
    cursor: usize,
    open: &'static Regex,
    close: &'static str,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(source: &'a str, open: &'static Regex, close: &'static str) -> Self {
        Self {
            source,
            cursor: 0,
            open,
            close,
        }
    }

    /// Turn the ranges into the substrings they cover.
    pub(crate) fn substrings(self) -> impl Iterator<Item = &'a str> {
        let source = self.source;
        self.map(move |range| &source[range])
    }
}

impl Iterator for Blocks<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.source.len() {
            return None;
        }

        let open = self.open.find_at(self.source, self.cursor)?;
        if open.as_str().ends_with("/>") {
            self.cursor = open.end();
            return Some(open.range());
        }

        match self.source[open.end()..].find(self.close) {
            Some(offset) => {
                let end = open.end() + offset + self.close.len();
                self.cursor = end;
                Some(open.start()..end)
            }
            None => {
                // Without a closing tag after this point no later block can
                // close either.
                log::trace!(
                    "skipping unclosed {} at byte {}",
                    open.as_str(),
                    open.start()
                );
                self.cursor = self.source.len();
                None
            }
        }
    }
}
