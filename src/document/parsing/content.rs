//! Run content extraction
//!
//! Collects the text leaves, tabs and soft breaks of one run, in document
//! order, and renders the run's markup fragment.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::{RunFragment, TextFormatting};
use super::entities::{escape_html, unescape_entities};
use super::scan::attribute;

// A `<w:t>` leaf is captured verbatim, so leading and trailing spaces survive
// even without `xml:space="preserve"`. The open-tag alternative refuses a
// trailing `/` so an empty `<w:t/>` never swallows the next leaf.
static RUN_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)<w:t(?:\s[^>]*[^/>])?\s*>(?P<text>.*?)</w:t>",
        r"|(?P<tab><w:tab(?:\s[^>]*)?/?>)",
        r"|<w:br(?P<br>\s[^>]*)?/?>",
    ))
    .unwrap()
});

const TEXT_WRAPPING: &str = "textWrapping";
const LINE_BREAK_MARKUP: &str = "<br>";

/// Extract the text of a run block. Returns `None` for runs without text.
pub(crate) fn extract_run_content(run: &str, formatting: TextFormatting) -> Option<RunFragment> {
    let mut text = String::new();
    let mut soft_break = false;

    for caps in RUN_CONTENT.captures_iter(run) {
        if let Some(leaf) = caps.name("text") {
            text.push_str(&unescape_entities(leaf.as_str()));
        } else if caps.name("tab").is_some() {
            text.push('\t');
        } else {
            let attributes = caps.name("br").map_or("", |m| m.as_str());
            match attribute(attributes, "w:type") {
                None | Some(TEXT_WRAPPING) => {
                    text.push('\n');
                    soft_break = true;
                }
                // page and column breaks do not separate lines
                Some(_) => {}
            }
        }
    }

    if text.is_empty() {
        return None;
    }

    Some(RunFragment {
        text,
        formatting,
        soft_break,
    })
}

impl RunFragment {
    /// Escaped run text wrapped as `<strong><em><u>…</u></em></strong>`,
    /// followed by a single `<br>` when the run held a soft break.
    pub(crate) fn render(&self) -> String {
        let mut markup = escape_html(&self.text);
        if self.formatting.underline {
            markup = format!("<u>{markup}</u>");
        }
        if self.formatting.italic {
            markup = format!("<em>{markup}</em>");
        }
        if self.formatting.bold {
            markup = format!("<strong>{markup}</strong>");
        }
        if self.soft_break {
            markup.push_str(LINE_BREAK_MARKUP);
        }
        markup
    }
}
