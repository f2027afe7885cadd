//! Paragraph and run segmentation and paragraph assembly

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::ParagraphRecord;
use super::content::extract_run_content;
use super::deletion::strip_deletions;
use super::formatting::resolve_run_formatting;
use super::scan::{Blocks, open_tag_pattern};

static PARAGRAPH_OPEN: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:p"));
static RUN_OPEN: Lazy<Regex> = Lazy::new(|| open_tag_pattern("w:r"));
const PARAGRAPH_CLOSE: &str = "</w:p>";
const RUN_CLOSE: &str = "</w:r>";

/// Paragraph blocks of a content stream, in document order.
pub(crate) fn paragraphs(xml: &str) -> impl Iterator<Item = &str> {
    Blocks::new(xml, &PARAGRAPH_OPEN, PARAGRAPH_CLOSE).substrings()
}

/// Run blocks of one paragraph block, in document order.
pub(crate) fn runs(paragraph: &str) -> impl Iterator<Item = &str> {
    Blocks::new(paragraph, &RUN_OPEN, RUN_CLOSE).substrings()
}

/// Build the record for one paragraph block, or `None` if it has no text
/// once trimmed.
pub(crate) fn assemble_paragraph(paragraph: &str) -> Option<ParagraphRecord> {
    let mut text = String::new();
    let mut markup = String::new();

    for run in runs(paragraph) {
        let formatting = resolve_run_formatting(run);
        if let Some(fragment) = extract_run_content(run, formatting) {
            text.push_str(&fragment.text);
            markup.push_str(&fragment.render());
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(ParagraphRecord {
        text: text.to_string(),
        markup,
    })
}

/// Extract every non-empty paragraph from the raw main document part.
///
/// This never fails: blocks that cannot be matched are skipped and an input
/// without paragraphs yields an empty list.
pub fn extract_paragraphs(document_xml: &str) -> Vec<ParagraphRecord> {
    let cleaned = strip_deletions(document_xml);
    let records: Vec<ParagraphRecord> = paragraphs(&cleaned).filter_map(assemble_paragraph).collect();

    log::debug!("extracted {} paragraphs", records.len());
    records
}
