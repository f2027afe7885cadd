//! Core data structures for document representation
//!
//! This module defines the public types produced by the extraction engine
//! and the loader: paragraph records, run formatting, document metadata and
//! search results.

use serde::{Deserialize, Serialize};

/// One extracted paragraph.
///
/// `text` is the trimmed plain text of every run, with tabs as `\t` and soft
/// breaks as `\n`. `markup` carries the same content HTML-escaped, with each
/// run wrapped in its own `<strong>`/`<em>`/`<u>` tags. It is not trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub text: String,
    pub markup: String,
}

/// Direct run formatting read from a run's property sub-block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Content of a single run, consumed by the paragraph assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunFragment {
    pub(crate) text: String,
    pub(crate) formatting: TextFormatting,
    pub(crate) soft_break: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub paragraphs: Vec<ParagraphRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub paragraph_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub paragraph_index: usize,
    pub text: String,
    pub start_pos: usize,
    pub end_pos: usize,
}
