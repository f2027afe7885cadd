//! Document loading and orchestration
//!
//! This module contains `load_document()`, which validates a .docx file,
//! reads its main document part and runs the extraction pipeline over it.

use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

use super::io::{read_main_document, validate_docx_file};
use super::models::*;
use super::parsing::extract_paragraphs;
use crate::error::Result;

/// Main document loading function
///
/// Only a missing or unreadable main part is an error. A readable part that
/// holds no paragraphs produces a document with no paragraphs.
pub fn load_document(file_path: &Path) -> Result<Document> {
    validate_docx_file(file_path)?;

    let file_size = std::fs::metadata(file_path)?.len();
    let document_xml = read_main_document(file_path)?;
    let paragraphs = extract_paragraphs(&document_xml);

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let word_count = paragraphs
        .iter()
        .map(|paragraph| paragraph.text.unicode_words().count())
        .sum();

    log::debug!(
        "loaded {}: {} paragraphs, {} words",
        file_path.display(),
        paragraphs.len(),
        word_count
    );

    Ok(Document {
        title,
        metadata: DocumentMetadata {
            file_path: file_path.to_string_lossy().to_string(),
            file_size,
            paragraph_count: paragraphs.len(),
            word_count,
        },
        paragraphs,
    })
}
