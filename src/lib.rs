//! wordrun: paragraph text and inline formatting extraction for .docx files
//!
//! This library reads the main content stream of a Microsoft Word document
//! and turns it into ordered paragraph records, each carrying whitespace-exact
//! plain text and a minimal HTML rendering with bold, italic, underline and
//! line-break tags.

pub mod config;
pub mod document;
pub mod error;
pub mod export;

use serde::{Deserialize, Serialize};

/// Export format options
#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Html,
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{
    Document, ParagraphRecord, PartReader, TextFormatting, extract_paragraphs, load_document,
};
pub use error::{Error, Result};
