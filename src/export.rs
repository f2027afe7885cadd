//! Document export
//!
//! Renders a loaded document as plain text, HTML or JSON.

use anyhow::Result;

use crate::ExportFormat;
use crate::config::ExportConfig;
use crate::document::Document;

pub fn export_document(
    document: &Document,
    format: &ExportFormat,
    options: &ExportConfig,
) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(export_to_text(document, &options.paragraph_separator)),
        ExportFormat::Html => Ok(export_to_html(document, options.wrap_paragraphs)),
        ExportFormat::Json => export_to_json(document, options.pretty_json),
    }
}

pub fn export_to_text(document: &Document, separator: &str) -> String {
    document
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Paragraph markup is already escaped, so it is emitted as is.
pub fn export_to_html(document: &Document, wrap_paragraphs: bool) -> String {
    document
        .paragraphs
        .iter()
        .map(|paragraph| {
            if wrap_paragraphs {
                format!("<p>{}</p>", paragraph.markup)
            } else {
                paragraph.markup.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_to_json(document: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
