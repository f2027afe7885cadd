//! Document search operations
//!
//! Read-only queries over a loaded document.

use super::models::*;

/// Case-insensitive search over paragraph text.
///
/// Returns one result per matching paragraph; positions are byte offsets of
/// the first match in the lowercased text.
pub fn search_document(document: &Document, query: &str) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    document
        .paragraphs
        .iter()
        .enumerate()
        .filter_map(|(paragraph_index, paragraph)| {
            let text_lower = paragraph.text.to_lowercase();
            let start_pos = text_lower.find(&query_lower)?;
            Some(SearchResult {
                paragraph_index,
                text: paragraph.text.clone(),
                start_pos,
                end_pos: start_pos + query_lower.len(),
            })
        })
        .collect()
}
