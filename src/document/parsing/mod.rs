//! Document parsing utilities
//!
//! The extraction pipeline over the raw main document part: deletion
//! stripping, paragraph and run segmentation, run property resolution,
//! content extraction and paragraph assembly.

pub(crate) mod content;
pub(crate) mod deletion;
pub(crate) mod entities;
pub(crate) mod formatting;
pub(crate) mod paragraph;
pub(crate) mod scan;

pub use paragraph::extract_paragraphs;
