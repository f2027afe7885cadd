//! Document parsing and data structures module
//!
//! This module reads the main content stream of a Word (.docx) document and
//! converts it into an ordered list of paragraph records.

pub(crate) mod io;
pub(crate) mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod query;

pub use io::{MAIN_DOCUMENT_PART, PartReader, read_main_document};
pub use loader::load_document;
pub use models::*;
pub use parsing::extract_paragraphs;
pub use query::*;
