//! Error types for wordrun.
//!
//! Only the failure to obtain the main content stream is an error. Malformed
//! paragraphs or runs inside a readable stream are skipped by the parser and
//! never surface here.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for wordrun operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container could not be opened as a zip archive.
    #[error("Unreadable archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A named part does not exist in the archive.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// A part exists but is not valid UTF-8 text.
    #[error("Document part {part} is not valid UTF-8")]
    Decode {
        part: String,
        #[source]
        source: FromUtf8Error,
    },

    /// The file is not a Word document.
    #[error("{0}")]
    InvalidFormat(String),
}
