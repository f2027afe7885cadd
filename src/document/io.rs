//! Archive access and file validation
//!
//! A .docx file is a zip container. The parser only ever needs one thing
//! from it: the main document part as text.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

/// Logical path of the main document part inside the container.
pub const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Read a named part of a document container as text.
pub trait PartReader {
    fn read_part(&mut self, name: &str) -> Result<String>;
}

impl<R: Read + Seek> PartReader for ZipArchive<R> {
    fn read_part(&mut self, name: &str) -> Result<String> {
        let mut part = match self.by_name(name) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => return Err(Error::MissingPart(name.to_string())),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::with_capacity(part.size() as usize);
        part.read_to_end(&mut bytes)?;

        String::from_utf8(bytes).map_err(|source| Error::Decode {
            part: name.to_string(),
            source,
        })
    }
}

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(Error::InvalidFormat(format!(
            "Invalid file format. Expected .docx file, got .{extension}\n\
            Note: wordrun only supports Word .docx files (not .doc, .xlsx, .zip, etc.)"
        )));
    }

    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name(MAIN_DOCUMENT_PART).is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::InvalidFormat(
                "This appears to be an Excel file (.xlsx).\n\
                wordrun only supports Word documents (.docx)."
                    .to_string(),
            ));
        }

        return Err(Error::MissingPart(MAIN_DOCUMENT_PART.to_string()));
    }

    Ok(())
}

/// Open a .docx container and return its main document part verbatim.
pub fn read_main_document(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.read_part(MAIN_DOCUMENT_PART)
}
