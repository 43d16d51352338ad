//! Input resolution and table extraction.
//!
//! ## Why validate before opening?
//!
//! pdfplumber reports a parse failure for anything it cannot read, which
//! turns "file does not exist" and "this is a JPEG" into the same opaque
//! error. Checking existence, readability, and the `%PDF` magic bytes first
//! gives callers a typed error they can act on.
//!
//! Table detection itself is wholly delegated to pdfplumber; this module only
//! depends on the shape of its output — a row-major grid of optional cell
//! strings, or nothing when no table was found.

use crate::config::TableStrategy;
use crate::error::Pdf2XmlError;
use pdfplumber::{Pdf, Strategy, TableSettings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A rectangular grid of optional text cells pulled from a PDF page.
///
/// Any cell may be absent (`None`) when the detector found the cell region
/// but no text inside it. The first row is the header.
pub type Table = Vec<Vec<Option<String>>>;

/// Confirm `path_str` points at a readable file that starts like a PDF.
pub fn resolve_input(path_str: &str) -> Result<PathBuf, Pdf2XmlError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(Pdf2XmlError::FileNotFound { path });
    }

    // Opening the file doubles as the readability check.
    match std::fs::File::open(&path) {
        Ok(mut f) => {
            use std::io::Read;
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_err() {
                // Too short to even hold the magic number.
                return Err(Pdf2XmlError::NotAPdf {
                    path,
                    magic: [0u8; 4],
                });
            }
            if &magic != b"%PDF" {
                return Err(Pdf2XmlError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2XmlError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2XmlError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

/// Extract the largest table from one page of a PDF file.
///
/// Returns `Ok(None)` when the page exists but no table was detected on it —
/// the caller decides whether that is an error.
///
/// # Arguments
/// * `path` — resolved path to the PDF (see [`resolve_input`])
/// * `page_index` — zero-based page index
/// * `strategy` — column-detection strategy forwarded to pdfplumber
pub fn extract_table(
    path: &Path,
    page_index: usize,
    strategy: TableStrategy,
) -> Result<Option<Table>, Pdf2XmlError> {
    let pdf = Pdf::open_file(path.to_string_lossy().as_ref(), None).map_err(|e| Pdf2XmlError::PdfParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let page = match pdf.pages_iter().nth(page_index) {
        Some(page_result) => page_result.map_err(|e| Pdf2XmlError::PdfParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        None => {
            return Err(Pdf2XmlError::PageOutOfRange {
                page: page_index,
                path: path.to_path_buf(),
            })
        }
    };

    let mut settings = TableSettings::default();
    settings.strategy = to_pdfplumber_strategy(strategy);
    let table = page.extract_table(&settings);

    match &table {
        Some(t) => debug!(
            "Extracted table with {} rows from page {}",
            t.len(),
            page_index
        ),
        None => debug!("No table detected on page {}", page_index),
    }

    Ok(table)
}

fn to_pdfplumber_strategy(strategy: TableStrategy) -> Strategy {
    match strategy {
        // Stream is pdfplumber's text-alignment strategy, the equivalent of
        // vertical_strategy = "text" in the Python library.
        TableStrategy::Text => Strategy::Stream,
        TableStrategy::Lattice => Strategy::Lattice,
    }
}
