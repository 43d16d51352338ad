//! Error types for the pdf2xml library.
//!
//! One enum covers the whole pipeline. The two conversion errors
//! ([`Pdf2XmlError::NoTable`] and [`Pdf2XmlError::EmptyTable`]) carry fixed
//! messages that form part of the output contract — downstream tooling matches
//! on them — so they must not be reworded. Everything else wraps an input,
//! extractor, or filesystem failure with enough context to act on.
//!
//! Row-level malformed data (a row with any missing cell) is deliberately
//! *not* an error: the builder skips such rows silently.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2xml library.
#[derive(Debug, Error)]
pub enum Pdf2XmlError {
    // ── Conversion errors (fixed messages) ────────────────────────────────
    /// Table extraction found no table at all on the requested page.
    #[error("There is no table")]
    NoTable,

    /// The table exists but had no header row to remove.
    #[error("Your table is empty")]
    EmptyTable,

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The PDF library failed to open or parse the document.
    #[error("Failed to parse PDF '{path}': {detail}")]
    PdfParse { path: PathBuf, detail: String },

    /// The requested page index does not exist in the document.
    #[error("Page index {page} is out of range for '{path}'")]
    PageOutOfRange { page: usize, path: PathBuf },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output XML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── XML errors ────────────────────────────────────────────────────────
    /// XML serialisation failed. Writing into an in-memory buffer this should
    /// never fire; the variant exists so the writer's error type is propagated
    /// instead of swallowed.
    #[error("XML serialisation failed: {detail}")]
    Serialize { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
