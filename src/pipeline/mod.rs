//! Pipeline stages for PDF-table-to-XML conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ build ──▶ export
//! (pdfplumber) (XmlElement) (quick-xml + fs)
//! ```
//!
//! 1. [`extract`] — resolve and validate the input path, then pull one table
//!    off the requested page via pdfplumber (an opaque collaborator; its
//!    detection heuristics are not ours)
//! 2. [`build`]   — the core transform: table rows → element tree
//! 3. [`export`]  — serialise the tree and write it to disk

pub mod build;
pub mod export;
pub mod extract;
