//! # pdf2xml
//!
//! Extract a fixed-layout table from one page of a PDF document and export it
//! as an XML tree.
//!
//! ## What this crate is (and is not)
//!
//! This is a single-purpose conversion tool, written for the object-property
//! tables in the BACnet protocol reference (`res/cpt_bacnet.pdf`, page 55).
//! Each data row of the table becomes one XML element tagged with the row's
//! first cell and carrying three fixed attributes — `type`, `flag`,
//! `information` — from the next three cells. It is *not* a generic PDF table
//! converter: the table shape is fixed, the header row is always discarded,
//! and detection of the table itself is wholly delegated to pdfplumber.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Extract  pull the page's table grid via pdfplumber
//!  ├─ 2. Build    table rows → XmlElement tree (skip incomplete rows)
//!  └─ 3. Export   serialise via quick-xml, atomic write to disk
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2xml::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default(); // page 55, root ANALOG_INPUT
//!     let output = convert("res/cpt_bacnet.pdf", &config)?;
//!     println!("{}", String::from_utf8(output.root.to_bytes()?)?);
//!     eprintln!(
//!         "rows: {} converted / {} skipped",
//!         output.stats.converted_rows, output.stats.skipped_rows
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2xml` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2xml = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod element;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, TableStrategy};
pub use convert::{convert, convert_to_file};
pub use element::{Attribute, XmlElement, UNKNOWN};
pub use error::Pdf2XmlError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::build::build_xml_struct;
pub use pipeline::export::export_xml_struct;
pub use pipeline::extract::{extract_table, Table};
