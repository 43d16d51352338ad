//! Top-level conversion entry points.
//!
//! The whole run is three sequential, synchronous stages with no shared
//! state; each entry point here just wires them together and keeps the
//! row accounting for [`ConversionStats`].

use crate::config::ConversionConfig;
use crate::error::Pdf2XmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{build, export, extract};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert one table from one PDF page into an XML tree.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input` — path to a local PDF file
/// * `config` — page index, root element name, detection strategy
///
/// # Errors
/// * [`Pdf2XmlError::NoTable`] when the page holds no detectable table
/// * [`Pdf2XmlError::EmptyTable`] when the table had no header row to remove
/// * input and extractor errors from the extract stage
pub fn convert(
    input: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2XmlError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    info!("Starting conversion: {} page {}", input, config.page);

    // ── Step 1: Resolve input ────────────────────────────────────────────
    let pdf_path = extract::resolve_input(input)?;

    // ── Step 2: Extract the table ────────────────────────────────────────
    let table = extract::extract_table(&pdf_path, config.page, config.strategy)?;
    let data_rows = table
        .as_ref()
        .map(|t| t.len().saturating_sub(1))
        .unwrap_or(0);

    // ── Step 3: Build the tree ───────────────────────────────────────────
    let root = build::build_xml_struct(table, &config.root_name)?;

    let converted = root.children().len();
    let stats = ConversionStats {
        data_rows,
        converted_rows: converted,
        skipped_rows: data_rows - converted,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };
    debug!(
        "Built <{}> with {} children ({} rows skipped)",
        root.tag(),
        stats.converted_rows,
        stats.skipped_rows
    );
    info!(
        "Conversion complete: {}/{} rows, {}ms total",
        stats.converted_rows, stats.data_rows, stats.total_duration_ms
    );

    Ok(ConversionOutput { root, stats })
}

/// Convert a PDF table and write the XML directly to a file.
///
/// Uses the exporter's atomic write (temp file + rename) to prevent
/// partial files.
pub fn convert_to_file(
    input: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Pdf2XmlError> {
    let output = convert(input, config)?;
    export::export_xml_struct(&output.root, output_path)?;
    Ok(output.stats)
}
