//! Output types: the built tree plus conversion statistics.

use crate::element::XmlElement;
use serde::{Deserialize, Serialize};

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The built XML tree, rooted at the configured document element.
    pub root: XmlElement,
    /// Row-level accounting for the run.
    pub stats: ConversionStats,
}

/// Statistics about a conversion run.
///
/// `data_rows` counts rows after the header was removed;
/// `skipped_rows` counts those dropped for containing an absent cell, so
/// `converted_rows + skipped_rows == data_rows` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Data rows in the extracted table (header excluded).
    pub data_rows: usize,
    /// Rows converted into child elements.
    pub converted_rows: usize,
    /// Rows silently skipped because at least one cell was absent.
    pub skipped_rows: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub total_duration_ms: u64,
}
