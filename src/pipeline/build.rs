//! The core transform: one extracted table → one XML element tree.
//!
//! Each data row becomes a child element tagged with the row's first cell and
//! carrying the three fixed attributes `type`, `flag`, `information` from the
//! next three cells. The first row is always a header and is discarded without
//! inspection. Rows with any *absent* cell are skipped whole; cells that are
//! present but *empty* are substituted with the `"unknown"` sentinel.

use crate::element::{Attribute, XmlElement, UNKNOWN};
use crate::error::Pdf2XmlError;
use crate::pipeline::extract::Table;

/// Build an XML tree from an extracted table.
///
/// Pure transform, no side effects. Rows are expected to be at least four
/// columns wide; narrower rows are undefined input and the responsibility of
/// the caller (index access will panic, matching the contract of "no
/// validation beyond index access").
///
/// # Errors
/// * [`Pdf2XmlError::NoTable`] — `table` is `None` (no table found at all)
/// * [`Pdf2XmlError::EmptyTable`] — the table had no header row to remove
///
/// # Example
/// ```rust
/// use pdf2xml::build_xml_struct;
///
/// let table = vec![
///     vec![Some("Property".into()), Some("Type".into()), Some("Flag".into()), Some("Info".into())],
///     vec![Some("Object_Name".into()), Some("CharacterString".into()), Some("R".into()), Some("".into())],
/// ];
/// let root = build_xml_struct(Some(table), "ANALOG_INPUT").unwrap();
/// assert_eq!(root.children().len(), 1);
/// assert_eq!(root.children()[0].attribute("information"), Some("unknown"));
/// ```
pub fn build_xml_struct(
    table: Option<Table>,
    document_element_name: &str,
) -> Result<XmlElement, Pdf2XmlError> {
    let Some(table) = table else {
        return Err(Pdf2XmlError::NoTable);
    };

    let mut root = XmlElement::new(document_element_name);
    let mut rows = table.into_iter();

    // Pop the header. A table with nothing to pop had no header to remove;
    // that is the empty-table condition, checked on the popped value itself
    // rather than on the remaining length. Intentionally so — see DESIGN.md.
    if rows.next().is_none() {
        return Err(Pdf2XmlError::EmptyTable);
    }

    for row in rows {
        if row.iter().any(|cell| cell.is_none()) {
            continue;
        }

        let mut property = XmlElement::new(text_or_unknown(&row[0]));
        property.set_attribute(Attribute::DataType.as_str(), text_or_unknown(&row[1]));
        property.set_attribute(Attribute::Flag.as_str(), text_or_unknown(&row[2]));
        property.set_attribute(Attribute::Information.as_str(), text_or_unknown(&row[3]));
        root.append_child(property);
    }

    Ok(root)
}

/// The cell's text, or the `"unknown"` sentinel for empty strings.
///
/// Callers have already filtered out absent cells; the `None` arm exists only
/// so this helper is total.
fn text_or_unknown(cell: &Option<String>) -> &str {
    match cell.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => UNKNOWN,
    }
}
