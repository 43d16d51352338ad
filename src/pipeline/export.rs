//! Export: serialise the element tree and write it to disk.
//!
//! Writes go through a sibling temp file followed by a rename, so a failure
//! mid-write never leaves a truncated XML document behind. The rename
//! overwrites any existing file, which is the documented contract.

use crate::element::XmlElement;
use crate::error::Pdf2XmlError;
use std::path::Path;
use tracing::debug;

/// Serialise `xml_struct` and write the raw bytes to `path`.
///
/// Overwrites any existing file. Filesystem errors propagate as
/// [`Pdf2XmlError::OutputWriteFailed`].
pub fn export_xml_struct(xml_struct: &XmlElement, path: impl AsRef<Path>) -> Result<(), Pdf2XmlError> {
    let path = path.as_ref();
    let bytes = xml_struct.to_bytes()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Pdf2XmlError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("xml.tmp");
    std::fs::write(&tmp_path, &bytes).map_err(|e| Pdf2XmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| Pdf2XmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Attribute;

    fn sample_tree() -> XmlElement {
        let mut root = XmlElement::new("ANALOG_INPUT");
        let mut child = XmlElement::new("Object_Name");
        child.set_attribute(Attribute::DataType.as_str(), "CharacterString");
        child.set_attribute(Attribute::Flag.as_str(), "R");
        child.set_attribute(Attribute::Information.as_str(), "unknown");
        root.append_child(child);
        root
    }

    #[test]
    fn writes_serialised_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("analog_input.xml");

        export_xml_struct(&sample_tree(), &out).unwrap();

        let written = std::fs::read(&out).unwrap();
        assert_eq!(written, sample_tree().to_bytes().unwrap());
        // No stray temp file left behind.
        assert!(!dir.path().join("analog_input.xml.tmp").exists());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xml");
        std::fs::write(&out, b"previous contents that are longer than the new ones").unwrap();

        export_xml_struct(&sample_tree(), &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("<ANALOG_INPUT>"));
        assert!(!written.contains("previous contents"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/deeper/out.xml");

        export_xml_struct(&sample_tree(), &out).unwrap();
        assert!(out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_propagates_with_path() {
        let err = export_xml_struct(&sample_tree(), "/proc/definitely-not-writable/out.xml")
            .unwrap_err();
        match err {
            Pdf2XmlError::OutputWriteFailed { path, .. } => {
                assert!(path.to_string_lossy().contains("out.xml"));
            }
            other => panic!("expected OutputWriteFailed, got {other:?}"),
        }
    }
}
