//! A minimal XML element tree and its quick-xml serialisation.
//!
//! The output format needs exactly one root with a flat list of attribute-only
//! children, so this module keeps the tree deliberately small: a tag, an
//! ordered attribute list, and ordered children. Attribute *order* matters for
//! byte-stable output across runs, hence a `Vec` of pairs rather than a map.

use crate::error::Pdf2XmlError;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Sentinel substituted for missing or empty cell values.
pub const UNKNOWN: &str = "unknown";

/// The closed set of attributes carried by every converted row element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// The data type associated with the property (column 1).
    DataType,
    /// A flag indicating property status (column 2).
    Flag,
    /// Additional information or description (column 3).
    Information,
}

impl Attribute {
    /// The attribute name as it appears in the serialised XML.
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::DataType => "type",
            Attribute::Flag => "flag",
            Attribute::Information => "information",
        }
    }
}

/// An XML element: tag, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute pairs in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Serialise the tree to its canonical byte form.
    ///
    /// Childless elements are written self-closing; attribute values are
    /// escaped by the writer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Pdf2XmlError> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        Ok(writer.into_inner())
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), Pdf2XmlError> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Pdf2XmlError::Serialize {
                detail: e.to_string(),
            })?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Pdf2XmlError::Serialize {
            detail: e.to_string(),
        })?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
        .map_err(|e| Pdf2XmlError::Serialize {
            detail: e.to_string(),
        })?;
    Ok(())
}
