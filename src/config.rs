//! Configuration types for PDF-table-to-XML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The defaults reproduce the sample
//! invocation this tool was written for: the BACnet object-property table on
//! page 55 of `res/cpt_bacnet.pdf`, exported under an `ANALOG_INPUT` root.

use crate::error::Pdf2XmlError;
use serde::{Deserialize, Serialize};

/// Configuration for a single table-to-XML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2xml::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .page(55)
///     .root_name("ANALOG_INPUT")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Zero-based page index where the table is expected. Default: 55.
    pub page: usize,

    /// Tag name of the document (root) element. Default: `"ANALOG_INPUT"`.
    pub root_name: String,

    /// Table-detection strategy handed to the extractor. Default: [`TableStrategy::Text`].
    ///
    /// The sample document draws no ruling lines around its property table, so
    /// column boundaries must come from text alignment rather than from
    /// graphics. Lattice remains available for documents that do rule their
    /// tables.
    pub strategy: TableStrategy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            page: 55,
            root_name: "ANALOG_INPUT".to_string(),
            strategy: TableStrategy::default(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn page(mut self, page: usize) -> Self {
        self.config.page = page;
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.config.root_name = name.into();
        self
    }

    pub fn strategy(mut self, strategy: TableStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2XmlError> {
        let c = &self.config;
        if c.root_name.trim().is_empty() {
            return Err(Pdf2XmlError::InvalidConfig(
                "Root element name must not be empty".into(),
            ));
        }
        if c.root_name.contains(char::is_whitespace) {
            return Err(Pdf2XmlError::InvalidConfig(format!(
                "Root element name must not contain whitespace, got '{}'",
                c.root_name
            )));
        }
        Ok(self.config)
    }
}

/// Table-detection strategy forwarded to the PDF extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableStrategy {
    /// Infer column boundaries from text alignment (default).
    #[default]
    Text,
    /// Use ruling lines drawn on the page.
    Lattice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sample_invocation() {
        let config = ConversionConfig::default();
        assert_eq!(config.page, 55);
        assert_eq!(config.root_name, "ANALOG_INPUT");
        assert_eq!(config.strategy, TableStrategy::Text);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = ConversionConfig::builder()
            .page(3)
            .root_name("BINARY_OUTPUT")
            .strategy(TableStrategy::Lattice)
            .build()
            .unwrap();
        assert_eq!(config.page, 3);
        assert_eq!(config.root_name, "BINARY_OUTPUT");
        assert_eq!(config.strategy, TableStrategy::Lattice);
    }

    #[test]
    fn empty_root_name_rejected() {
        let err = ConversionConfig::builder().root_name("  ").build();
        assert!(matches!(err, Err(Pdf2XmlError::InvalidConfig(_))));
    }

    #[test]
    fn whitespace_in_root_name_rejected() {
        let err = ConversionConfig::builder().root_name("ANALOG INPUT").build();
        assert!(matches!(err, Err(Pdf2XmlError::InvalidConfig(_))));
    }
}
