//! Startup configuration.

use crate::core::{InvalidCatalog, StyleCatalog, StyleOption};
use crate::store::DEFAULT_LOG_LIMIT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidCatalog(#[from] InvalidCatalog),
}

/// Configuration supplied by the host at startup.
///
/// # Example
///
/// ```rust
/// use map_options::config::OptionsConfig;
///
/// let config = OptionsConfig::from_json_str(r#"{ "defaultTiles": "Terrain" }"#).unwrap();
///
/// assert_eq!(config.default_style_name, "Terrain");
/// assert_eq!(config.catalog().unwrap().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsConfig {
    /// Name of the initially selected style
    #[serde(alias = "defaultTiles")]
    pub default_style_name: String,
    /// Style catalog; the built-in catalog is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<StyleOption>>,
    /// Number of dispatches kept in the dispatch log
    pub dispatch_log_limit: usize,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            default_style_name: "OpenStreetMap".to_string(),
            styles: None,
            dispatch_log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl OptionsConfig {
    /// Parse configuration from a JSON document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured style catalog.
    pub fn catalog(&self) -> Result<StyleCatalog, ConfigError> {
        match &self.styles {
            Some(styles) => Ok(StyleCatalog::new(styles.clone())?),
            None => Ok(StyleCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CatalogError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = OptionsConfig::from_json_str("{}").unwrap();

        assert_eq!(config, OptionsConfig::default());
        assert_eq!(config.default_style_name, "OpenStreetMap");
        assert_eq!(config.dispatch_log_limit, DEFAULT_LOG_LIMIT);
    }

    #[test]
    fn accepts_both_default_style_keys() {
        let camel = OptionsConfig::from_json_str(r#"{"defaultStyleName":"Satellite"}"#).unwrap();
        let legacy = OptionsConfig::from_json_str(r#"{"defaultTiles":"Satellite"}"#).unwrap();

        assert_eq!(camel.default_style_name, "Satellite");
        assert_eq!(legacy.default_style_name, "Satellite");
    }

    #[test]
    fn custom_styles_replace_builtin_catalog() {
        let config = OptionsConfig::from_json_str(
            r#"{
                "defaultStyleName": "Streets",
                "styles": [
                    {"name": "Streets", "type": "vector", "url": "https://example.org/style.json", "attribution": "x"},
                    {"name": "Photo", "type": "raster", "url": ["https://example.org/{z}/{x}/{y}.jpg"], "attribution": "y", "maxZoom": 17}
                ]
            }"#,
        )
        .unwrap();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.names(), vec!["Streets", "Photo"]);
        assert!(catalog.first().kind.is_vector());
    }

    #[test]
    fn duplicate_style_names_are_reported() {
        let config = OptionsConfig {
            styles: Some(vec![
                StyleOption::raster("A", ["u"], "a"),
                StyleOption::raster("A", ["v"], "b"),
            ]),
            ..OptionsConfig::default()
        };

        match config.catalog() {
            Err(ConfigError::InvalidCatalog(InvalidCatalog(errors))) => {
                assert_eq!(
                    errors,
                    vec![CatalogError::DuplicateName {
                        name: "A".to_string()
                    }]
                );
            }
            other => panic!("Expected invalid catalog, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = OptionsConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
