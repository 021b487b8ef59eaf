//! Base map style descriptors.
//!
//! A `StyleOption` describes one selectable base layer. Style options are
//! created once from a static catalog and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Kind-specific data of a base layer.
///
/// Serialized as the `"type"` tag of the enclosing [`StyleOption`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleKind {
    /// Pre-rendered image tiles.
    Raster {
        /// Device pixel ratio the tiles were rendered for (e.g. `2` for `@2x` tiles).
        #[serde(
            rename = "tilePixelRatio",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        tile_pixel_ratio: Option<u8>,
    },
    /// Vector tiles styled on the client.
    Vector,
}

impl StyleKind {
    /// Raster kind without a pixel-ratio multiplier.
    pub fn raster() -> Self {
        StyleKind::Raster {
            tile_pixel_ratio: None,
        }
    }

    pub fn is_raster(&self) -> bool {
        matches!(self, StyleKind::Raster { .. })
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, StyleKind::Vector)
    }
}

/// One or more templated tile URLs (`{z}`, `{x}`, `{y}` placeholders).
///
/// Accepts either a single string or an array of strings when deserialized,
/// and always serializes as an array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UrlField")]
pub struct TileSources(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlField {
    One(String),
    Many(Vec<String>),
}

impl From<UrlField> for TileSources {
    fn from(field: UrlField) -> Self {
        match field {
            UrlField::One(url) => TileSources(vec![url]),
            UrlField::Many(urls) => TileSources(urls),
        }
    }
}

impl TileSources {
    pub fn new<I, U>(urls: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        TileSources(urls.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Immutable description of one selectable base map layer.
///
/// The `name` is the lookup key used by layer selection; it is matched
/// case-sensitively.
///
/// # Example
///
/// ```rust
/// use map_options::core::{StyleKind, StyleOption};
///
/// let style = StyleOption::raster(
///     "OpenStreetMap",
///     ["https://tile.openstreetmap.org/{z}/{x}/{y}.png"],
///     "&copy; OpenStreetMap contributors",
/// )
/// .with_max_zoom(19);
///
/// assert_eq!(style.name, "OpenStreetMap");
/// assert!(style.kind.is_raster());
/// assert_eq!(style.max_zoom, Some(19));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOption {
    pub name: String,
    #[serde(flatten)]
    pub kind: StyleKind,
    #[serde(rename = "url")]
    pub tile_sources: TileSources,
    pub attribution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
}

impl StyleOption {
    /// Create a raster style.
    pub fn raster<I, U>(name: impl Into<String>, urls: I, attribution: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            kind: StyleKind::raster(),
            tile_sources: TileSources::new(urls),
            attribution: attribution.into(),
            max_zoom: None,
        }
    }

    /// Create a vector style backed by a single style/tile URL.
    pub fn vector(
        name: impl Into<String>,
        url: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Vector,
            tile_sources: TileSources::new([url.into()]),
            attribution: attribution.into(),
            max_zoom: None,
        }
    }

    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = Some(max_zoom);
        self
    }

    /// Set the pixel-ratio multiplier. Has no effect on vector styles.
    pub fn with_tile_pixel_ratio(mut self, ratio: u8) -> Self {
        if let StyleKind::Raster { tile_pixel_ratio } = &mut self.kind {
            *tile_pixel_ratio = Some(ratio);
        }
        self
    }

    /// Pixel-ratio multiplier of a raster style.
    pub fn tile_pixel_ratio(&self) -> Option<u8> {
        match self.kind {
            StyleKind::Raster { tile_pixel_ratio } => tile_pixel_ratio,
            StyleKind::Vector => None,
        }
    }
}
