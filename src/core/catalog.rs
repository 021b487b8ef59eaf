//! Ordered, validated catalog of base map styles.
//!
//! The catalog is fixed at startup and shared by every snapshot. Its
//! construction checks the startup contract (non-empty, unique names) and
//! reports every violation at once rather than stopping at the first.

use super::style::StyleOption;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\" target=\"_blank\">OpenStreetMap</a> contributors";

/// A single violation of the catalog contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Style catalog is empty")]
    Empty,

    #[error("Style at position {index} has a blank name")]
    BlankName { index: usize },

    #[error("Style name '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("Style '{name}' has no tile sources")]
    NoTileSources { name: String },
}

/// All violations found while building a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid style catalog: {}", describe(.0))]
pub struct InvalidCatalog(pub Vec<CatalogError>);

fn describe(errors: &[CatalogError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check the catalog contract, accumulating ALL violations.
pub fn validate(styles: &[StyleOption]) -> Validation<(), NonEmptyVec<CatalogError>> {
    if styles.is_empty() {
        return Validation::fail(CatalogError::Empty);
    }

    let mut checks: Vec<Validation<(), NonEmptyVec<CatalogError>>> = Vec::new();
    let mut seen = HashSet::new();

    for (index, style) in styles.iter().enumerate() {
        if style.name.trim().is_empty() {
            checks.push(Validation::fail(CatalogError::BlankName { index }));
        } else if !seen.insert(style.name.as_str()) {
            checks.push(Validation::fail(CatalogError::DuplicateName {
                name: style.name.clone(),
            }));
        }

        if style.tile_sources.is_empty() {
            checks.push(Validation::fail(CatalogError::NoTileSources {
                name: style.name.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Ordered, non-empty sequence of style options.
///
/// Cloning a catalog is cheap: the entries live behind a shared `Arc` and
/// every snapshot of the options state points at the same allocation.
///
/// # Example
///
/// ```rust
/// use map_options::core::{StyleCatalog, StyleOption};
///
/// let catalog = StyleCatalog::new(vec![
///     StyleOption::raster("OpenStreetMap", ["https://a/{z}/{x}/{y}.png"], "osm"),
///     StyleOption::raster("Satellite", ["https://b/{z}/{y}/{x}"], "esri"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.first().name, "OpenStreetMap");
/// assert!(catalog.find("Satellite").is_some());
/// assert!(catalog.find("satellite").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Arc<[Arc<StyleOption>]>,
}

impl StyleCatalog {
    /// Build a catalog, rejecting it if the contract is violated.
    pub fn new(styles: Vec<StyleOption>) -> Result<Self, InvalidCatalog> {
        match validate(&styles) {
            Validation::Success(_) => Ok(Self {
                styles: styles.into_iter().map(Arc::new).collect(),
            }),
            Validation::Failure(errors) => Err(InvalidCatalog(errors.iter().cloned().collect())),
        }
    }

    /// The default catalog: OpenStreetMap, Terrain (CyclOSM) and Satellite (Esri).
    pub fn builtin() -> Self {
        let styles = vec![
            StyleOption::raster(
                "OpenStreetMap",
                ["https://tmdt.fimo.edu.vn/hot/{z}/{x}/{y}.png"],
                OSM_ATTRIBUTION,
            )
            .with_max_zoom(19),
            StyleOption::raster(
                "Terrain",
                [
                    "https://a.tile-cyclosm.openstreetmap.fr/cyclosm/{z}/{x}/{y}.png",
                    "https://b.tile-cyclosm.openstreetmap.fr/cyclosm/{z}/{x}/{y}.png",
                    "https://c.tile-cyclosm.openstreetmap.fr/cyclosm/{z}/{x}/{y}.png",
                ],
                format!(
                    "{OSM_ATTRIBUTION}, &copy; <a href=\"https://github.com/cyclosm/cyclosm-cartocss-style/releases\" target=\"_blank\">CyclOSM</a>"
                ),
            )
            .with_max_zoom(19),
            StyleOption::raster(
                "Satellite",
                ["https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"],
                "&copy; <a href=\"http://www.esri.com/\" target=\"_blank\">Esri</a> i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
            )
            .with_max_zoom(18),
        ];

        Self {
            styles: styles.into_iter().map(Arc::new).collect(),
        }
    }

    /// Look up a style by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&Arc<StyleOption>> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// First entry in catalog order. Always present.
    pub fn first(&self) -> &Arc<StyleOption> {
        &self.styles[0]
    }

    /// Whether `style` is one of this catalog's entries (by identity).
    pub fn contains(&self, style: &Arc<StyleOption>) -> bool {
        self.styles.iter().any(|entry| Arc::ptr_eq(entry, style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<StyleOption>> {
        self.styles.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.styles.iter().map(|style| style.name.as_str()).collect()
    }

    /// Whether two catalogs share the same allocation.
    pub fn ptr_eq(&self, other: &StyleCatalog) -> bool {
        Arc::ptr_eq(&self.styles, &other.styles)
    }
}

impl Serialize for StyleCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.styles.serialize(serializer)
    }
}
