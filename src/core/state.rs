//! The options snapshot handed to the rendering layer.
//!
//! `OptionsState` is immutable. Every accepted action produces a new value
//! built field by field from the previous one, so untouched fields keep
//! pointing at the same allocations.

use super::catalog::StyleCatalog;
use super::style::StyleOption;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of resolving the configured default style against a catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultStyle {
    /// The configured name was found.
    Configured(Arc<StyleOption>),
    /// The configured name was missing; the first catalog entry is used.
    Fallback(Arc<StyleOption>),
}

impl DefaultStyle {
    /// Resolve `name` with an exact, case-sensitive match (pure).
    pub fn resolve(catalog: &StyleCatalog, name: &str) -> Self {
        match catalog.find(name) {
            Some(style) => DefaultStyle::Configured(Arc::clone(style)),
            None => DefaultStyle::Fallback(Arc::clone(catalog.first())),
        }
    }

    pub fn style(&self) -> &Arc<StyleOption> {
        match self {
            DefaultStyle::Configured(style) | DefaultStyle::Fallback(style) => style,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DefaultStyle::Fallback(_))
    }
}

/// Snapshot of the map display options.
///
/// `selected_style` is always an entry of `available_styles`. Fields are
/// private so that invariant cannot be broken from outside the reducer.
///
/// # Example
///
/// ```rust
/// use map_options::core::{OptionsState, StyleCatalog};
///
/// let state = OptionsState::initial(StyleCatalog::builtin(), "Terrain");
///
/// assert_eq!(state.selected_style().name, "Terrain");
/// assert!(!state.is_map_loaded());
/// assert!(!state.routing_graph_visible());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsState {
    available_styles: StyleCatalog,
    selected_style: Arc<StyleOption>,
    is_map_loaded: bool,
    routing_graph_visible: bool,
    urban_density_visible: bool,
    external_vector_overlay_visible: bool,
}

impl OptionsState {
    /// Build the initial state.
    ///
    /// Falls back to the first catalog entry when `default_style_name` is
    /// not in the catalog and logs a warning. All overlays start hidden.
    pub fn initial(catalog: StyleCatalog, default_style_name: &str) -> Self {
        let default_style = DefaultStyle::resolve(&catalog, default_style_name);
        if default_style.is_fallback() {
            tracing::warn!(
                configured = default_style_name,
                fallback = %default_style.style().name,
                "Could not find tile layer specified in config, using default instead"
            );
        }

        Self {
            selected_style: Arc::clone(default_style.style()),
            available_styles: catalog,
            is_map_loaded: false,
            routing_graph_visible: false,
            urban_density_visible: false,
            external_vector_overlay_visible: false,
        }
    }

    pub fn available_styles(&self) -> &StyleCatalog {
        &self.available_styles
    }

    pub fn selected_style(&self) -> &Arc<StyleOption> {
        &self.selected_style
    }

    pub fn is_map_loaded(&self) -> bool {
        self.is_map_loaded
    }

    pub fn routing_graph_visible(&self) -> bool {
        self.routing_graph_visible
    }

    pub fn urban_density_visible(&self) -> bool {
        self.urban_density_visible
    }

    pub fn external_vector_overlay_visible(&self) -> bool {
        self.external_vector_overlay_visible
    }

    /// Check the snapshot invariant: the selection is a catalog entry.
    pub fn is_consistent(&self) -> bool {
        self.available_styles.contains(&self.selected_style)
    }

    pub(crate) fn with_selected_style(&self, selected_style: Arc<StyleOption>) -> Self {
        Self {
            available_styles: self.available_styles.clone(),
            selected_style,
            is_map_loaded: self.is_map_loaded,
            routing_graph_visible: self.routing_graph_visible,
            urban_density_visible: self.urban_density_visible,
            external_vector_overlay_visible: self.external_vector_overlay_visible,
        }
    }

    pub(crate) fn with_routing_graph_visible(&self, routing_graph_visible: bool) -> Self {
        Self {
            available_styles: self.available_styles.clone(),
            selected_style: Arc::clone(&self.selected_style),
            is_map_loaded: self.is_map_loaded,
            routing_graph_visible,
            urban_density_visible: self.urban_density_visible,
            external_vector_overlay_visible: self.external_vector_overlay_visible,
        }
    }

    pub(crate) fn with_urban_density_visible(&self, urban_density_visible: bool) -> Self {
        Self {
            available_styles: self.available_styles.clone(),
            selected_style: Arc::clone(&self.selected_style),
            is_map_loaded: self.is_map_loaded,
            routing_graph_visible: self.routing_graph_visible,
            urban_density_visible,
            external_vector_overlay_visible: self.external_vector_overlay_visible,
        }
    }

    pub(crate) fn with_external_vector_overlay_visible(
        &self,
        external_vector_overlay_visible: bool,
    ) -> Self {
        Self {
            available_styles: self.available_styles.clone(),
            selected_style: Arc::clone(&self.selected_style),
            is_map_loaded: self.is_map_loaded,
            routing_graph_visible: self.routing_graph_visible,
            urban_density_visible: self.urban_density_visible,
            external_vector_overlay_visible,
        }
    }

    pub(crate) fn with_map_loaded(&self) -> Self {
        Self {
            available_styles: self.available_styles.clone(),
            selected_style: Arc::clone(&self.selected_style),
            is_map_loaded: true,
            routing_graph_visible: self.routing_graph_visible,
            urban_density_visible: self.urban_density_visible,
            external_vector_overlay_visible: self.external_vector_overlay_visible,
        }
    }
}
