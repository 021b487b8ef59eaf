//! The options reducer: `(state, action) -> state`.

use super::action::{Action, OptionsAction};
use super::state::OptionsState;
use std::sync::Arc;

/// Compute the successor of `state` for `action` (pure).
///
/// Returns the identical `Arc` when nothing changes: for actions that are not
/// map option actions, for an unknown layer name, and when the requested
/// value is already current. Callers can detect changes with `Arc::ptr_eq`.
///
/// # Example
///
/// ```rust
/// use map_options::core::{reduce, OptionsAction, OptionsState, StyleCatalog};
/// use std::sync::Arc;
///
/// let state = Arc::new(OptionsState::initial(StyleCatalog::builtin(), "OpenStreetMap"));
///
/// let next = reduce(&state, &OptionsAction::select_layer("Satellite"));
/// assert_eq!(next.selected_style().name, "Satellite");
///
/// let same = reduce(&next, &OptionsAction::select_layer("Moon"));
/// assert!(Arc::ptr_eq(&next, &same));
/// ```
pub fn reduce<A>(state: &Arc<OptionsState>, action: &A) -> Arc<OptionsState>
where
    A: Action + ?Sized,
{
    let Some(action) = action.as_options_action() else {
        return Arc::clone(state);
    };

    match action {
        OptionsAction::SelectMapLayer { layer } => {
            match state.available_styles().find(layer) {
                Some(style) if !Arc::ptr_eq(style, state.selected_style()) => {
                    Arc::new(state.with_selected_style(Arc::clone(style)))
                }
                Some(_) => Arc::clone(state),
                None => {
                    tracing::debug!(layer = %layer, "Ignoring selection of unknown map layer");
                    Arc::clone(state)
                }
            }
        }
        OptionsAction::ToggleRoutingGraph { enabled } => {
            if state.routing_graph_visible() == *enabled {
                Arc::clone(state)
            } else {
                Arc::new(state.with_routing_graph_visible(*enabled))
            }
        }
        OptionsAction::ToggleUrbanDensityLayer { enabled } => {
            if state.urban_density_visible() == *enabled {
                Arc::clone(state)
            } else {
                Arc::new(state.with_urban_density_visible(*enabled))
            }
        }
        OptionsAction::ToggleExternalVectorOverlay { enabled } => {
            if state.external_vector_overlay_visible() == *enabled {
                Arc::clone(state)
            } else {
                Arc::new(state.with_external_vector_overlay_visible(*enabled))
            }
        }
        OptionsAction::MapIsLoaded => {
            if state.is_map_loaded() {
                Arc::clone(state)
            } else {
                Arc::new(state.with_map_loaded())
            }
        }
    }
}
