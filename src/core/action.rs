//! Actions consumed by the options reducer.
//!
//! A dispatcher delivers many kinds of actions; only the ones that convert
//! to an [`OptionsAction`] affect the map options. Everything else is ignored.

use serde::{Deserialize, Serialize};

/// Anything a dispatcher can deliver.
///
/// Host applications implement this for their own action type and return
/// `Some` from [`Action::as_options_action`] for the map option kinds.
///
/// # Example
///
/// ```rust
/// use map_options::core::{Action, OptionsAction};
///
/// enum AppAction {
///     Options(OptionsAction),
///     ClearRoute,
/// }
///
/// impl Action for AppAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Options(action) => action.kind(),
///             Self::ClearRoute => "ClearRoute",
///         }
///     }
///
///     fn as_options_action(&self) -> Option<&OptionsAction> {
///         match self {
///             Self::Options(action) => Some(action),
///             Self::ClearRoute => None,
///         }
///     }
/// }
///
/// assert!(AppAction::ClearRoute.as_options_action().is_none());
/// assert_eq!(AppAction::Options(OptionsAction::MapIsLoaded).kind(), "MapIsLoaded");
/// ```
pub trait Action {
    /// Discriminant of the action, used for logging.
    fn kind(&self) -> &str;

    /// The map options action this represents, if any.
    ///
    /// Default implementation returns `None`.
    fn as_options_action(&self) -> Option<&OptionsAction> {
        None
    }
}

/// Actions that change the map options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OptionsAction {
    /// Select the base layer with this name. Unknown names are ignored.
    SelectMapLayer { layer: String },
    ToggleRoutingGraph { enabled: bool },
    ToggleUrbanDensityLayer { enabled: bool },
    ToggleExternalVectorOverlay { enabled: bool },
    /// The map finished loading.
    MapIsLoaded,
}

impl OptionsAction {
    pub fn select_layer(layer: impl Into<String>) -> Self {
        OptionsAction::SelectMapLayer {
            layer: layer.into(),
        }
    }
}

impl Action for OptionsAction {
    fn kind(&self) -> &str {
        match self {
            Self::SelectMapLayer { .. } => "SelectMapLayer",
            Self::ToggleRoutingGraph { .. } => "ToggleRoutingGraph",
            Self::ToggleUrbanDensityLayer { .. } => "ToggleUrbanDensityLayer",
            Self::ToggleExternalVectorOverlay { .. } => "ToggleExternalVectorOverlay",
            Self::MapIsLoaded => "MapIsLoaded",
        }
    }

    fn as_options_action(&self) -> Option<&OptionsAction> {
        Some(self)
    }
}
