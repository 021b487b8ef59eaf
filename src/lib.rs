//! Map Options: a pure functional state container for map display options
//!
//! Map Options follows the "pure core, imperative shell" philosophy.
//! The state transitions are pure functions over immutable snapshots, while
//! holding the live snapshot and notifying subscribers happens in a thin shell.
//!
//! # Core Concepts
//!
//! - **StyleOption**: Static descriptor of one selectable base layer
//! - **OptionsState**: Immutable snapshot of the selected layer and overlay toggles
//! - **reduce**: Pure `(state, action) -> state` transition function
//! - **OptionsStateMachine**: Holds the latest snapshot and dispatches actions
//!
//! # Example
//!
//! ```rust
//! use map_options::core::{OptionsAction, StyleCatalog};
//! use map_options::OptionsStateMachine;
//!
//! let mut machine = OptionsStateMachine::new(StyleCatalog::builtin(), "Terrain");
//!
//! machine.dispatch(&OptionsAction::ToggleRoutingGraph { enabled: true });
//! machine.dispatch(&OptionsAction::select_layer("Satellite"));
//! machine.dispatch(&OptionsAction::MapIsLoaded);
//!
//! let state = machine.state();
//! assert_eq!(state.selected_style().name, "Satellite");
//! assert!(state.routing_graph_visible());
//! assert!(state.is_map_loaded());
//! assert!(!state.urban_density_visible());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::OptionsStateMachineBuilder;
pub use config::OptionsConfig;
pub use crate::core::{reduce, Action, OptionsAction, OptionsState, StyleCatalog, StyleOption};
pub use store::{OptionsStateMachine, Subscriber};
