//! Core map options types and logic.
//!
//! This module contains the pure functional core:
//! - Style descriptors and the validated style catalog
//! - Actions and the `Action` trait that dispatchers deliver
//! - The immutable `OptionsState` snapshot
//! - The `reduce` function computing successor states
//!
//! Nothing in this module holds mutable state. The only side effect is
//! diagnostic logging.

mod action;
mod catalog;
mod reduce;
mod state;
mod style;

pub use action::{Action, OptionsAction};
pub use catalog::{validate, CatalogError, InvalidCatalog, StyleCatalog};
pub use reduce::reduce;
pub use state::{DefaultStyle, OptionsState};
pub use style::{StyleKind, StyleOption, TileSources};
