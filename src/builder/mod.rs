//! Builder API for ergonomic state machine construction.
//!
//! Composition roots use the builder to wire a catalog, the configured
//! default style and any subscribers into one [`crate::store::OptionsStateMachine`].

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::OptionsStateMachineBuilder;
