//! Imperative shell around the pure core.
//!
//! The store holds the single live `OptionsState`, applies dispatched
//! actions through `core::reduce`, and notifies subscribers when the
//! snapshot is replaced.

mod log;
mod machine;
mod subscriber;

pub use log::{DispatchLog, DispatchRecord, DEFAULT_LOG_LIMIT};
pub use machine::OptionsStateMachine;
pub use subscriber::{Subscriber, SubscriptionId};
