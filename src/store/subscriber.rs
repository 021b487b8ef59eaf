//! Change subscribers.

use crate::core::OptionsState;
use std::sync::Arc;

/// Receives the new snapshot after every dispatch that changed it.
///
/// Any `Fn(&Arc<OptionsState>)` closure is a subscriber.
pub trait Subscriber {
    fn on_change(&self, state: &Arc<OptionsState>);
}

impl<F> Subscriber for F
where
    F: Fn(&Arc<OptionsState>),
{
    fn on_change(&self, state: &Arc<OptionsState>) {
        self(state)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
