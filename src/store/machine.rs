//! State machine that holds the current options snapshot.

use crate::config::{ConfigError, OptionsConfig};
use crate::core::{reduce, Action, OptionsState, StyleCatalog};
use crate::store::log::{DispatchLog, DispatchRecord};
use crate::store::subscriber::{Subscriber, SubscriptionId};
use chrono::Utc;
use std::sync::Arc;

/// Holds the latest `OptionsState` and replaces it on every accepted action.
///
/// Dispatch is synchronous: each action is reduced to completion before the
/// next one is accepted, in the order the caller delivers them.
pub struct OptionsStateMachine {
    current: Arc<OptionsState>,
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
    next_subscription: u64,
    log: DispatchLog,
}

impl OptionsStateMachine {
    /// Create a machine in its initial state.
    ///
    /// An unknown `default_style_name` falls back to the first catalog
    /// entry with a warning.
    pub fn new(catalog: StyleCatalog, default_style_name: &str) -> Self {
        Self::with_log(catalog, default_style_name, DispatchLog::new())
    }

    pub(crate) fn with_log(
        catalog: StyleCatalog,
        default_style_name: &str,
        log: DispatchLog,
    ) -> Self {
        Self {
            current: Arc::new(OptionsState::initial(catalog, default_style_name)),
            subscribers: Vec::new(),
            next_subscription: 0,
            log,
        }
    }

    /// Create a machine from configuration.
    pub fn from_config(config: &OptionsConfig) -> Result<Self, ConfigError> {
        let catalog = config.catalog()?;
        Ok(Self::with_log(
            catalog,
            &config.default_style_name,
            DispatchLog::with_limit(config.dispatch_log_limit),
        ))
    }

    /// Current snapshot (pure).
    pub fn state(&self) -> &Arc<OptionsState> {
        &self.current
    }

    /// Owned handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<OptionsState> {
        Arc::clone(&self.current)
    }

    /// Dispatch log (pure).
    pub fn log(&self) -> &DispatchLog {
        &self.log
    }

    /// Apply `action` and notify subscribers if the state changed.
    ///
    /// Returns whether the snapshot was replaced.
    pub fn dispatch<A>(&mut self, action: &A) -> bool
    where
        A: Action + ?Sized,
    {
        let next = reduce(&self.current, action);
        let changed = !Arc::ptr_eq(&next, &self.current);

        tracing::debug!(action = action.kind(), changed, "Dispatched action");

        self.log = self.log.record(DispatchRecord {
            kind: action.kind().to_string(),
            changed,
            timestamp: Utc::now(),
        });

        if changed {
            self.current = next;
            for (_, subscriber) in &self.subscribers {
                subscriber.on_change(&self.current);
            }
        }

        changed
    }

    /// Register a subscriber. Subscribers are notified in registration order.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: Subscriber + 'static,
    {
        self.subscribe_boxed(Box::new(subscriber))
    }

    pub(crate) fn subscribe_boxed(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for OptionsStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsStateMachine")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .field("log", &self.log)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionsAction, StyleOption};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> StyleCatalog {
        StyleCatalog::new(vec![
            StyleOption::raster("OpenStreetMap", ["https://a/{z}/{x}/{y}.png"], "osm"),
            StyleOption::raster("Terrain", ["https://b/{z}/{x}/{y}.png"], "cyclosm"),
            StyleOption::raster("Satellite", ["https://c/{z}/{y}/{x}"], "esri"),
        ])
        .unwrap()
    }

    #[test]
    fn dispatch_replaces_state_and_reports_change() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");
        let before = machine.snapshot();

        assert!(machine.dispatch(&OptionsAction::ToggleRoutingGraph { enabled: true }));
        assert!(!Arc::ptr_eq(&before, machine.state()));
        assert!(machine.state().routing_graph_visible());
        assert!(!before.routing_graph_visible());
    }

    #[test]
    fn noop_dispatch_keeps_snapshot() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");
        let before = machine.snapshot();

        assert!(!machine.dispatch(&OptionsAction::select_layer("Nonexistent")));
        assert!(Arc::ptr_eq(&before, machine.state()));
    }

    #[test]
    fn subscribers_are_notified_in_order_only_on_change() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        machine.subscribe(move |state: &Arc<OptionsState>| {
            first
                .borrow_mut()
                .push(format!("first:{}", state.selected_style().name));
        });
        let second = Rc::clone(&seen);
        machine.subscribe(move |state: &Arc<OptionsState>| {
            second
                .borrow_mut()
                .push(format!("second:{}", state.selected_style().name));
        });

        machine.dispatch(&OptionsAction::select_layer("Satellite"));
        machine.dispatch(&OptionsAction::select_layer("Nonexistent"));

        assert_eq!(
            *seen.borrow(),
            vec!["first:Satellite".to_string(), "second:Satellite".to_string()]
        );
    }

    #[test]
    fn toggle_to_current_value_notifies_nobody() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");
        let before = machine.snapshot();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        machine.subscribe(move |_: &Arc<OptionsState>| *counter.borrow_mut() += 1);

        assert!(!machine.dispatch(&OptionsAction::ToggleRoutingGraph { enabled: false }));
        assert!(Arc::ptr_eq(&before, machine.state()));
        assert_eq!(*calls.borrow(), 0);
        assert!(!machine.log().last().unwrap().changed);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = machine.subscribe(move |_: &Arc<OptionsState>| *counter.borrow_mut() += 1);

        machine.dispatch(&OptionsAction::MapIsLoaded);
        assert!(machine.unsubscribe(id));
        assert!(!machine.unsubscribe(id));
        machine.dispatch(&OptionsAction::ToggleUrbanDensityLayer { enabled: true });

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(machine.subscriber_count(), 0);
    }

    #[test]
    fn dispatch_is_logged_with_change_flag() {
        let mut machine = OptionsStateMachine::new(catalog(), "Terrain");

        machine.dispatch(&OptionsAction::MapIsLoaded);
        machine.dispatch(&OptionsAction::MapIsLoaded);

        let records = machine.log().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "MapIsLoaded");
        assert!(records[0].changed);
        assert!(!records[1].changed);
    }

    #[test]
    fn from_config_uses_builtin_catalog_and_log_limit() {
        let config = OptionsConfig {
            default_style_name: "Satellite".to_string(),
            styles: None,
            dispatch_log_limit: 1,
        };
        let mut machine = OptionsStateMachine::from_config(&config).unwrap();

        machine.dispatch(&OptionsAction::MapIsLoaded);
        machine.dispatch(&OptionsAction::ToggleRoutingGraph { enabled: true });

        assert_eq!(machine.state().selected_style().name, "Satellite");
        assert_eq!(machine.state().available_styles().len(), 3);
        assert_eq!(machine.log().records().len(), 1);
    }

    #[test]
    fn from_config_rejects_invalid_catalog() {
        let config = OptionsConfig {
            default_style_name: "A".to_string(),
            styles: Some(Vec::new()),
            dispatch_log_limit: 8,
        };

        assert!(matches!(
            OptionsStateMachine::from_config(&config),
            Err(ConfigError::InvalidCatalog(_))
        ));
    }
}
