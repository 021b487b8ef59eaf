//! Builder for constructing options state machines.

use crate::builder::error::BuildError;
use crate::core::{StyleCatalog, StyleOption};
use crate::store::{DispatchLog, OptionsStateMachine, Subscriber};

enum CatalogSource {
    Catalog(StyleCatalog),
    Styles(Vec<StyleOption>),
}

/// Builder for constructing an [`OptionsStateMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use map_options::builder::OptionsStateMachineBuilder;
/// use map_options::core::StyleCatalog;
///
/// let machine = OptionsStateMachineBuilder::new()
///     .catalog(StyleCatalog::builtin())
///     .default_style("Terrain")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state().selected_style().name, "Terrain");
/// ```
#[derive(Default)]
pub struct OptionsStateMachineBuilder {
    catalog: Option<CatalogSource>,
    default_style: Option<String>,
    log_limit: Option<usize>,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl OptionsStateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already validated catalog.
    pub fn catalog(mut self, catalog: StyleCatalog) -> Self {
        self.catalog = Some(CatalogSource::Catalog(catalog));
        self
    }

    /// Use these styles as the catalog. They are validated on `build`.
    pub fn styles(mut self, styles: Vec<StyleOption>) -> Self {
        self.catalog = Some(CatalogSource::Styles(styles));
        self
    }

    /// Set the name of the initially selected style (required).
    pub fn default_style(mut self, name: impl Into<String>) -> Self {
        self.default_style = Some(name.into());
        self
    }

    /// Set how many dispatches the machine keeps in its log.
    pub fn log_limit(mut self, limit: usize) -> Self {
        self.log_limit = Some(limit);
        self
    }

    /// Register a subscriber before the first dispatch.
    pub fn subscriber<S>(mut self, subscriber: S) -> Self
    where
        S: Subscriber + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the catalog is invalid.
    pub fn build(self) -> Result<OptionsStateMachine, BuildError> {
        let catalog = match self.catalog.ok_or(BuildError::MissingCatalog)? {
            CatalogSource::Catalog(catalog) => catalog,
            CatalogSource::Styles(styles) => StyleCatalog::new(styles)?,
        };
        let default_style = self.default_style.ok_or(BuildError::MissingDefaultStyle)?;
        let log = self
            .log_limit
            .map_or_else(DispatchLog::new, DispatchLog::with_limit);

        let mut machine = OptionsStateMachine::with_log(catalog, &default_style, log);
        for subscriber in self.subscribers {
            machine.subscribe_boxed(subscriber);
        }

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionsAction, OptionsState};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    fn builder_requires_catalog() {
        let result = OptionsStateMachineBuilder::new()
            .default_style("Terrain")
            .build();

        assert!(matches!(result, Err(BuildError::MissingCatalog)));
    }

    #[test]
    fn builder_requires_default_style() {
        let result = OptionsStateMachineBuilder::new()
            .catalog(StyleCatalog::builtin())
            .build();

        assert!(matches!(result, Err(BuildError::MissingDefaultStyle)));
    }

    #[test]
    fn builder_validates_raw_styles() {
        let result = OptionsStateMachineBuilder::new()
            .styles(Vec::new())
            .default_style("Terrain")
            .build();

        assert!(matches!(result, Err(BuildError::InvalidCatalog(_))));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);

        let mut machine = OptionsStateMachineBuilder::new()
            .styles(vec![
                StyleOption::raster("Base", ["https://a/{z}/{x}/{y}.png"], "a"),
                StyleOption::vector("Streets", "https://b/style.json", "b"),
            ])
            .default_style("Streets")
            .log_limit(4)
            .subscriber(move |_: &Arc<OptionsState>| flag.set(true))
            .build()
            .unwrap();

        assert_eq!(machine.state().selected_style().name, "Streets");
        assert_eq!(machine.log().limit(), 4);
        assert_eq!(machine.subscriber_count(), 1);

        machine.dispatch(&OptionsAction::MapIsLoaded);
        assert!(notified.get());
    }
}
