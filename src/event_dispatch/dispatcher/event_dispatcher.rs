use std::collections::HashMap;
use std::sync::Arc;

use crate::event_dispatch::core::{DomainEvent, Event, EventHandler};
use crate::metrics::Metrics;
use super::config::{DispatcherConfig, FailurePolicy};
use super::errors::{DispatchError, HandlerFailure};

// ============================================================================
// Event Dispatcher - Registry + Synchronous Fan-out
// ============================================================================
//
// Maps event names to an ordered list of handlers. `notify` runs every
// handler registered for the event's name, in registration order, on the
// calling thread, before returning.
//
// Registry mutation takes `&mut self` and `notify` takes `&self`, so a
// handler can never change the registry while it is being iterated.
//
// ============================================================================

pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
    config: DispatcherConfig,
    metrics: Option<Arc<Metrics>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: HashMap::new(),
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Append `handler` to the list for `event_name`.
    ///
    /// The same handler may be registered more than once; it is then invoked
    /// once per registration.
    pub fn register(
        &mut self,
        event_name: &str,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), DispatchError> {
        if event_name.trim().is_empty() {
            return Err(DispatchError::EmptyEventName);
        }

        self.insert(event_name, handler);
        Ok(())
    }

    /// Register `handler` under the fixed name of payload type `E`
    pub fn register_for<E: DomainEvent>(&mut self, handler: Arc<dyn EventHandler>) {
        self.insert(E::event_name(), handler);
    }

    fn insert(&mut self, event_name: &str, handler: Arc<dyn EventHandler>) {
        tracing::debug!(
            event_name = %event_name,
            handler = handler.name(),
            "Registering event handler"
        );

        let list = self.handlers.entry(event_name.to_string()).or_default();
        list.push(handler);
        let count = list.len();

        if let Some(metrics) = &self.metrics {
            metrics.set_registered(event_name, count);
        }
    }

    /// Remove the first registration of `handler` for `event_name`.
    ///
    /// Handlers are matched by identity (`Arc::ptr_eq`). Unknown names or
    /// handlers are ignored.
    pub fn unregister(&mut self, event_name: &str, handler: &Arc<dyn EventHandler>) {
        let Some(list) = self.handlers.get_mut(event_name) else {
            return;
        };

        if let Some(position) = list.iter().position(|h| Arc::ptr_eq(h, handler)) {
            list.remove(position);
            tracing::debug!(
                event_name = %event_name,
                handler = handler.name(),
                "Unregistered event handler"
            );
        }

        let count = list.len();
        if count == 0 {
            self.handlers.remove(event_name);
        }

        if let Some(metrics) = &self.metrics {
            metrics.set_registered(event_name, count);
        }
    }

    /// Drop every registration for every event name
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_names = self.handlers.len(), "Clearing event handler registry");
        self.handlers.clear();

        if let Some(metrics) = &self.metrics {
            metrics.clear_registered();
        }
    }

    /// Handlers registered for `event_name`, in registration order
    pub fn get_handlers_for(&self, event_name: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.get_handlers_for(event_name).len()
    }

    /// Event names that currently have at least one handler
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke every handler registered for `event.name()`, in order.
    ///
    /// An event nobody listens to is not an error. Handler failures follow
    /// the configured `FailurePolicy`.
    pub fn notify(&self, event: &Event) -> Result<(), DispatchError> {
        let event_name = event.name();

        if let Some(metrics) = &self.metrics {
            metrics.record_notify(event_name);
        }

        let handlers = self.get_handlers_for(event_name);
        if handlers.is_empty() {
            if self.config.warn_on_unhandled {
                tracing::warn!(event_name = %event_name, "No handlers registered for event");
            } else {
                tracing::debug!(event_name = %event_name, "No handlers registered for event");
            }
            return Ok(());
        }

        tracing::debug!(
            event_name = %event_name,
            event_id = %event.event_id(),
            handlers = handlers.len(),
            "Notifying event handlers"
        );

        let mut failures = Vec::new();

        for handler in handlers {
            let result = handler.handle(event);

            if let Some(metrics) = &self.metrics {
                metrics.record_handler(event_name, handler.name(), result.is_ok());
            }

            let Err(error) = result else {
                continue;
            };

            tracing::warn!(
                event_name = %event_name,
                handler = handler.name(),
                error = %error,
                "Event handler failed"
            );

            match self.config.failure_policy {
                FailurePolicy::FailFast => {
                    return Err(DispatchError::HandlerFailed {
                        event_name: event_name.to_string(),
                        handler: handler.name(),
                        error,
                    });
                }
                FailurePolicy::ContinueOnError => {
                    failures.push(HandlerFailure {
                        handler: handler.name(),
                        error,
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::HandlersFailed {
                event_name: event_name.to_string(),
                failures,
            })
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
