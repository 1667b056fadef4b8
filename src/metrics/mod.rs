use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for event dispatch
// ============================================================================
//
// Provides metrics for:
// - Events passed to notify, by event name
// - Handler invocations and failures, by event name and handler
// - Registered handlers per event name
//
// Metrics are rendered in the Prometheus text format on demand; there is no
// HTTP exporter.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
    pub registered_handlers: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("events_notified_total", "Total events passed to notify"),
            &["event_name"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new("handler_invocations_total", "Total handler invocations"),
            &["event_name", "handler"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            Opts::new("handler_failures_total", "Total handler invocations that returned an error"),
            &["event_name", "handler"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        let registered_handlers = IntGaugeVec::new(
            Opts::new("registered_handlers", "Handlers currently registered per event name"),
            &["event_name"],
        )?;
        registry.register(Box::new(registered_handlers.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            handler_invocations,
            handler_failures,
            registered_handlers,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_notify(&self, event_name: &str) {
        self.events_notified.with_label_values(&[event_name]).inc();
    }

    /// Helper to record one handler invocation and its outcome
    pub fn record_handler(&self, event_name: &str, handler: &str, success: bool) {
        self.handler_invocations.with_label_values(&[event_name, handler]).inc();
        if !success {
            self.handler_failures.with_label_values(&[event_name, handler]).inc();
        }
    }

    pub fn set_registered(&self, event_name: &str, count: usize) {
        self.registered_handlers
            .with_label_values(&[event_name])
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn clear_registered(&self) {
        self.registered_handlers.reset();
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
