// ============================================================================
// E-commerce Domain Model with In-Process Domain Events
// ============================================================================
//
// - event_dispatch: events, handlers and the synchronous dispatcher
// - domain: customers, products, orders, their events and command handlers
// - infrastructure: in-memory repository implementation
// - metrics: Prometheus counters for dispatch activity
//
// ============================================================================

pub mod event_dispatch;
pub mod domain;
pub mod infrastructure;
pub mod metrics;
