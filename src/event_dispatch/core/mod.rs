// ============================================================================
// Event Dispatch Core - Events and Handlers
// ============================================================================
//
// Generic abstractions shared by every bounded context:
// - Event: immutable name + timestamp + payload snapshot
// - DomainEvent: typed payload with a fixed event name
// - EventHandler: unit of reaction logic
//
// No Customer, Product or Order code lives here.
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{DomainEvent, Event, EventError};
pub use handler::EventHandler;
