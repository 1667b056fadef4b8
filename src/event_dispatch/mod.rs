// ============================================================================
// Domain Event Dispatch Infrastructure
// ============================================================================
//
// Generic, in-process publish/subscribe for domain events.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

mod core;
mod dispatcher;

pub use self::core::*;
pub use self::dispatcher::*;
