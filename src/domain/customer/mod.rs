// ============================================================================
// Customer Domain - Customer Entity, Events and Handlers
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreated, CustomerAddressChanged)
// - Event handlers (console log reactions)
// - Commands (CreateCustomer, ChangeAddress, etc.)
// - Errors (CustomerError enum)
// - Entity (Customer with business rules)
// - Command Handler (CustomerCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod handlers;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use handlers::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
