// ============================================================================
// Order Domain - Order Entity and Business Logic
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderItem)
// - Commands (PlaceOrder, ChangeItems)
// - Errors (OrderError enum)
// - Entity (Order with totals and validation)
// - Command Handler (OrderCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
