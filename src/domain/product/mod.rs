// ============================================================================
// Product Domain - Product Entity, Events and Handlers
// ============================================================================

pub mod events;
pub mod handlers;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

pub use events::*;
pub use handlers::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
