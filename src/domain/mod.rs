// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each bounded context has its own subdirectory with:
// - Value objects
// - Events and event handlers
// - Commands
// - Errors
// - Entity implementation
// - Command handler
//
// Entities never publish events themselves; command handlers do, through
// the dispatcher they are given.
//
// ============================================================================

pub mod customer;
pub mod product;
pub mod order;
pub mod services;
pub mod repository;
