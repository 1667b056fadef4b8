// ============================================================================
// Domain Services - Rules that span several entities
// ============================================================================

pub mod order_service;
pub mod product_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
