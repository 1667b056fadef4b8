// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("Product id cannot be empty")]
    EmptyId,

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Price must be a non-negative number: {0}")]
    InvalidPrice(f64),

    #[error("Invalid price increase percentage: {0}")]
    InvalidPercentage(f64),
}
