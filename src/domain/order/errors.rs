// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderError {
    #[error("Order id cannot be empty")]
    EmptyId,

    #[error("Customer id cannot be empty")]
    EmptyCustomerId,

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Order item id cannot be empty")]
    EmptyItemId,

    #[error("Order item {0} must reference a product")]
    EmptyProductId(String),

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Invalid item price: {0}")]
    InvalidPrice(f64),

    #[error("Customer rejected reward points: {0}")]
    RewardPoints(#[from] crate::domain::customer::CustomerError),
}
