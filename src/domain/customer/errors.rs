// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer id cannot be empty")]
    EmptyId,

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    MissingAddress,

    #[error("Street cannot be empty")]
    EmptyStreet,

    #[error("Street number must be greater than zero")]
    InvalidNumber,

    #[error("Zip code cannot be empty")]
    EmptyZip,

    #[error("City cannot be empty")]
    EmptyCity,

    #[error("Invalid reward points: {0}")]
    InvalidRewardPoints(f64),
}
