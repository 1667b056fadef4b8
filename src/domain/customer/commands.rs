use super::value_objects::Address;

// ============================================================================
// Customer Domain Commands
// ============================================================================

#[derive(Debug, Clone)]
pub enum CustomerCommand {
    CreateCustomer {
        customer_id: String,
        name: String,
    },
    ChangeAddress {
        customer_id: String,
        address: Address,
    },
    ActivateCustomer {
        customer_id: String,
    },
    DeactivateCustomer {
        customer_id: String,
    },
}
