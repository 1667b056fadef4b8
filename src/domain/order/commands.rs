use super::value_objects::OrderItem;

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum OrderCommand {
    PlaceOrder {
        order_id: String,
        customer_id: String,
        items: Vec<OrderItem>,
    },
    ChangeItems {
        order_id: String,
        items: Vec<OrderItem>,
    },
}
