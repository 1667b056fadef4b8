use serde::{Deserialize, Serialize};

use crate::domain::repository::Entity;
use super::value_objects::OrderItem;
use super::errors::OrderError;

// ============================================================================
// Order Entity - Domain Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.trim().is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Replace the order's items; the order must keep at least one
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        self.items = items;
        Ok(())
    }
}

impl Entity for Order {
    const KIND: &'static str = "Order";

    fn entity_id(&self) -> &str {
        &self.id
    }
}
