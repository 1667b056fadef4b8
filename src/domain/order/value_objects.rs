use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A product line inside an order, priced at the moment it was added
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::EmptyItemId);
        }
        if self.product_id.trim().is_empty() {
            return Err(OrderError::EmptyProductId(self.id.clone()));
        }
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(OrderError::InvalidPrice(self.price));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_creation() {
        let item = OrderItem::new("i1", "Product 1", 100.0, "p1", 2).unwrap();

        assert_eq!(item.id(), "i1");
        assert_eq!(item.name(), "Product 1");
        assert_eq!(item.product_id(), "p1");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.total(), 200.0);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = OrderItem::new("i1", "Product 1", 100.0, "p1", 0);
        assert_eq!(result.unwrap_err(), OrderError::InvalidQuantity(0));
    }

    #[test]
    fn test_item_requires_product() {
        let result = OrderItem::new("i1", "Product 1", 100.0, "", 1);
        assert_eq!(result.unwrap_err(), OrderError::EmptyProductId("i1".to_string()));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(OrderItem::new("i1", "Product 1", -0.5, "p1", 1).is_err());
    }
}
