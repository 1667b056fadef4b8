use serde::{Deserialize, Serialize};

use crate::event_dispatch::DomainEvent;
use super::aggregate::Product;

// ============================================================================
// Product Domain Events
// ============================================================================

/// Product Created - a product became available
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductCreated {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl DomainEvent for ProductCreated {
    fn event_name() -> &'static str { "ProductCreatedEvent" }
}

impl From<&Product> for ProductCreated {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

/// Product Price Changed - carries both prices
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductPriceChanged {
    pub id: String,
    pub name: String,
    pub old_price: f64,
    pub new_price: f64,
}

impl DomainEvent for ProductPriceChanged {
    fn event_name() -> &'static str { "ProductPriceChangedEvent" }
}

impl ProductPriceChanged {
    pub fn new(product: &Product, old_price: f64) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            old_price,
            new_price: product.price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_created_payload() {
        let product = Product::new("p1", "Product 1", 10.0).unwrap();
        let event = ProductCreated::from(&product).to_event().unwrap();

        assert_eq!(event.name(), "ProductCreatedEvent");
        assert_eq!(
            event.payload(),
            &json!({ "id": "p1", "name": "Product 1", "price": 10.0 })
        );
    }

    #[test]
    fn test_price_changed_snapshot() {
        let mut product = Product::new("p1", "Product 1", 10.0).unwrap();
        product.change_price(12.5).unwrap();

        let payload = ProductPriceChanged::new(&product, 10.0);
        assert_eq!(payload.old_price, 10.0);
        assert_eq!(payload.new_price, 12.5);
    }
}
