use std::sync::Arc;
use anyhow::Result;

use crate::domain::customer::Customer;
use crate::domain::repository::Repository;
use crate::domain::services::OrderService;

use super::aggregate::Order;
use super::commands::OrderCommand;

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Command → OrderService → Order + Customer → Repositories
//
// Orders publish no domain events; placing one credits the customer's
// reward points, which is persisted alongside the order.
//
// ============================================================================

pub struct OrderCommandHandler {
    orders: Arc<dyn Repository<Order>>,
    customers: Arc<dyn Repository<Customer>>,
}

impl OrderCommandHandler {
    pub fn new(orders: Arc<dyn Repository<Order>>, customers: Arc<dyn Repository<Customer>>) -> Self {
        Self { orders, customers }
    }

    pub async fn handle(&self, command: OrderCommand) -> Result<Order> {
        match command {
            OrderCommand::PlaceOrder { order_id, customer_id, items } => {
                let mut customer = self.customers.find(&customer_id).await?;
                let order = OrderService::place_order(&mut customer, order_id, items)?;

                // Order first: a duplicate id is rejected before any points
                // are credited to the customer.
                self.orders.create(&order).await?;
                self.customers.update(&customer).await?;

                tracing::info!(
                    order_id = %order.id(),
                    customer_id = %customer.id(),
                    total = order.total(),
                    reward_points = customer.reward_points(),
                    "Order placed"
                );
                Ok(order)
            }

            OrderCommand::ChangeItems { order_id, items } => {
                let mut order = self.orders.find(&order_id).await?;
                order.change_items(items)?;
                self.orders.update(&order).await?;

                tracing::info!(order_id = %order.id(), total = order.total(), "Order items changed");
                Ok(order)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Address;
    use crate::domain::order::OrderItem;
    use crate::domain::product::Product;
    use crate::infrastructure::InMemoryRepository;

    async fn setup() -> (OrderCommandHandler, Arc<InMemoryRepository<Order>>, Arc<InMemoryRepository<Customer>>) {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street", 1, "Zip", "City").unwrap());

        let customers = Arc::new(InMemoryRepository::<Customer>::new());
        customers.create(&customer).await.unwrap();

        let orders = Arc::new(InMemoryRepository::<Order>::new());
        let handler = OrderCommandHandler::new(orders.clone(), customers.clone());
        (handler, orders, customers)
    }

    fn item_for(product: &Product, id: &str, quantity: u32) -> OrderItem {
        OrderItem::new(id, product.name(), product.price(), product.id(), quantity).unwrap()
    }

    #[tokio::test]
    async fn test_place_order_persists_order_and_points() {
        let (handler, orders, customers) = setup().await;
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        let order = handler
            .handle(OrderCommand::PlaceOrder {
                order_id: "o1".to_string(),
                customer_id: "c1".to_string(),
                items: vec![item_for(&product, "i1", 2)],
            })
            .await
            .unwrap();

        let stored = orders.find("o1").await.unwrap();
        assert_eq!(stored, order);
        assert_eq!(stored.total(), 200.0);
        assert_eq!(stored.items()[0].product_id(), "p1");
        assert_eq!(customers.find("c1").await.unwrap().reward_points(), 100.0);
    }

    #[tokio::test]
    async fn test_place_order_for_unknown_customer_fails() {
        let (handler, orders, _customers) = setup().await;
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        let result = handler
            .handle(OrderCommand::PlaceOrder {
                order_id: "o1".to_string(),
                customer_id: "nobody".to_string(),
                items: vec![item_for(&product, "i1", 1)],
            })
            .await;

        assert!(result.is_err());
        assert!(orders.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_change_items_updates_total() {
        let (handler, orders, _customers) = setup().await;
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        handler
            .handle(OrderCommand::PlaceOrder {
                order_id: "o1".to_string(),
                customer_id: "c1".to_string(),
                items: vec![item_for(&product, "i1", 2)],
            })
            .await
            .unwrap();

        handler
            .handle(OrderCommand::ChangeItems {
                order_id: "o1".to_string(),
                items: vec![item_for(&product, "i2", 1)],
            })
            .await
            .unwrap();

        let updated = orders.find("o1").await.unwrap();
        assert_eq!(updated.total(), 100.0);
        assert_eq!(updated.items().len(), 1);
        assert_eq!(updated.items()[0].id(), "i2");
    }

    #[tokio::test]
    async fn test_duplicate_order_leaves_points_unchanged() {
        let (handler, orders, customers) = setup().await;
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        let place = |quantity| OrderCommand::PlaceOrder {
            order_id: "o1".to_string(),
            customer_id: "c1".to_string(),
            items: vec![item_for(&product, "i1", quantity)],
        };

        handler.handle(place(2)).await.unwrap();
        let result = handler.handle(place(4)).await;

        assert!(result.is_err());
        assert_eq!(orders.find_all().await.unwrap().len(), 1);
        assert_eq!(orders.find("o1").await.unwrap().total(), 200.0);
        assert_eq!(customers.find("c1").await.unwrap().reward_points(), 100.0);
    }
}
