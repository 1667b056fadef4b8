use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repository::{Entity, Repository, RepositoryError};

// ============================================================================
// In-Memory Repository
// ============================================================================
//
// Keeps entities in creation order behind a tokio RwLock. Used by the demo
// binary and tests in place of a database-backed repository.
//
// ============================================================================

pub struct InMemoryRepository<T: Entity> {
    entries: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;

        if entries.iter().any(|e| e.entity_id() == entity.entity_id()) {
            return Err(RepositoryError::AlreadyExists {
                kind: T::KIND,
                id: entity.entity_id().to_string(),
            });
        }

        tracing::debug!(kind = T::KIND, id = %entity.entity_id(), "Storing entity");
        entries.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;

        let slot = entries
            .iter_mut()
            .find(|e| e.entity_id() == entity.entity_id())
            .ok_or_else(|| Self::not_found(entity.entity_id()))?;

        tracing::debug!(kind = T::KIND, id = %entity.entity_id(), "Updating entity");
        *slot = entity.clone();
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<T, RepositoryError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.entity_id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.entries.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Address, Customer};
    use crate::domain::order::{Order, OrderItem};
    use crate::domain::product::Product;

    fn customer() -> Customer {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street", 1, "Zip", "City").unwrap());
        customer
    }

    fn order(id: &str, item_id: &str, product: &Product, quantity: u32) -> Order {
        let item = OrderItem::new(item_id, product.name(), product.price(), product.id(), quantity)
            .unwrap();
        Order::new(id, "c1", vec![item]).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_customer() {
        let repository = InMemoryRepository::<Customer>::new();
        let customer = customer();

        repository.create(&customer).await.unwrap();

        let found = repository.find("c1").await.unwrap();
        assert_eq!(found, customer);
        assert_eq!(found.address().map(Address::street), Some("Street"));
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let repository = InMemoryRepository::<Customer>::new();
        repository.create(&customer()).await.unwrap();

        let err = repository.create(&customer()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { kind: "Customer", .. }));
    }

    #[tokio::test]
    async fn test_create_order() {
        let repository = InMemoryRepository::<Order>::new();
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        repository.create(&order("o1", "i1", &product, 2)).await.unwrap();

        let stored = repository.find("o1").await.unwrap();
        assert_eq!(stored.customer_id(), "c1");
        assert_eq!(stored.total(), 200.0);
        assert_eq!(stored.items()[0].name(), "Product 1");
        assert_eq!(stored.items()[0].quantity(), 2);
    }

    #[tokio::test]
    async fn test_update_order() {
        let repository = InMemoryRepository::<Order>::new();
        let product = Product::new("p1", "Product 1", 100.0).unwrap();
        repository.create(&order("o1", "i1", &product, 2)).await.unwrap();

        repository.update(&order("o1", "i2", &product, 1)).await.unwrap();

        let updated = repository.find("o1").await.unwrap();
        assert_eq!(updated.total(), 100.0);
        assert_eq!(updated.items().len(), 1);
        assert_eq!(updated.items()[0].id(), "i2");
    }

    #[tokio::test]
    async fn test_find_order() {
        let repository = InMemoryRepository::<Order>::new();
        let product = Product::new("p1", "Product 1", 50.0).unwrap();
        repository.create(&order("o1", "i1", &product, 3)).await.unwrap();

        let found = repository.find("o1").await.unwrap();
        assert_eq!(found.id(), "o1");
        assert_eq!(found.total(), 150.0);
        assert_eq!(found.items().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_orders_in_creation_order() {
        let repository = InMemoryRepository::<Order>::new();
        let product = Product::new("p1", "Product 1", 80.0).unwrap();
        repository.create(&order("o1", "i1", &product, 1)).await.unwrap();
        repository.create(&order("o2", "i2", &product, 2)).await.unwrap();

        let orders = repository.find_all().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id(), "o1");
        assert_eq!(orders[1].id(), "o2");
    }

    #[tokio::test]
    async fn test_missing_entities_are_not_found() {
        let repository = InMemoryRepository::<Product>::new();
        let product = Product::new("p1", "Product 1", 10.0).unwrap();

        assert!(matches!(
            repository.find("p1").await,
            Err(RepositoryError::NotFound { kind: "Product", .. })
        ));
        assert!(matches!(
            repository.update(&product).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
