use std::sync::Arc;
use anyhow::Result;

use crate::domain::repository::Repository;
use crate::event_dispatch::{DomainEvent, EventDispatcher};

use super::aggregate::Product;
use super::commands::ProductCommand;
use super::events::{ProductCreated, ProductPriceChanged};

// ============================================================================
// Product Command Handler
// ============================================================================

pub struct ProductCommandHandler {
    repository: Arc<dyn Repository<Product>>,
    dispatcher: Arc<EventDispatcher>,
}

impl ProductCommandHandler {
    pub fn new(repository: Arc<dyn Repository<Product>>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { repository, dispatcher }
    }

    pub async fn handle(&self, command: ProductCommand) -> Result<Product> {
        match command {
            ProductCommand::CreateProduct { product_id, name, price } => {
                let product = Product::new(product_id, name, price)?;
                self.repository.create(&product).await?;

                tracing::info!(product_id = %product.id(), "Product created");
                self.dispatcher.notify(&ProductCreated::from(&product).to_event()?)?;

                Ok(product)
            }

            ProductCommand::ChangePrice { product_id, price } => {
                let mut product = self.repository.find(&product_id).await?;
                let old_price = product.price();
                product.change_price(price)?;
                self.repository.update(&product).await?;

                tracing::info!(
                    product_id = %product.id(),
                    old_price,
                    new_price = price,
                    "Product price changed"
                );
                self.dispatcher
                    .notify(&ProductPriceChanged::new(&product, old_price).to_event()?)?;

                Ok(product)
            }
        }
    }
}
