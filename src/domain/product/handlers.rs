use crate::event_dispatch::{Event, EventHandler};
use super::events::ProductCreated;

/// Announces a newly created product by e-mail
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let product: ProductCreated = event.payload_as()?;
        tracing::info!(
            product_id = %product.id,
            price = product.price,
            "Sending email about new product {}",
            product.name
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreatedHandler"
    }
}
