use crate::event_dispatch::{Event, EventHandler};
use super::events::{CustomerAddressChanged, CustomerCreated};

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First console log reaction to a new customer
pub struct SendConsoleLog1Handler;

impl EventHandler for SendConsoleLog1Handler {
    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let payload: CustomerCreated = event.payload_as()?;
        tracing::info!(
            customer_id = %payload.id,
            "This is the first console.log of the event: {}",
            event.name()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLog1Handler"
    }
}

/// Second console log reaction to a new customer
pub struct SendConsoleLog2Handler;

impl EventHandler for SendConsoleLog2Handler {
    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let payload: CustomerCreated = event.payload_as()?;
        tracing::info!(
            customer_id = %payload.id,
            "This is the second console.log of the event: {}",
            event.name()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLog2Handler"
    }
}

pub struct SendConsoleLogAddressHandler;

impl SendConsoleLogAddressHandler {
    /// The line logged for an address change
    pub fn message(payload: &CustomerAddressChanged) -> String {
        let address = &payload.address;
        format!(
            "Customer address {}, {} changed to: {}, {}, {} {}",
            payload.id, payload.name, address.street, address.number, address.zip, address.city
        )
    }
}

impl EventHandler for SendConsoleLogAddressHandler {
    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let payload: CustomerAddressChanged = event.payload_as()?;
        tracing::info!("{}", Self::message(&payload));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SendConsoleLogAddressHandler"
    }
}
