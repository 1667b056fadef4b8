use std::sync::Arc;
use anyhow::Result;

use crate::domain::repository::Repository;
use crate::event_dispatch::{DomainEvent, EventDispatcher};

use super::aggregate::Customer;
use super::commands::CustomerCommand;
use super::events::{CustomerAddressChanged, CustomerCreated};

// ============================================================================
// Customer Command Handler
// ============================================================================
//
// Orchestrates: Command → Entity → Repository → Event → Dispatcher
//
// The entity is persisted before the event is built from its new state, so
// handlers only ever hear about changes that were stored.
//
// ============================================================================

pub struct CustomerCommandHandler {
    repository: Arc<dyn Repository<Customer>>,
    dispatcher: Arc<EventDispatcher>,
}

impl CustomerCommandHandler {
    pub fn new(repository: Arc<dyn Repository<Customer>>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { repository, dispatcher }
    }

    /// Handle a command and return the customer's resulting state
    pub async fn handle(&self, command: CustomerCommand) -> Result<Customer> {
        match command {
            CustomerCommand::CreateCustomer { customer_id, name } => {
                let customer = Customer::new(customer_id, name)?;
                self.repository.create(&customer).await?;

                tracing::info!(customer_id = %customer.id(), "Customer created");
                self.dispatcher.notify(&CustomerCreated::from(&customer).to_event()?)?;

                Ok(customer)
            }

            CustomerCommand::ChangeAddress { customer_id, address } => {
                let mut customer = self.repository.find(&customer_id).await?;
                customer.change_address(address.clone());
                self.repository.update(&customer).await?;

                tracing::info!(customer_id = %customer.id(), address = %address, "Customer address changed");
                self.dispatcher
                    .notify(&CustomerAddressChanged::new(&customer, &address).to_event()?)?;

                Ok(customer)
            }

            CustomerCommand::ActivateCustomer { customer_id } => {
                let mut customer = self.repository.find(&customer_id).await?;
                customer.activate()?;
                self.repository.update(&customer).await?;

                tracing::info!(customer_id = %customer.id(), "Customer activated");
                Ok(customer)
            }

            CustomerCommand::DeactivateCustomer { customer_id } => {
                let mut customer = self.repository.find(&customer_id).await?;
                customer.deactivate();
                self.repository.update(&customer).await?;

                tracing::info!(customer_id = %customer.id(), "Customer deactivated");
                Ok(customer)
            }
        }
    }
}
