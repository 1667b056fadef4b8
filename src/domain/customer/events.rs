use serde::{Deserialize, Serialize};

use crate::event_dispatch::DomainEvent;
use super::aggregate::Customer;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================
//
// Payloads are snapshots taken from the customer after the change; they
// hold plain values only so handlers never depend on the entity.
//
// ============================================================================

/// Customer Created - a new customer entered the system
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

impl DomainEvent for CustomerCreated {
    fn event_name() -> &'static str { "CustomerCreatedEvent" }
}

impl From<&Customer> for CustomerCreated {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
        }
    }
}

/// Customer Address Changed - the customer moved
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: AddressSnapshot,
}

impl DomainEvent for CustomerAddressChanged {
    fn event_name() -> &'static str { "CustomerAddressChangedEvent" }
}

impl CustomerAddressChanged {
    pub fn new(customer: &Customer, address: &Address) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            address: address.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AddressSnapshot {
    pub street: String,
    pub number: String,
    pub city: String,
    pub zip: String,
}

impl From<&Address> for AddressSnapshot {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number().to_string(),
            city: address.city().to_string(),
            zip: address.zip().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_created_payload_shape() {
        let event = CustomerCreated {
            id: "123".to_string(),
            name: "Alguem Teste FullCycle".to_string(),
        }
        .to_event()
        .unwrap();

        assert_eq!(event.name(), "CustomerCreatedEvent");
        assert_eq!(
            event.payload(),
            &json!({ "id": "123", "name": "Alguem Teste FullCycle" })
        );
    }

    #[test]
    fn test_address_changed_snapshot_from_entity() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let address = Address::new("Rua do Wesley", 999, "12345-678", "Sao Paulo - SP").unwrap();
        customer.change_address(address.clone());

        let event = CustomerAddressChanged::new(&customer, &address).to_event().unwrap();

        assert_eq!(event.name(), "CustomerAddressChangedEvent");
        assert_eq!(
            event.payload(),
            &json!({
                "id": "c1",
                "name": "Customer 1",
                "address": {
                    "street": "Rua do Wesley",
                    "number": "999",
                    "city": "Sao Paulo - SP",
                    "zip": "12345-678"
                }
            })
        );
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(CustomerCreated::event_name(), CustomerAddressChanged::event_name());
    }
}
