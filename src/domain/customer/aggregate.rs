use serde::{Deserialize, Serialize};

use crate::domain::repository::Entity;
use super::value_objects::Address;
use super::errors::CustomerError;

// ============================================================================
// Customer Entity - Business Logic
// ============================================================================
//
// The entity enforces its own invariants and never publishes events; the
// command handler snapshots it into events after each change.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activation requires an address on file
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::MissingAddress);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) -> Result<(), CustomerError> {
        if !points.is_finite() || points < 0.0 {
            return Err(CustomerError::InvalidRewardPoints(points));
        }
        self.reward_points += points;
        Ok(())
    }
}

impl Entity for Customer {
    const KIND: &'static str = "Customer";

    fn entity_id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
