//! The shopping list item and its stored representation.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::ItemId;

fn default_quantity() -> u32 {
    1
}

/// A shopping list entry.
///
/// Serialized verbatim as the request body for create and update. The store
/// keeps whatever `id` is sent but it is never read back: see [`StoredItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Marks the item as already acquired.
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    /// Build a validated item.
    pub fn new(id: ItemId, name: impl Into<String>, price: f64, quantity: u32) -> DomainResult<Self> {
        let item = Self {
            id,
            name: name.into(),
            price,
            quantity,
            checked: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the field rules a client enforces before writing.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(())
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// `price * quantity` for this line.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// An item as the store holds it under its key.
///
/// Records written by other clients may lack `quantity` or `checked`; those
/// take their defaults. `name` and `price` are required. Any stored `id` field
/// is ignored because the key is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub checked: bool,
}

impl StoredItem {
    /// Attach the store key as the item's identity.
    pub fn into_item(self, key: ItemId) -> Item {
        Item {
            id: key,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            checked: self.checked,
        }
    }
}
