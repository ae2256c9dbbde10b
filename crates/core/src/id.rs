//! Item identifiers.
//!
//! An [`ItemId`] is either a client placeholder (creation time in unix
//! milliseconds) or a key assigned by the store. Both end up in request paths
//! (`/shop/{id}.json`), so construction rejects anything the store would not
//! accept as a key.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Characters the store forbids in keys. `/` would also escape the item path.
const RESERVED: &[char] = &['/', '.', '#', '$', '[', ']'];

/// Identifier of a shopping list item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Placeholder id for an item that has not reached the store yet.
    ///
    /// The store replaces it with its own key on the first round-trip.
    pub fn placeholder() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(raw: &str) -> Result<(), DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_id("ItemId: empty"));
        }
        if let Some(c) = raw.chars().find(|c| RESERVED.contains(c) || c.is_control()) {
            return Err(DomainError::invalid_id(format!(
                "ItemId: reserved character {c:?} in {raw:?}"
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
