//! `shoplist-core`: shopping list domain.
//!
//! This crate contains **pure domain** types (no HTTP, no runtime). The store
//! client and the entry form both speak in these types.

pub mod collation;
pub mod error;
pub mod id;
pub mod item;
pub mod list;

pub use collation::compare_names;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use item::{Item, StoredItem};
pub use list::{ItemList, Snapshot};
