//! `shoplist-store`: the item store client.
//!
//! **Responsibility:** single point of truth for the remote shopping list.
//!
//! This crate provides:
//! - the [`ItemRepository`] port (fetch all, create, update, delete)
//! - [`ShopClient`], the REST client for the remote JSON store
//! - [`InMemoryItemRepository`] for tests/dev
//! - the [`Notifier`] capability the host implements to show confirmations
//!
//! The remote store is the authority: every successful write is followed by a
//! full re-fetch, never by a local patch.

pub mod config;
pub mod error;
pub mod firebase;
pub mod in_memory;
pub mod notify;
pub mod repository;

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use firebase::{ItemsUpdate, ShopClient};
pub use in_memory::{InMemoryItemRepository, RecordedCall};
pub use notify::{LogNotifier, Notice, NoticePosition, Notifier};
pub use repository::ItemRepository;
