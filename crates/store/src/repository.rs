//! Repository port for the shopping list.

use async_trait::async_trait;
use shoplist_core::{Item, ItemId, ItemList};

use crate::error::StoreError;

/// CRUD over the item collection.
///
/// Writes never patch a local copy. Implementations that keep subscribers
/// (see [`crate::ShopClient`]) refresh them with a full fetch after each
/// successful write.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Read the whole collection, sorted by name.
    async fn fetch_all(&self) -> Result<ItemList, StoreError>;

    /// Store a new item. The submitted `id` is a placeholder; the key the
    /// store assigned is returned when its answer carried one.
    ///
    /// Success is decided by the store accepting the write, not by the key.
    async fn create(&self, item: &Item) -> Result<Option<ItemId>, StoreError>;

    /// Replace every field of the item stored under `item.id`.
    async fn update(&self, item: &Item) -> Result<(), StoreError>;

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError>;

    /// Flip the acquired flag, keeping every other field as given.
    async fn set_checked(&self, item: &Item, checked: bool) -> Result<(), StoreError> {
        self.update(&item.clone().with_checked(checked)).await
    }
}
