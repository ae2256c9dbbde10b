use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use shoplist_core::{Item, ItemId, ItemList, Snapshot};

use crate::error::StoreError;
use crate::repository::ItemRepository;

/// A call received by [`InMemoryItemRepository`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    FetchAll,
    Create(Item),
    Update(Item),
    Delete(ItemId),
}

#[derive(Debug, Default)]
struct State {
    /// Records as the remote store would keep them: raw JSON per key.
    records: BTreeMap<ItemId, JsonValue>,
    calls: Vec<RecordedCall>,
    next_key: u64,
}

/// In-memory item collection.
///
/// Intended for tests/dev. Keeps the remote store's semantics: bodies are
/// stored verbatim, create assigns its own sortable key, update is a full
/// replace (and creates the key if missing), delete of a missing key succeeds.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: RwLock<State>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far.
    pub fn calls(&self) -> Result<Vec<RecordedCall>, StoreError> {
        Ok(self.read()?.calls.clone())
    }

    /// The raw record stored under `id`.
    pub fn record(&self, id: &ItemId) -> Result<Option<JsonValue>, StoreError> {
        Ok(self.read()?.records.get(id).cloned())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Network("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Network("lock poisoned".to_string()))
    }
}

fn encode(item: &Item) -> Result<JsonValue, StoreError> {
    serde_json::to_value(item).map_err(StoreError::parse)
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn fetch_all(&self) -> Result<ItemList, StoreError> {
        let mut state = self.write()?;
        state.calls.push(RecordedCall::FetchAll);

        if state.records.is_empty() {
            return Ok(ItemList::empty());
        }
        let raw = JsonValue::Object(
            state
                .records
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        let snapshot: Snapshot = serde_json::from_value(raw).map_err(StoreError::parse)?;
        Ok(ItemList::from_snapshot(snapshot))
    }

    async fn create(&self, item: &Item) -> Result<Option<ItemId>, StoreError> {
        let body = encode(item)?;
        let mut state = self.write()?;
        state.calls.push(RecordedCall::Create(item.clone()));

        state.next_key += 1;
        let key: ItemId = format!("-M{:010}", state.next_key).parse()?;
        state.records.insert(key.clone(), body);
        Ok(Some(key))
    }

    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        let body = encode(item)?;
        let mut state = self.write()?;
        state.calls.push(RecordedCall::Update(item.clone()));
        state.records.insert(item.id.clone(), body);
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError> {
        let mut state = self.write()?;
        state.calls.push(RecordedCall::Delete(id.clone()));
        state.records.remove(id);
        Ok(())
    }
}
