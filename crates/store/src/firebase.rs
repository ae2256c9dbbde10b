//! REST client for the remote JSON store.
//!
//! Wire layout (JSON bodies throughout):
//!
//! | op     | method | path              |
//! |--------|--------|-------------------|
//! | fetch  | GET    | `/shop.json`      |
//! | create | POST   | `/shop.json`      |
//! | update | PUT    | `/shop/{id}.json` |
//! | delete | DELETE | `/shop/{id}.json` |

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use shoplist_core::{Item, ItemId, ItemList, Snapshot};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::notify::{LogNotifier, Notice, Notifier};
use crate::repository::ItemRepository;

/// What list subscribers receive after every fetch.
pub type ItemsUpdate = Result<ItemList, StoreError>;

const UPDATES_CAPACITY: usize = 64;

/// Body of a successful push: the key the store generated.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// Client for the remote shopping list.
///
/// Every fetch is re-emitted to subscribers, failures included. Every
/// successful write surfaces a [`Notice`] and then re-fetches the collection.
pub struct ShopClient {
    http: reqwest::Client,
    config: StoreConfig,
    notifier: Arc<dyn Notifier>,
    updates: broadcast::Sender<ItemsUpdate>,
}

impl ShopClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(StoreError::network)?;
        let (updates, _) = broadcast::channel(UPDATES_CAPACITY);

        Ok(Self {
            http,
            config,
            notifier: Arc::new(LogNotifier),
            updates,
        })
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Receive every list emitted from now on.
    ///
    /// A receiver that falls more than the channel capacity behind skips
    /// ahead and sees `RecvError::Lagged` once.
    pub fn subscribe(&self) -> broadcast::Receiver<ItemsUpdate> {
        self.updates.subscribe()
    }

    /// [`Self::subscribe`] as a `Stream`.
    pub fn updates(&self) -> BroadcastStream<ItemsUpdate> {
        BroadcastStream::new(self.subscribe())
    }

    /// Fetch the collection and publish the outcome to subscribers.
    pub async fn refresh(&self) -> ItemsUpdate {
        let result = self.load().await;
        match &result {
            Ok(list) => tracing::debug!(items = list.len(), total = list.total(), "fetched shop list"),
            Err(err) => tracing::warn!(error = %err, "failed to fetch shop list"),
        }

        // Nobody listening is fine.
        let _ = self.updates.send(result.clone());
        result
    }

    async fn load(&self) -> Result<ItemList, StoreError> {
        let url = self.config.collection_url();
        tracing::debug!(%url, "GET");

        let resp = self.http.get(&url).send().await.map_err(StoreError::network)?;
        let body = ensure_success(resp).await?.text().await.map_err(StoreError::network)?;
        let snapshot: Snapshot = serde_json::from_str(&body).map_err(StoreError::parse)?;
        Ok(ItemList::from_snapshot(snapshot))
    }

    /// POST the item. Any 2xx is a success; the returned key is best-effort.
    async fn push(&self, item: &Item) -> Result<Option<ItemId>, StoreError> {
        let url = self.config.collection_url();
        tracing::debug!(%url, placeholder = %item.id, "POST");

        let resp = self.http.post(&url).json(item).send().await.map_err(StoreError::network)?;
        let resp = ensure_success(resp).await?;

        match read_push_key(resp).await {
            Ok(key) => Ok(Some(key)),
            Err(err) => {
                tracing::warn!(error = %err, "item stored but no usable key in response");
                Ok(None)
            }
        }
    }

    async fn replace(&self, item: &Item) -> Result<(), StoreError> {
        let url = self.config.item_url(&item.id);
        tracing::debug!(%url, "PUT");

        let resp = self.http.put(&url).json(item).send().await.map_err(StoreError::network)?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn remove(&self, id: &ItemId) -> Result<(), StoreError> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, "DELETE");

        let resp = self.http.delete(&url).send().await.map_err(StoreError::network)?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// Finish a write: on success notify then re-fetch; on failure only log.
    ///
    /// A failed re-fetch reaches subscribers through the update stream and
    /// does not undo the write's success.
    async fn settle<T>(&self, notice: Notice, outcome: Result<T, StoreError>) -> Result<T, StoreError> {
        match outcome {
            Ok(value) => {
                tracing::info!(operation = notice.message(), "write accepted");
                self.notifier.notify(notice);
                let _ = self.refresh().await;
                Ok(value)
            }
            Err(err) => {
                tracing::error!(error = %err, operation = ?notice, "write failed");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl ItemRepository for ShopClient {
    async fn fetch_all(&self) -> Result<ItemList, StoreError> {
        self.refresh().await
    }

    async fn create(&self, item: &Item) -> Result<Option<ItemId>, StoreError> {
        let outcome = self.push(item).await;
        self.settle(Notice::ItemAdded, outcome).await
    }

    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        let outcome = self.replace(item).await;
        self.settle(Notice::ItemUpdated, outcome).await
    }

    async fn delete(&self, id: &ItemId) -> Result<(), StoreError> {
        let outcome = self.remove(id).await;
        self.settle(Notice::ItemDeleted, outcome).await
    }
}

async fn read_push_key(resp: reqwest::Response) -> Result<ItemId, StoreError> {
    let body = resp.text().await.map_err(StoreError::network)?;
    let pushed: PushResponse = serde_json::from_str(&body).map_err(StoreError::parse)?;
    Ok(ItemId::try_from(pushed.name)?)
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Api(status.as_u16(), body))
}
