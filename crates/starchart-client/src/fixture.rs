//! In-memory catalog source with canned replies.
//!
//! Used by tests and offline demos in place of [`crate::HttpCatalogClient`].
//! Anything not registered answers with status 404, as the remote API would.

use crate::error::{ClientError, Result};
use crate::source::CatalogSource;
use async_trait::async_trait;
use starchart_core::{EntityId, EntityRecord, ResourceKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply<T> {
    Body(T),
    Status(u16),
}

/// Catalog source serving fixed collections and records.
#[derive(Debug, Default)]
pub struct StaticSource {
    collections: HashMap<ResourceKind, Reply<Vec<EntityRecord>>>,
    items: HashMap<(ResourceKind, String), Reply<EntityRecord>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for `kind`.
    #[must_use]
    pub fn with_collection(mut self, kind: ResourceKind, records: Vec<EntityRecord>) -> Self {
        self.collections.insert(kind, Reply::Body(records));
        self
    }

    /// Answer collection requests for `kind` with `status`.
    #[must_use]
    pub fn with_collection_status(mut self, kind: ResourceKind, status: u16) -> Self {
        self.collections.insert(kind, Reply::Status(status));
        self
    }

    /// Serve `record` for `kind`/`id`.
    #[must_use]
    pub fn with_item(mut self, kind: ResourceKind, id: &str, record: EntityRecord) -> Self {
        self.items
            .insert((kind, id.to_string()), Reply::Body(record));
        self
    }

    /// Answer item requests for `kind`/`id` with `status`.
    #[must_use]
    pub fn with_item_status(mut self, kind: ResourceKind, id: &str, status: u16) -> Self {
        self.items
            .insert((kind, id.to_string()), Reply::Status(status));
        self
    }

    /// Wait this long before answering each request.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer<T: Clone>(&self, reply: Option<&Reply<T>>, url: String) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(ClientError::Remote {
                status: *status,
                url,
            }),
            None => Err(ClientError::Remote { status: 404, url }),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Vec<EntityRecord>> {
        self.answer(self.collections.get(&kind), format!("static:/{kind}"))
            .await
    }

    async fn fetch_one(&self, kind: ResourceKind, id: &EntityId) -> Result<EntityRecord> {
        let key = (kind, id.as_str().to_string());
        self.answer(self.items.get(&key), format!("static:/{kind}/{id}"))
            .await
    }

    fn source_id(&self) -> &str {
        "static"
    }
}
