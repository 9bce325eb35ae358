//! Shared, async-facing wrappers around the pipeline and detail unit.
//!
//! A [`ResourceStore`] pairs one resource kind's [`ResultPipeline`] and
//! [`DetailUnit`] with a [`CatalogSource`]. State lives behind
//! `tokio::sync::RwLock`s that are only held for the synchronous begin and
//! finish steps, never across the network await, so readers observe the
//! loading flag while a fetch is in flight.

use crate::detail::DetailUnit;
use crate::pipeline::ResultPipeline;
use futures::future::join_all;
use starchart_client::CatalogSource;
use starchart_core::{EntityId, EntityRecord, ResourceKind};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// List and detail state for one resource kind, bound to a source.
pub struct ResourceStore {
    kind: ResourceKind,
    source: Arc<dyn CatalogSource>,
    pipeline: RwLock<ResultPipeline>,
    detail: RwLock<DetailUnit>,
}

impl ResourceStore {
    /// Create an empty store for `kind`.
    pub fn new(kind: ResourceKind, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            kind,
            source,
            pipeline: RwLock::new(ResultPipeline::new(kind)),
            detail: RwLock::new(DetailUnit::new()),
        }
    }

    /// Resource kind served by this store.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Fetch the collection and feed it to the pipeline.
    ///
    /// Returns `false` when a later load superseded this one. Failures are
    /// recorded in the pipeline's error state rather than returned.
    pub async fn load(&self) -> bool {
        let ticket = self.pipeline.write().await.begin_load(self.kind);
        tracing::debug!(
            "Fetching {} collection from {}",
            self.kind,
            self.source.source_id()
        );
        let result = self.source.fetch_collection(self.kind).await;
        self.pipeline.write().await.finish_load(ticket, result)
    }

    /// Fetch one record into the detail unit.
    pub async fn fetch_detail(&self, id: &EntityId) -> bool {
        let ticket = self.detail.write().await.begin_fetch(self.kind, id.clone());
        let result = self.source.fetch_one(self.kind, id).await;
        self.detail.write().await.finish_fetch(ticket, result)
    }

    /// Fetch the record a list entry points at, using the id in its `url`.
    pub async fn fetch_detail_for(&self, record: &EntityRecord) -> bool {
        match record.id() {
            Ok(id) => self.fetch_detail(&id).await,
            Err(err) => {
                tracing::warn!("Record '{}' has no usable id: {}", record.name, err);
                self.detail.write().await.reject(format!("Error: {err}"));
                false
            }
        }
    }

    /// Fetch a record by raw id text, e.g. taken from a route.
    pub async fn open_detail(&self, raw_id: &str) -> bool {
        match EntityId::new(raw_id) {
            Ok(id) => self.fetch_detail(&id).await,
            Err(err) => {
                tracing::warn!("Rejected detail id '{}': {}", raw_id, err);
                self.detail.write().await.reject(format!("Error: {err}"));
                false
            }
        }
    }

    /// Drop the selected record and cancel any in-flight detail fetch.
    pub async fn close_detail(&self) {
        self.detail.write().await.clear();
    }

    /// Shared access to the list state.
    pub async fn pipeline(&self) -> RwLockReadGuard<'_, ResultPipeline> {
        self.pipeline.read().await
    }

    /// Exclusive access to the list state, for query and page changes.
    pub async fn pipeline_mut(&self) -> RwLockWriteGuard<'_, ResultPipeline> {
        self.pipeline.write().await
    }

    /// Shared access to the detail state.
    pub async fn detail(&self) -> RwLockReadGuard<'_, DetailUnit> {
        self.detail.read().await
    }
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("kind", &self.kind)
            .field("source", &self.source.source_id())
            .finish_non_exhaustive()
    }
}

/// One store per resource kind, all sharing a source.
#[derive(Debug)]
pub struct CatalogSet {
    people: ResourceStore,
    planets: ResourceStore,
    films: ResourceStore,
}

impl CatalogSet {
    /// Create empty stores for every kind.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            people: ResourceStore::new(ResourceKind::People, Arc::clone(&source)),
            planets: ResourceStore::new(ResourceKind::Planets, Arc::clone(&source)),
            films: ResourceStore::new(ResourceKind::Films, source),
        }
    }

    /// Store for `kind`.
    #[must_use]
    pub fn store(&self, kind: ResourceKind) -> &ResourceStore {
        match kind {
            ResourceKind::People => &self.people,
            ResourceKind::Planets => &self.planets,
            ResourceKind::Films => &self.films,
        }
    }

    /// Load every collection concurrently.
    pub async fn load_all(&self) {
        let loads = ResourceKind::ALL.iter().map(|kind| self.store(*kind).load());
        let applied = join_all(loads).await;
        tracing::info!(
            "Loaded {} of {} collections",
            applied.into_iter().filter(|applied| *applied).count(),
            ResourceKind::ALL.len()
        );
    }
}
