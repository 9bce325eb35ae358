//! The catalog source abstraction.

use crate::error::Result;
use async_trait::async_trait;
use starchart_core::{EntityId, EntityRecord, ResourceKind};

/// Trait for anything that can serve catalog collections and single records.
///
/// Implementations must be thread-safe (Send + Sync) for use in async contexts.
/// Each call issues at most one request; there are no retries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full collection for a resource kind.
    ///
    /// # Errors
    /// Returns error on a non-success status, malformed body, or transport failure.
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Vec<EntityRecord>>;

    /// Fetch one record by id.
    ///
    /// # Errors
    /// Returns error on a non-success status, malformed body, or transport failure.
    async fn fetch_one(&self, kind: ResourceKind, id: &EntityId) -> Result<EntityRecord>;

    /// Get the unique identifier for this source, used in logs.
    fn source_id(&self) -> &str;
}
