//! Detail fetch unit: one record fetched by id, with its own loading and
//! error state.

use starchart_client::ClientError;
use starchart_core::{normalize_record_dates_with, DateFormatter, EntityId, EntityRecord, ResourceKind};

/// Proof that a detail fetch was started; redeemed by
/// [`DetailUnit::finish_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a detail ticket must be passed to finish_fetch to clear the loading flag"]
pub struct DetailTicket {
    kind: ResourceKind,
    id: EntityId,
    generation: u64,
}

impl DetailTicket {
    /// Resource kind being fetched.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Id being fetched.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }
}

/// State of the selected-record view.
#[derive(Debug, Clone, Default)]
pub struct DetailUnit {
    selected: Option<EntityRecord>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    formatter: DateFormatter,
}

impl DetailUnit {
    /// Idle unit with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `formatter` for dates on subsequent fetches.
    #[must_use]
    pub fn with_formatter(mut self, formatter: DateFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Start fetching `id`. The previous selection and error are cleared
    /// immediately.
    pub fn begin_fetch(&mut self, kind: ResourceKind, id: EntityId) -> DetailTicket {
        self.generation += 1;
        self.selected = None;
        self.error = None;
        self.loading = true;
        tracing::debug!("Fetching {}/{} (generation {})", kind, id, self.generation);
        DetailTicket {
            kind,
            id,
            generation: self.generation,
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves state alone when the ticket was superseded
    /// by a later fetch, [`clear`](Self::clear) or [`reject`](Self::reject).
    pub fn finish_fetch(
        &mut self,
        ticket: DetailTicket,
        result: Result<EntityRecord, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale detail for {}/{}",
                ticket.kind,
                ticket.id
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(mut record) => {
                normalize_record_dates_with(&self.formatter, &mut record);
                self.selected = Some(record);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("Failed to fetch {}/{}: {}", ticket.kind, ticket.id, err);
                self.selected = None;
                self.error = Some(err.user_message());
            }
        }
        true
    }

    /// Drop the selection and cancel any in-flight fetch.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.error = None;
        self.loading = false;
    }

    /// Fail without issuing a request, e.g. for an id that cannot be parsed.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.selected = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Fetched record, dates normalized.
    #[must_use]
    pub fn selected(&self) -> Option<&EntityRecord> {
        self.selected.as_ref()
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
