//! The result pipeline: fetched collection → filter → sort → page.
//!
//! [`ResultPipeline`] owns the raw collection for one resource kind together
//! with the query parameters, and keeps the derived view in step with them.
//! Every input change recomputes the whole view synchronously, so a read after
//! a write always sees the new state.
//!
//! Loading is split in two so callers can observe the in-flight state:
//! [`ResultPipeline::begin_load`] hands out a [`LoadTicket`], and
//! [`ResultPipeline::finish_load`] applies the fetch result for that ticket.
//! Only the most recent ticket is applied; completions of superseded loads are
//! dropped, so a slow earlier response can never overwrite a newer one.

use crate::page::{clamp_page, page_bounds, page_count, PageInfo};
use crate::query::Query;
use starchart_client::ClientError;
use starchart_core::{normalize_record_dates_with, DateFormatter, EntityRecord, ResourceKind};

/// Proof that a load was started; redeemed by [`ResultPipeline::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load ticket must be passed to finish_load to clear the loading flag"]
pub struct LoadTicket {
    kind: ResourceKind,
    generation: u64,
}

impl LoadTicket {
    /// Resource kind being loaded.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

/// List state for one resource kind.
#[derive(Debug, Clone)]
pub struct ResultPipeline {
    resource: ResourceKind,
    raw: Vec<EntityRecord>,
    query: Query,
    view: Vec<EntityRecord>,
    page: usize,
    loading: bool,
    error: Option<String>,
    generation: u64,
    formatter: DateFormatter,
}

impl ResultPipeline {
    /// Empty pipeline for `resource` with the default query.
    #[must_use]
    pub fn new(resource: ResourceKind) -> Self {
        Self {
            resource,
            raw: Vec::new(),
            query: Query::default(),
            view: Vec::new(),
            page: 1,
            loading: false,
            error: None,
            generation: 0,
            formatter: DateFormatter::utc(),
        }
    }

    /// Use `formatter` for `created`/`edited` on subsequent loads.
    #[must_use]
    pub fn with_formatter(mut self, formatter: DateFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Mark a load of `kind` as in flight and clear any previous error.
    pub fn begin_load(&mut self, kind: ResourceKind) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        tracing::debug!("Loading {} (generation {})", kind, self.generation);
        LoadTicket {
            kind,
            generation: self.generation,
        }
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` without touching state when a newer load has started
    /// since the ticket was issued.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<EntityRecord>, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale {} load (generation {}, latest {})",
                ticket.kind,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(mut records) => {
                for record in &mut records {
                    normalize_record_dates_with(&self.formatter, record);
                }
                tracing::info!("Loaded {} {} records", records.len(), ticket.kind);
                self.resource = ticket.kind;
                self.raw = records;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("Failed to load {}: {}", ticket.kind, err);
                self.error = Some(err.user_message());
                self.raw.clear();
            }
        }
        self.page = 1;
        self.recompute();
        true
    }

    /// Re-derive the filtered and sorted view from the raw collection.
    pub fn recompute(&mut self) {
        self.view = self.query.apply(&self.raw);
        self.page = clamp_page(self.page, self.view.len());
    }

    fn requery(&mut self) {
        self.page = 1;
        self.recompute();
    }

    /// Set the search text. Returns whether it changed.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.query.search_text == text {
            return false;
        }
        self.query.search_text = text;
        self.requery();
        true
    }

    /// Set the sort key; `None` disables sorting. Returns whether it changed.
    pub fn set_sort_key(&mut self, key: Option<String>) -> bool {
        if self.query.sort_key == key {
            return false;
        }
        self.query.sort_key = key;
        self.requery();
        true
    }

    /// Set the sort direction. Returns whether it changed.
    pub fn set_sort_ascending(&mut self, ascending: bool) -> bool {
        if self.query.sort_ascending == ascending {
            return false;
        }
        self.query.sort_ascending = ascending;
        self.requery();
        true
    }

    /// Flip the sort direction and return the new one.
    pub fn toggle_sort_direction(&mut self) -> bool {
        let ascending = !self.query.sort_ascending;
        self.set_sort_ascending(ascending);
        ascending
    }

    /// Set key and direction together with a single recompute.
    pub fn set_sort(&mut self, key: Option<String>, ascending: bool) -> bool {
        if self.query.sort_key == key && self.query.sort_ascending == ascending {
            return false;
        }
        self.query.sort_key = key;
        self.query.sort_ascending = ascending;
        self.requery();
        true
    }

    /// Move to page `requested`, clamped into range. Returns the applied page.
    pub fn set_page(&mut self, requested: usize) -> usize {
        self.page = clamp_page(requested, self.view.len());
        self.page
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    /// Go back one page if possible.
    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Resource kind of the current raw collection.
    #[must_use]
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// Raw collection as fetched (dates already normalized).
    #[must_use]
    pub fn raw(&self) -> &[EntityRecord] {
        &self.raw
    }

    /// Current query parameters.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Full filtered and sorted view.
    #[must_use]
    pub fn results(&self) -> &[EntityRecord] {
        &self.view
    }

    /// Number of records in the derived view.
    #[must_use]
    pub fn total_results(&self) -> usize {
        self.view.len()
    }

    /// Current 1-based page.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages in the derived view.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.view.len())
    }

    /// Records on the current page.
    #[must_use]
    pub fn page_slice(&self) -> &[EntityRecord] {
        &self.view[page_bounds(self.page, self.view.len())]
    }

    /// Pagination summary.
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page, self.view.len())
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed load, e.g. `Error 500`.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<EntityRecord> {
        vec![
            EntityRecord::new("Luke Skywalker", "2020-01-01", "url1"),
            EntityRecord::new("Darth Vader", "2019-01-01", "url2"),
            EntityRecord::new("Leia Organa", "2021-01-01", "url3"),
        ]
    }

    fn loaded(records: Vec<EntityRecord>) -> ResultPipeline {
        let mut pipeline = ResultPipeline::new(ResourceKind::People);
        let ticket = pipeline.begin_load(ResourceKind::People);
        assert!(pipeline.finish_load(ticket, Ok(records)));
        pipeline
    }

    fn numbered(count: usize) -> Vec<EntityRecord> {
        (1..=count)
            .map(|i| EntityRecord::new(format!("Clone {i:03}"), "", format!("url{i}")))
            .collect()
    }

    fn names(records: &[EntityRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let pipeline = loaded(sample());
        assert_eq!(
            names(pipeline.results()),
            ["Darth Vader", "Leia Organa", "Luke Skywalker"]
        );
        assert_eq!(pipeline.total_results(), 3);
    }

    #[test]
    fn test_search_filters_by_name() {
        let mut pipeline = loaded(sample());
        assert!(pipeline.set_search_text("Luke"));
        assert_eq!(names(pipeline.results()), ["Luke Skywalker"]);

        pipeline.set_search_text("");
        assert_eq!(pipeline.total_results(), 3);
    }

    #[test]
    fn test_sort_by_created_descending() {
        let mut pipeline = loaded(sample());
        pipeline.set_sort_key(Some("created".to_string()));
        pipeline.set_sort_ascending(false);
        assert_eq!(
            names(pipeline.results()),
            ["Leia Organa", "Luke Skywalker", "Darth Vader"]
        );
    }

    #[test]
    fn test_load_normalizes_dates() {
        let pipeline = loaded(vec![EntityRecord::new(
            "Luke Skywalker",
            "2014-12-09T13:50:51.644000Z",
            "url1",
        )
        .with_attribute("edited", "2014-12-20T21:17:56.891000Z")]);

        let luke = &pipeline.raw()[0];
        assert_eq!(luke.created, "09/12/2014, 13:50");
        assert_eq!(
            luke.attribute("edited").and_then(|v| v.as_str()),
            Some("20/12/2014, 21:17")
        );
    }

    #[test]
    fn test_failed_load_clears_collection() {
        let mut pipeline = loaded(sample());
        let ticket = pipeline.begin_load(ResourceKind::People);
        assert!(pipeline.is_loading());
        assert!(pipeline.error().is_none());

        pipeline.finish_load(
            ticket,
            Err(ClientError::Remote {
                status: 500,
                url: "https://swapi.info/api/people".to_string(),
            }),
        );

        assert_eq!(pipeline.error(), Some("Error 500"));
        assert!(pipeline.raw().is_empty());
        assert!(pipeline.results().is_empty());
        assert!(!pipeline.is_loading());
    }

    #[test]
    fn test_successful_load_clears_previous_error() {
        let mut pipeline = ResultPipeline::new(ResourceKind::Planets);
        let ticket = pipeline.begin_load(ResourceKind::Planets);
        pipeline.finish_load(ticket, Err(ClientError::Internal("down".to_string())));
        assert_eq!(pipeline.error(), Some("Error fetching data"));

        let ticket = pipeline.begin_load(ResourceKind::Planets);
        assert!(pipeline.error().is_none());
        pipeline.finish_load(ticket, Ok(sample()));
        assert!(pipeline.error().is_none());
        assert_eq!(pipeline.total_results(), 3);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut pipeline = ResultPipeline::new(ResourceKind::People);
        let first = pipeline.begin_load(ResourceKind::People);
        let second = pipeline.begin_load(ResourceKind::Planets);

        assert!(pipeline.finish_load(
            second,
            Ok(vec![EntityRecord::new("Tatooine", "", "p1")])
        ));
        assert!(!pipeline.finish_load(first, Ok(sample())));

        assert_eq!(pipeline.resource(), ResourceKind::Planets);
        assert_eq!(names(pipeline.results()), ["Tatooine"]);
    }

    #[test]
    fn test_loading_stays_set_until_latest_finishes() {
        let mut pipeline = ResultPipeline::new(ResourceKind::People);
        let first = pipeline.begin_load(ResourceKind::People);
        let second = pipeline.begin_load(ResourceKind::People);

        assert!(!pipeline.finish_load(first, Ok(sample())));
        assert!(pipeline.is_loading());
        assert!(pipeline.finish_load(second, Ok(sample())));
        assert!(!pipeline.is_loading());
    }

    #[test]
    fn test_pagination_of_25_records() {
        let mut pipeline = loaded(numbered(25));
        assert_eq!(pipeline.page_count(), 3);
        assert_eq!(pipeline.page_slice().len(), 10);

        assert_eq!(pipeline.set_page(3), 3);
        let slice = pipeline.page_slice();
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[0].name, pipeline.results()[20].name);
        assert_eq!(slice[0].name, "Clone 021");
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pipeline = loaded(numbered(25));
        assert_eq!(pipeline.set_page(0), 1);
        assert_eq!(pipeline.set_page(99), 3);

        let mut empty = ResultPipeline::new(ResourceKind::Films);
        assert_eq!(empty.set_page(4), 1);
        assert!(empty.page_slice().is_empty());
        assert_eq!(empty.page_count(), 0);
    }

    #[test]
    fn test_next_and_previous_page() {
        let mut pipeline = loaded(numbered(25));
        assert_eq!(pipeline.next_page(), 2);
        assert_eq!(pipeline.next_page(), 3);
        assert_eq!(pipeline.next_page(), 3);
        assert_eq!(pipeline.previous_page(), 2);
        assert_eq!(pipeline.previous_page(), 1);
        assert_eq!(pipeline.previous_page(), 1);
    }

    #[test]
    fn test_query_changes_reset_page() {
        let mut pipeline = loaded(numbered(25));

        pipeline.set_page(3);
        pipeline.set_search_text("clone");
        assert_eq!(pipeline.page(), 1);

        pipeline.set_page(3);
        pipeline.set_sort_key(Some("url".to_string()));
        assert_eq!(pipeline.page(), 1);

        pipeline.set_page(3);
        pipeline.set_sort_ascending(false);
        assert_eq!(pipeline.page(), 1);

        pipeline.set_page(2);
        pipeline.toggle_sort_direction();
        assert_eq!(pipeline.page(), 1);
    }

    #[test]
    fn test_unchanged_setter_keeps_page() {
        let mut pipeline = loaded(numbered(25));
        pipeline.set_page(2);
        assert!(!pipeline.set_search_text(""));
        assert!(!pipeline.set_sort("name".to_string().into(), true));
        assert_eq!(pipeline.page(), 2);
    }

    #[test]
    fn test_reload_resets_page() {
        let mut pipeline = loaded(numbered(25));
        pipeline.set_page(3);
        let ticket = pipeline.begin_load(ResourceKind::People);
        pipeline.finish_load(ticket, Ok(numbered(25)));
        assert_eq!(pipeline.page(), 1);
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let mut pipeline = loaded(numbered(25));
        let ascending: Vec<String> = pipeline.results().iter().map(|r| r.name.clone()).collect();
        pipeline.set_sort_ascending(false);
        let mut descending: Vec<String> =
            pipeline.results().iter().map(|r| r.name.clone()).collect();
        descending.reverse();
        assert_eq!(ascending, descending);
    }
}
