//! Serializable snapshots handed to the presentation layer.

use serde::{Deserialize, Serialize};
use starchart_catalog::{DetailUnit, PageInfo, Query, ResultPipeline};
use starchart_core::{EntityRecord, ResourceKind};

/// Everything a list screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    /// Resource kind shown
    pub resource: ResourceKind,
    /// Heading, e.g. "People"
    pub title: String,
    /// Records on the current page
    pub items: Vec<EntityRecord>,
    /// Pagination summary, including the total result count
    pub page: PageInfo,
    /// Current search and sort parameters
    pub query: Query,
    /// Whether a load is in flight
    pub loading: bool,
    /// Message from the last failed load
    pub error: Option<String>,
}

impl ListView {
    /// Capture the current state of `pipeline`.
    #[must_use]
    pub fn snapshot(pipeline: &ResultPipeline) -> Self {
        let resource = pipeline.resource();
        Self {
            resource,
            title: resource.display_name().to_string(),
            items: pipeline.page_slice().to_vec(),
            page: pipeline.page_info(),
            query: pipeline.query().clone(),
            loading: pipeline.is_loading(),
            error: pipeline.error().map(str::to_string),
        }
    }
}

/// Everything a detail screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    /// Resource kind of the record
    pub resource: ResourceKind,
    /// Fetched record, dates already formatted
    pub record: Option<EntityRecord>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Message from the last failed fetch
    pub error: Option<String>,
}

impl DetailView {
    /// Capture the current state of `detail`.
    #[must_use]
    pub fn snapshot(resource: ResourceKind, detail: &DetailUnit) -> Self {
        Self {
            resource,
            record: detail.selected().cloned(),
            loading: detail.is_loading(),
            error: detail.error().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_view_serializes_for_frontend() {
        let mut pipeline = ResultPipeline::new(ResourceKind::Planets);
        let ticket = pipeline.begin_load(ResourceKind::Planets);
        pipeline.finish_load(
            ticket,
            Ok(vec![EntityRecord::new("Tatooine", "", "https://swapi.info/api/planets/1")
                .with_attribute("climate", "arid")]),
        );

        let view = serde_json::to_value(ListView::snapshot(&pipeline)).unwrap();
        assert_eq!(view["resource"], json!("planets"));
        assert_eq!(view["title"], json!("Planets"));
        assert_eq!(view["items"][0]["name"], json!("Tatooine"));
        assert_eq!(view["items"][0]["climate"], json!("arid"));
        assert_eq!(view["page"]["total_results"], json!(1));
        assert_eq!(view["query"]["sort_key"], json!("name"));
        assert_eq!(view["loading"], json!(false));
        assert_eq!(view["error"], json!(null));
    }

    #[test]
    fn test_detail_view_while_loading() {
        let mut detail = DetailUnit::new();
        let _ticket = detail.begin_fetch(
            ResourceKind::Films,
            starchart_core::EntityId::new("1").unwrap(),
        );

        let view = DetailView::snapshot(ResourceKind::Films, &detail);
        assert!(view.loading);
        assert!(view.record.is_none());
        assert!(view.error.is_none());
    }
}
