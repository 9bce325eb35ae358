//! Starchart Catalog - list and detail state for the catalog browser.
//!
//! This crate turns fetched collections into what the presentation layer
//! shows:
//!
//! - [`ResultPipeline`]: raw collection → search filter → sort → page slice,
//!   plus loading and error state for the list
//! - [`DetailUnit`]: one record fetched by id, with its own loading and error
//!   state
//! - [`ResourceStore`] / [`CatalogSet`]: the above bound to a
//!   [`starchart_client::CatalogSource`], one store per resource kind
//!
//! Fetch failures never escape as errors; they become the `error` field of
//! the owning state, rendered like `Error 500`.
//!
//! # Example
//!
//! ```rust
//! use starchart_catalog::ResultPipeline;
//! use starchart_core::{EntityRecord, ResourceKind};
//!
//! let mut pipeline = ResultPipeline::new(ResourceKind::People);
//! let ticket = pipeline.begin_load(ResourceKind::People);
//! pipeline.finish_load(
//!     ticket,
//!     Ok(vec![
//!         EntityRecord::new("Luke Skywalker", "", "https://swapi.info/api/people/1"),
//!         EntityRecord::new("Darth Vader", "", "https://swapi.info/api/people/4"),
//!     ]),
//! );
//!
//! pipeline.set_search_text("luke");
//! assert_eq!(pipeline.total_results(), 1);
//! assert_eq!(pipeline.page_slice()[0].name, "Luke Skywalker");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod detail;
pub mod page;
pub mod pipeline;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use detail::{DetailTicket, DetailUnit};
pub use page::{page_count, PageInfo, PAGE_SIZE};
pub use pipeline::{LoadTicket, ResultPipeline};
pub use query::{compare_fields, locale_compare, Query, DEFAULT_SORT_KEY};
pub use store::{CatalogSet, ResourceStore};
