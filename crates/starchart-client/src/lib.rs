//! Starchart Client - remote fetch client for the catalog API.
//!
//! This crate issues the two requests the catalog browser needs:
//!
//! - `GET {base}/{resource}` → JSON array of entity records
//! - `GET {base}/{resource}/{id}` → one JSON entity record
//!
//! Any status outside the success range fails with
//! [`ClientError::Remote`] carrying the numeric status, so callers can render
//! `Error {status}`. There are no retries; the transport timeout is the only
//! timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use starchart_client::{CatalogSource, HttpCatalogClient};
//! use starchart_core::ResourceKind;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpCatalogClient::new("https://swapi.info/api")?;
//! let people = client.fetch_collection(ResourceKind::People).await?;
//! println!("{} people", people.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod fixture;
pub mod http;
pub mod source;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use fixture::StaticSource;
pub use http::{build_http_client, HttpCatalogClient};
pub use source::CatalogSource;
