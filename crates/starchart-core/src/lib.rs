//! Starchart Core - Foundation crate for the Starchart catalog browser.
//!
//! This crate provides shared types, error handling, configuration management,
//! date normalization, and the client preference store that all other
//! Starchart crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`ResourceKind`, `EntityId`, `EntityRecord`)
//! - [`date`] - Display formatting for ISO-8601 timestamps
//! - [`preferences`] - Durable client preferences (dark mode)
//!
//! # Example
//!
//! ```rust
//! use starchart_core::{format_date, AppConfig, ResourceKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let kind: ResourceKind = "planets".parse()?;
//! assert_eq!(config.resource_url(kind), "https://swapi.info/api/planets");
//!
//! assert_eq!(format_date(Some("2014-12-09T13:50:51.644000Z")), "09/12/2014, 13:50");
//! assert_eq!(format_date(None), "");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod date;
pub mod error;
pub mod preferences;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, AppConfig, GeneralConfig};
pub use date::{
    format_date, normalize_record_dates, normalize_record_dates_with, parse_display, DateFormatter,
};
pub use error::{ConfigError, ConfigResult, PreferenceError, Result, StarchartError};
pub use preferences::{PreferenceStore, DARK_MODE_KEY};
pub use types::{EntityId, EntityRecord, FieldValue, ResourceKind};
