//! Command handlers invoked by the presentation layer.

pub mod catalog;
pub mod settings;
