//! Data models for the AQI widget.
//!
//! AQI bands, normalization of the backend payload, the page model the
//! renderer writes into, and request/response types for the JSON endpoints.

pub mod api;
pub mod aqi;
pub mod page;
pub mod report;

pub use api::*;
pub use aqi::*;
pub use page::{AQI_CARD_CLASS, Page, ResultsPanel, ids};
pub use report::*;
