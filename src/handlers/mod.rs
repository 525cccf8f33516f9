//! HTTP request handlers.
//!
//! The widget pages, the JSON search endpoint, and the operational
//! endpoints (health, version, metrics), plus the app factory.

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod search;
pub mod version;
pub mod widget;

pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use search::*;
pub use version::*;
pub use widget::*;
