//! Search flow and supporting services.
//!
//! The backend client, the query handler that turns a city name into page
//! state, the renderer, and Prometheus metrics.

pub mod backend;
pub mod metrics;
pub mod render;
pub mod search;

pub use backend::*;
pub use metrics::*;
pub use render::*;
pub use search::*;
