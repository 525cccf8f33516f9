//! Custom middleware implementations.
//!
//! Security headers, request IDs and metrics collection.

pub mod metrics;
pub mod request_id;
pub mod security;

pub use metrics::*;
pub use request_id::*;
pub use security::*;
