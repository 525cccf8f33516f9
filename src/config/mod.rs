//! Configuration structures and environment loading.
//!
//! Every config type has a `Default` and a `from_env()` constructor that
//! falls back to the default for unset or unparsable variables.

pub mod logging;
pub mod metrics;
pub mod security;
pub mod widget;

pub use logging::*;
pub use metrics::*;
pub use security::*;
pub use widget::*;
