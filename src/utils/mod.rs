//! Utility functions and helper modules.

pub mod html;
pub mod http;
pub mod route;

pub use html::*;
pub use http::*;
pub use route::*;
