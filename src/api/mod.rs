//! Task API Bindings
//!
//! Frontend bindings to the task backend, one function per REST endpoint.

mod http;
mod tasks;

pub use http::ApiError;
pub use tasks::*;
