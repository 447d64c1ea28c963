//! Transport abstraction for issuing API requests
//!
//! The client consumes HTTP backends only through the [`Transport`] trait:
//! "issue method M to URL U with body B and options O, receive a status
//! code and JSON body, or an error". Any conforming HTTP client satisfies
//! the contract; [`HttpTransport`] is the stock `reqwest` backend, and
//! tests inject their own recording implementations.

pub mod http;
pub mod traits;

// Re-export main types for convenience
pub use http::HttpTransport;
pub use traits::{RequestDescriptor, Transport, TransportOptions, TransportResponse};
