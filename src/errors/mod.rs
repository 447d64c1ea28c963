//! Centralized error handling module
//!
//! Structured, typed errors for every failure mode of a client call,
//! delivered exactly once through whichever channel (future or callback)
//! the caller chose.

pub mod types;

pub use types::{Error, Result};
