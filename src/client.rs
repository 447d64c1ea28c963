//! The Pushy API client
//!
//! One client per Secret API Key. The client itself is a thin value type:
//! the key, an optional Pushy Enterprise endpoint override, transport
//! options applied to every request, and the injected transport backend.
//! It is `Clone` (the backend is shared behind an `Arc`), so handing
//! copies to tasks is cheap.

use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::transport::{HttpTransport, Transport, TransportOptions};

/// Public Pushy API endpoint
const API_ENDPOINT: &str = "https://api.pushy.me";

/// Client for the Pushy API
///
/// All operations take `&self`; reconfiguration takes `&mut self`, so the
/// borrow checker serializes setter calls against in-flight requests.
#[derive(Clone)]
pub struct Pushy {
    api_key: String,
    enterprise_endpoint: Option<String>,
    transport_options: TransportOptions,
    transport: Arc<dyn Transport>,
}

impl Pushy {
    /// Create a client authenticating with the given Secret API Key
    ///
    /// Fails with [`Error::InvalidApiKey`] when the key is empty or not
    /// alphanumeric, before any request is made. Uses the stock reqwest
    /// transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_transport(api_key, Arc::new(HttpTransport::new()?))
    }

    /// Create a client over a custom transport backend
    pub fn with_transport(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Result<Self> {
        let api_key = api_key.into();

        if api_key.is_empty() || !api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidApiKey);
        }

        Ok(Self {
            api_key,
            enterprise_endpoint: None,
            transport_options: TransportOptions::default(),
            transport,
        })
    }

    /// The base URL requests are issued against
    ///
    /// Returns the enterprise endpoint when configured, the public API
    /// otherwise.
    pub fn api_endpoint(&self) -> &str {
        self.enterprise_endpoint.as_deref().unwrap_or(API_ENDPOINT)
    }

    /// Route all subsequent requests to a Pushy Enterprise deployment
    pub fn set_enterprise_endpoint(&mut self, endpoint: impl Into<String>) {
        self.enterprise_endpoint = Some(endpoint.into());
    }

    /// Transport-level settings applied to every outgoing request
    pub fn transport_options(&self) -> &TransportOptions {
        &self.transport_options
    }

    /// Replace the transport-level settings applied to every request
    pub fn set_transport_options(&mut self, options: TransportOptions) {
        self.transport_options = options;
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
