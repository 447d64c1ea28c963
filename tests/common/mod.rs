//! Common test utilities and helpers
//!
//! Provides a scripted, recording transport so integration tests can
//! exercise the full request/response normalization path without any
//! network I/O.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pushy::{Error, Pushy, RequestDescriptor, Transport, TransportOptions, TransportResponse};
use serde_json::Value;

/// A request captured by the mock transport, with the options it was
/// dispatched with
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request: RequestDescriptor,
    pub options: TransportOptions,
}

/// Transport backend that replays scripted outcomes and records every
/// request it receives
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, Error>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script a response with the given status and JSON body
    pub fn push_response(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse {
                status,
                body: Some(body),
            }));
    }

    /// Script a response with the given status and no body
    pub fn push_empty_response(&self, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse { status, body: None }));
    }

    /// Script a transport-level failure
    pub fn push_error(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests dispatched so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests dispatched so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &TransportOptions,
    ) -> Result<TransportResponse, Error> {
        self.requests.lock().unwrap().push(RecordedRequest {
            request: request.clone(),
            options: options.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport exhausted: no scripted response left")
    }
}

/// Build a client wired to a fresh mock transport
pub fn client_with_mock() -> (Pushy, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = Pushy::with_transport("SECRETAPIKEY123", transport.clone())
        .expect("test API key should be valid");
    (client, transport)
}
