//! Shared transport double for networking and controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::TransportError;
use super::transport::AuthTransport;
use super::types::{OutboundRequest, ServerReply};

/// Replays queued outcomes and records every request it receives.
#[derive(Default)]
pub(crate) struct StubTransport {
    outcomes: Mutex<VecDeque<Result<ServerReply, TransportError>>>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl StubTransport {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        let stub = Self::default();
        stub.push(Ok(ServerReply::new(status, body)));
        stub
    }

    pub(crate) fn failing(detail: &str) -> Self {
        let stub = Self::default();
        stub.push(Err(TransportError::new(detail)));
        stub
    }

    pub(crate) fn push(&self, outcome: Result<ServerReply, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub(crate) fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_body(&self) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let body = requests.last().and_then(|r| r.json_body.clone()).unwrap();
        serde_json::from_str(&body).unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for StubTransport {
    async fn send(&self, request: OutboundRequest) -> Result<ServerReply, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no stubbed reply")))
    }
}
