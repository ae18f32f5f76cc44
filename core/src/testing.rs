//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::EcxClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};

pub const BASE_URL: &str = "http://localhost:8888";

/// Replays queued outcomes in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests();
        serde_json::from_str(requests[index].body.as_deref().unwrap()).unwrap()
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: &HttpRequest,
        _timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {} {}", request.method, request.path))
    }
}

pub fn scripted_client() -> (EcxClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::default());
    let client = EcxClient::new(BASE_URL, transport.clone());
    (client, transport)
}
