//! The seam between request descriptions and the network.
//!
//! # Design
//! `EcxClient` never talks to sockets directly. It hands each `HttpRequest`
//! to a `Transport`, which returns either an `HttpResponse` (whatever its
//! status) or a `TransportError` when no usable response was obtained.
//! Status interpretation stays in the client, so a transport must return
//! 4xx/5xx responses as data.
//!
//! `UreqTransport` is the bundled implementation. Tests and hosts with
//! their own HTTP stack plug in a different one.

use std::time::Duration;

use thiserror::Error;
use ureq::Agent;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// User agent sent by `UreqTransport` unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("ecx-core/", env!("CARGO_PKG_VERSION"));

/// Failure to obtain a complete response.
///
/// `status` is set when the server answered but the exchange broke off
/// afterwards, e.g. while reading the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations are shared by every clone of a client and may be called
/// from several threads at once. `timeout`, when set, bounds the whole call.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError>;
}

/// `Transport` backed by a pooled `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        // Error statuses come back as responses so the client can decode
        // their bodies.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: user_agent.to_string(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT, None)
    }
}

impl Transport for UreqTransport {
    fn send(
        &self,
        request: &HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError> {
        let url = request.path.as_str();
        let body = request.body.as_deref();

        let result = match request.method {
            HttpMethod::Get => self.decorate(self.agent.get(url), request, timeout).call(),
            HttpMethod::Delete => self.decorate(self.agent.delete(url), request, timeout).call(),
            HttpMethod::Post => {
                let builder = self.decorate(self.agent.post(url), request, timeout);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = self.decorate(self.agent.put(url), request, timeout);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Patch => {
                let builder = self.decorate(self.agent.patch(url), request, timeout);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| TransportError {
                message: e.to_string(),
                status: Some(status),
            })?;

        Ok(HttpResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

impl UreqTransport {
    fn decorate<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        request: &HttpRequest,
        timeout: Option<Duration>,
    ) -> ureq::RequestBuilder<B> {
        builder = builder
            .header("user-agent", self.user_agent.as_str())
            .header("accept", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        if let Some(timeout) = timeout {
            builder = builder.config().timeout_global(Some(timeout)).build();
        }
        builder
    }
}
