//! The ECX client and its request executor.
//!
//! # Design
//! `EcxClient` holds the base URL, the list page size, a `Context` and a
//! shared `Transport`; it carries no other state between calls. Each domain
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and an executing method that runs it through `execute`/`execute_json`.
//! Hosts that prefer to do their own I/O can call the builders directly and
//! feed responses to `normalize_error_body`.
//!
//! Every call results in exactly one transport round-trip. Nothing is
//! retried; a caller that wants retries loops around the operation.
//!
//! The round-trip runs on a short-lived worker thread while the calling
//! thread polls the `Context`, so cancelling or reaching the deadline returns
//! control at once. The abandoned worker finishes on its own and its result
//! is dropped.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, Span};

use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::{ApiError, RestError};
use crate::http::{encode_segment, HttpRequest, HttpResponse};
use crate::normalize::normalize_error_body;
use crate::transport::{Transport, UreqTransport};

/// Version prefix of every provider resource path.
pub const API_PREFIX: &str = "/ecx/v3";

/// How often a waiting call re-checks its context.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Client for the ECX Fabric layer-2 API.
///
/// Cheap to clone; clones share the transport and the context's
/// cancellation flag.
#[derive(Clone)]
pub struct EcxClient {
    base_url: String,
    page_size: Option<u32>,
    context: Context,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for EcxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcxClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl EcxClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: None,
            context: Context::background(),
            transport,
        }
    }

    /// Build a client backed by `UreqTransport`.
    pub fn from_config(config: &ClientConfig) -> Self {
        let transport = UreqTransport::new(&config.user_agent, config.timeout);
        let client = Self::new(&config.base_url, Arc::new(transport));
        match config.page_size {
            Some(size) => client.with_page_size(size),
            None => client,
        }
    }

    /// A client issuing its calls under `context`.
    pub fn with_context(&self, context: Context) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = Some(page_size);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Absolute URL of a resource path below `API_PREFIX`.
    pub(crate) fn url(&self, resource: &str) -> String {
        format!("{}{API_PREFIX}{resource}", self.base_url)
    }

    /// Absolute URL of `resource/{id}` with `id` escaped as one segment.
    pub(crate) fn url_with_id(&self, resource: &str, id: &str) -> String {
        format!("{}/{}", self.url(resource), encode_segment(id))
    }

    /// Send `request` and return the response when its status is below 400.
    ///
    /// Transport failures and error statuses become `ApiError::TransportError`
    /// and `ApiError::HttpError` respectively, both carrying a `RestError`.
    #[instrument(
        name = "ecx_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = %request.path,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(reason) = self.context.check() {
            return Err(transport_failure(reason, None));
        }

        let response = self.send_cancellable(request)?;

        Span::current().record("http.status_code", response.status);
        debug!(body_len = response.body.len(), "received response");

        if response.is_error() {
            return Err(ApiError::HttpError(normalize_error_body(
                response.status,
                &response.body,
            )));
        }
        Ok(response)
    }

    /// Send `request` and decode a successful body as `R`.
    pub fn execute_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.execute(request)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn send_cancellable(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);
        let timeout = self.context.remaining();
        let span = Span::current();
        thread::Builder::new()
            .name("ecx-transport".to_string())
            .spawn(move || {
                let result = span.in_scope(|| transport.send(&request, timeout));
                // The caller may have given up already.
                let _ = tx.send(result);
            })
            .map_err(|e| transport_failure(&e.to_string(), None))?;

        loop {
            if let Some(reason) = self.context.check() {
                debug!(reason, "abandoning in-flight request");
                return Err(transport_failure(reason, None));
            }
            let wait = self
                .context
                .remaining()
                .map_or(CANCEL_POLL_INTERVAL, |left| left.min(CANCEL_POLL_INTERVAL));
            match rx.recv_timeout(wait) {
                Ok(result) => return result.map_err(|e| transport_failure(&e.message, e.status)),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(transport_failure("transport worker exited without a response", None))
                }
            }
        }
    }
}

fn transport_failure(cause: &str, status: Option<u16>) -> ApiError {
    ApiError::TransportError(RestError {
        http_status: status,
        message: format!("operation failed: {cause}"),
        errors: Vec::new(),
    })
}
