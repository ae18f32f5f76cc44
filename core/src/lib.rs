//! Synchronous client core for the Equinix Cloud Exchange (ECX) Fabric
//! layer-2 REST API.
//!
//! # Overview
//! Covers layer-2 connections (create, redundant create, read, list outgoing,
//! update, delete, seller confirmation), layer-2 service profiles and user
//! ports. Every operation is a single blocking round-trip through a
//! `Transport`; the default is `UreqTransport`.
//!
//! # Design
//! - Each operation has a pure `build_*` method that produces an
//!   `HttpRequest`, and an executing method that sends it through
//!   `EcxClient::execute` and maps the result to domain types.
//! - Domain types (`types`) are kept apart from the provider's JSON shapes
//!   (`wire`); `mapping` converts between them.
//! - Error bodies, in either of the provider's two shapes, are normalized
//!   into one `RestError` (`normalize`).
//! - List endpoints are drained page by page (`pagination`).

pub mod client;
pub mod config;
pub mod connections;
pub mod context;
pub mod error;
pub mod http;
pub mod mapping;
pub mod normalize;
pub mod pagination;
pub mod ports;
pub mod profiles;
pub mod transport;
pub mod types;
pub mod update;
pub mod wire;

#[cfg(test)]
mod testing;

pub use client::{EcxClient, API_PREFIX};
pub use config::ClientConfig;
pub use context::Context;
pub use error::{ApiError, ErrorDetail, RestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use normalize::{normalize_error_body, MULTIPLE_ERRORS_MESSAGE};
pub use pagination::PageEnvelope;
pub use transport::{Transport, TransportError, UreqTransport, DEFAULT_USER_AGENT};
pub use types::{
    ConnectionStatus, L2Connection, L2ConnectionAdditionalInfo, L2ConnectionConfirmation,
    L2ConnectionToConfirm, L2SellerProfileAdditionalInfo, L2SellerProfileMetro, L2ServiceProfile,
    L2ServiceProfileFeatures, L2ServiceProfilePort, L2ServiceProfileSpeedBand, Port,
};
pub use update::L2ConnectionUpdateRequest;
