//! Layer-2 connection operations.

use crate::client::EcxClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::mapping::{create_l2_connection_request, create_l2_redundant_connection_request};
use crate::pagination::collect_pages;
use crate::types::{ConnectionStatus, L2Connection, L2ConnectionConfirmation, L2ConnectionToConfirm};
use crate::update::L2ConnectionUpdateRequest;
use crate::wire;

pub(crate) const CONNECTIONS_PATH: &str = "/l2/connections";
const BUYER_CONNECTIONS_PATH: &str = "/l2/buyer/connections";

impl EcxClient {
    pub fn build_get_l2_connection(&self, uuid: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url_with_id(CONNECTIONS_PATH, uuid))
    }

    pub fn build_create_l2_connection(&self, conn: &L2Connection) -> Result<HttpRequest, ApiError> {
        HttpRequest::new(HttpMethod::Post, self.url(CONNECTIONS_PATH))
            .with_json_body(&create_l2_connection_request(conn))
    }

    pub fn build_create_l2_redundant_connection(
        &self,
        primary: &L2Connection,
        secondary: &L2Connection,
    ) -> Result<HttpRequest, ApiError> {
        HttpRequest::new(HttpMethod::Post, self.url(CONNECTIONS_PATH))
            .with_json_body(&create_l2_redundant_connection_request(primary, secondary))
    }

    pub fn build_delete_l2_connection(&self, uuid: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url_with_id(CONNECTIONS_PATH, uuid))
    }

    pub fn build_confirm_l2_connection(
        &self,
        uuid: &str,
        conn: &L2ConnectionToConfirm,
    ) -> Result<HttpRequest, ApiError> {
        HttpRequest::new(HttpMethod::Patch, self.url_with_id(CONNECTIONS_PATH, uuid))
            .with_query("action", "Approve")
            .with_json_body(&wire::ConfirmL2ConnectionRequest::from(conn))
    }

    /// Request for one page of buyer connections filtered by `statuses`.
    ///
    /// `page_number` is `None` for the first page.
    pub fn build_get_l2_outgoing_connections(
        &self,
        statuses: &[ConnectionStatus],
        page_number: Option<u32>,
    ) -> HttpRequest {
        let mut req = HttpRequest::new(HttpMethod::Get, self.url(BUYER_CONNECTIONS_PATH));
        if let Some(size) = self.page_size() {
            req = req.with_query("pageSize", size.to_string());
        }
        if !statuses.is_empty() {
            let joined = statuses
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",");
            req = req.with_query("status", joined);
        }
        if let Some(number) = page_number {
            req = req.with_query("pageNumber", number.to_string());
        }
        req
    }

    /// Retrieve the connection with the given uuid.
    pub fn get_l2_connection(&self, uuid: &str) -> Result<L2Connection, ApiError> {
        let resp: wire::L2ConnectionResponse = self.execute_json(self.build_get_l2_connection(uuid))?;
        Ok(resp.into())
    }

    /// Create a non-redundant connection.
    ///
    /// Returns `conn` with the uuid assigned by the server.
    pub fn create_l2_connection(&self, conn: &L2Connection) -> Result<L2Connection, ApiError> {
        let resp: wire::CreateL2ConnectionResponse =
            self.execute_json(self.build_create_l2_connection(conn)?)?;
        Ok(L2Connection {
            uuid: resp.primary_connection_id,
            ..conn.clone()
        })
    }

    /// Create a redundant connection pair in one call.
    ///
    /// `primary` is the baseline for the request; `secondary` only supplies
    /// the second leg's attributes. Returns `primary` enriched with both the
    /// assigned uuid and the uuid of the redundant leg.
    pub fn create_l2_redundant_connection(
        &self,
        primary: &L2Connection,
        secondary: &L2Connection,
    ) -> Result<L2Connection, ApiError> {
        let resp: wire::CreateL2ConnectionResponse =
            self.execute_json(self.build_create_l2_redundant_connection(primary, secondary)?)?;
        Ok(L2Connection {
            uuid: resp.primary_connection_id,
            redundant_uuid: resp.secondary_connection_id,
            ..primary.clone()
        })
    }

    pub fn delete_l2_connection(&self, uuid: &str) -> Result<(), ApiError> {
        self.execute(self.build_delete_l2_connection(uuid))?;
        Ok(())
    }

    /// Accept a hosted connection on the seller side.
    pub fn confirm_l2_connection(
        &self,
        uuid: &str,
        conn: &L2ConnectionToConfirm,
    ) -> Result<L2ConnectionConfirmation, ApiError> {
        let resp: wire::ConfirmL2ConnectionResponse =
            self.execute_json(self.build_confirm_l2_connection(uuid, conn)?)?;
        Ok(resp.into())
    }

    /// List every buyer-side connection in one of `statuses`, across all pages.
    pub fn get_l2_outgoing_connections(
        &self,
        statuses: &[ConnectionStatus],
    ) -> Result<Vec<L2Connection>, ApiError> {
        let content = collect_pages(|page_number| {
            self.execute_json::<wire::L2BuyerConnectionsResponse>(
                self.build_get_l2_outgoing_connections(statuses, page_number),
            )
        })?;
        Ok(content.into_iter().map(Into::into).collect())
    }

    /// Start a composite update of the connection with the given uuid.
    pub fn new_l2_connection_update_request(&self, uuid: &str) -> L2ConnectionUpdateRequest<'_> {
        L2ConnectionUpdateRequest::new(self, uuid)
    }
}
