//! Composite update of a layer-2 connection.
//!
//! # Design
//! `L2ConnectionUpdateRequest` collects a sparse set of field changes and
//! sends them together as one `PATCH ...?action=update`. Setters take and
//! return the request by value so calls chain, and `execute` consumes it,
//! so one request value can be submitted at most once.
//!
//! The update is not atomic on the client side. Success means the server
//! accepted every field that was set. Failure means none is confirmed
//! applied; if the server applies fields one by one and stops halfway,
//! nothing here rolls the others back.

use crate::client::EcxClient;
use crate::connections::CONNECTIONS_PATH;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::wire;

/// Pending changes for one connection.
///
/// Not `Clone`: a request value is submitted at most once.
///
/// ```compile_fail
/// use ecx_core::{ClientConfig, EcxClient, L2ConnectionUpdateRequest};
///
/// let client = EcxClient::from_config(&ClientConfig::new("http://localhost:8888"));
/// let pending = client.new_l2_connection_update_request("connId").with_name("renamed");
/// let copy: L2ConnectionUpdateRequest<'_> = pending.clone();
/// ```
#[derive(Debug)]
#[must_use = "an update request does nothing until `execute` is called"]
pub struct L2ConnectionUpdateRequest<'a> {
    client: &'a EcxClient,
    uuid: String,
    fields: wire::L2ConnectionUpdateRequest,
}

impl<'a> L2ConnectionUpdateRequest<'a> {
    pub(crate) fn new(client: &'a EcxClient, uuid: &str) -> Self {
        Self {
            client,
            uuid: uuid.to_string(),
            fields: wire::L2ConnectionUpdateRequest::default(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.fields.name = Some(name.to_string());
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.fields.speed = Some(speed);
        self
    }

    pub fn with_speed_unit(mut self, speed_unit: &str) -> Self {
        self.fields.speed_unit = Some(speed_unit.to_string());
        self
    }

    /// Set speed and its unit together.
    pub fn with_bandwidth(self, speed: u32, speed_unit: &str) -> Self {
        self.with_speed(speed).with_speed_unit(speed_unit)
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Whether no field has been set yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The request `execute` would send, or `None` when nothing is pending.
    pub fn build(&self) -> Result<Option<HttpRequest>, ApiError> {
        if self.fields.is_empty() {
            return Ok(None);
        }
        let req = HttpRequest::new(
            HttpMethod::Patch,
            self.client.url_with_id(CONNECTIONS_PATH, &self.uuid),
        )
        .with_query("action", "update")
        .with_json_body(&self.fields)?;
        Ok(Some(req))
    }

    /// Send the pending changes. With nothing pending this returns `Ok(())`
    /// without any network call.
    pub fn execute(self) -> Result<(), ApiError> {
        match self.build()? {
            Some(req) => {
                self.client.execute(req)?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scripted_client, BASE_URL};

    #[test]
    fn empty_update_makes_no_call() {
        let (client, transport) = scripted_client();

        let req = client.new_l2_connection_update_request("connId");
        assert!(req.is_empty());
        req.execute().unwrap();

        assert!(transport.requests().is_empty());
    }

    #[test]
    fn single_field_update_sends_only_that_field() {
        let (client, transport) = scripted_client();
        transport.respond(200, "{}");

        client
            .new_l2_connection_update_request("connId")
            .with_name("newConnName")
            .execute()
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Patch);
        assert_eq!(requests[0].path, format!("{BASE_URL}/ecx/v3/l2/connections/connId"));
        assert_eq!(
            requests[0].query,
            vec![("action".to_string(), "update".to_string())]
        );
        assert_eq!(
            transport.request_body(0),
            serde_json::json!({"name": "newConnName"})
        );
    }

    #[test]
    fn chained_fields_are_bundled_into_one_call() {
        let (client, transport) = scripted_client();
        transport.respond(200, "");

        client
            .new_l2_connection_update_request("connId")
            .with_name("newConnName")
            .with_bandwidth(500, "MB")
            .execute()
            .unwrap();

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            transport.request_body(0),
            serde_json::json!({"name": "newConnName", "speed": 500, "speedUnit": "MB"})
        );
    }

    #[test]
    fn zero_speed_is_sent_when_explicitly_set() {
        let (client, transport) = scripted_client();
        transport.respond(200, "");

        client
            .new_l2_connection_update_request("connId")
            .with_speed(0)
            .execute()
            .unwrap();

        assert_eq!(transport.request_body(0), serde_json::json!({"speed": 0}));
    }

    #[test]
    fn rejected_update_surfaces_normalized_error() {
        let (client, transport) = scripted_client();
        transport.respond(
            400,
            r#"[{"errorCode":"IC-LAYER2-4021","errorMessage":"invalid speed"},{"errorCode":"IC-LAYER2-4022","errorMessage":"invalid unit"}]"#,
        );

        let err = client
            .new_l2_connection_update_request("connId")
            .with_bandwidth(7, "XB")
            .execute()
            .unwrap_err();

        let rest = err.rest_error().unwrap();
        assert_eq!(rest.http_status, Some(400));
        assert_eq!(rest.errors.len(), 2);
        assert_eq!(rest.errors[0].code, "IC-LAYER2-4021");
    }

    #[test]
    fn build_does_not_touch_the_network() {
        let (client, transport) = scripted_client();

        let pending = client
            .new_l2_connection_update_request("conn/1")
            .with_speed_unit("GB");
        let req = pending.build().unwrap().unwrap();

        assert_eq!(pending.uuid(), "conn/1");
        assert_eq!(req.path, format!("{BASE_URL}/ecx/v3/l2/connections/conn%2F1"));
        assert!(transport.requests().is_empty());
    }
}
