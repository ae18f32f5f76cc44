//! Layer-2 service profile operations.

use crate::client::EcxClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::pagination::collect_pages;
use crate::types::L2ServiceProfile;
use crate::wire;

const PROFILES_PATH: &str = "/l2/serviceprofiles";
const SELLER_PROFILES_PATH: &str = "/l2/serviceprofiles/services";

impl EcxClient {
    /// Request for one page of seller profiles; `page_number` is `None` for
    /// the first page.
    pub fn build_get_l2_seller_profiles(&self, page_number: Option<u32>) -> HttpRequest {
        let mut req = HttpRequest::new(HttpMethod::Get, self.url(SELLER_PROFILES_PATH));
        if let Some(size) = self.page_size() {
            req = req.with_query("pageSize", size.to_string());
        }
        if let Some(number) = page_number {
            req = req.with_query("pageNumber", number.to_string());
        }
        req
    }

    pub fn build_get_l2_service_profile(&self, uuid: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url_with_id(PROFILES_PATH, uuid))
    }

    pub fn build_create_l2_service_profile(&self, sp: &L2ServiceProfile) -> Result<HttpRequest, ApiError> {
        HttpRequest::new(HttpMethod::Post, self.url(PROFILES_PATH))
            .with_json_body(&wire::L2ServiceProfile::from(sp))
    }

    /// Full-replacement request; fails before building anything when `sp`
    /// has no uuid.
    pub fn build_update_l2_service_profile(&self, sp: &L2ServiceProfile) -> Result<HttpRequest, ApiError> {
        if sp.uuid.as_deref().map_or(true, str::is_empty) {
            return Err(ApiError::PreconditionError(
                "target profile structure needs to have UUID defined".to_string(),
            ));
        }
        HttpRequest::new(HttpMethod::Put, self.url(PROFILES_PATH))
            .with_json_body(&wire::L2ServiceProfile::from(sp))
    }

    pub fn build_delete_l2_service_profile(&self, uuid: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url_with_id(PROFILES_PATH, uuid))
    }

    /// List every available seller service profile, across all pages.
    pub fn get_l2_seller_profiles(&self) -> Result<Vec<L2ServiceProfile>, ApiError> {
        let content = collect_pages(|page_number| {
            self.execute_json::<wire::L2SellerProfilesResponse>(self.build_get_l2_seller_profiles(page_number))
        })?;
        Ok(content.into_iter().map(Into::into).collect())
    }

    pub fn get_l2_service_profile(&self, uuid: &str) -> Result<L2ServiceProfile, ApiError> {
        let resp: wire::L2ServiceProfile = self.execute_json(self.build_get_l2_service_profile(uuid))?;
        Ok(resp.into())
    }

    /// Create a service profile; returns `sp` with the assigned uuid.
    pub fn create_l2_service_profile(&self, sp: &L2ServiceProfile) -> Result<L2ServiceProfile, ApiError> {
        let resp: wire::CreateL2ServiceProfileResponse =
            self.execute_json(self.build_create_l2_service_profile(sp)?)?;
        Ok(L2ServiceProfile {
            uuid: resp.uuid,
            ..sp.clone()
        })
    }

    /// Replace the existing profile identified by `sp.uuid` with `sp`.
    pub fn update_l2_service_profile(&self, sp: &L2ServiceProfile) -> Result<L2ServiceProfile, ApiError> {
        self.execute(self.build_update_l2_service_profile(sp)?)?;
        Ok(sp.clone())
    }

    pub fn delete_l2_service_profile(&self, uuid: &str) -> Result<(), ApiError> {
        self.execute(self.build_delete_l2_service_profile(uuid))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scripted_client, BASE_URL};
    use crate::types::{L2ServiceProfileFeatures, L2ServiceProfilePort, L2ServiceProfileSpeedBand};

    fn test_profile() -> L2ServiceProfile {
        L2ServiceProfile {
            alert_percentage: Some(30.2),
            allow_custom_speed: Some(true),
            allow_over_subscription: Some(false),
            api_available: Some(true),
            auth_key_label: Some("authKeyLabel".to_string()),
            connection_name_label: Some("connectionNameLabel".to_string()),
            ctag_label: Some("cTagLabel".to_string()),
            features: L2ServiceProfileFeatures {
                cloud_reach: Some(true),
                test_profile: Some(true),
            },
            integration_id: Some("integrationID".to_string()),
            name: Some("name".to_string()),
            on_bandwidth_threshold_notification: vec!["miro@equinix.com".to_string()],
            over_subscription: Some("2x".to_string()),
            ports: vec![L2ServiceProfilePort {
                id: Some("port-id1".to_string()),
                metro_code: Some("FR".to_string()),
            }],
            private: Some(true),
            speed_bands: vec![
                L2ServiceProfileSpeedBand {
                    speed: Some(100),
                    speed_unit: Some("MB".to_string()),
                },
                L2ServiceProfileSpeedBand {
                    speed: Some(1000),
                    speed_unit: Some("MB".to_string()),
                },
            ],
            tag_type: Some("tagType".to_string()),
            description: Some("Test profile".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn seller_profiles_walk_pages_with_page_size() {
        let (client, transport) = scripted_client();
        let client = client.with_page_size(1);
        transport
            .respond(
                200,
                r#"{"content":[{"uuid":"sp1","name":"first"}],"pageSize":1,"isLastPage":false,"totalCount":3}"#,
            )
            .respond(
                200,
                r#"{"content":[{"uuid":"sp2"}],"pageSize":1,"isLastPage":false,"totalCount":3}"#,
            )
            .respond(
                200,
                r#"{"content":[{"uuid":"sp3","metros":[{"code":"AM","name":"Amsterdam","ibxs":["AM1"],"regions":{"EMEA":"Europe"}}]}],"pageSize":1,"isLastPage":true,"totalCount":3}"#,
            );

        let profiles = client.get_l2_seller_profiles().unwrap();

        let ids: Vec<&str> = profiles.iter().filter_map(|p| p.uuid.as_deref()).collect();
        assert_eq!(ids, vec!["sp1", "sp2", "sp3"]);
        assert_eq!(profiles[2].metros[0].ibxs, vec!["AM1"]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[0].path,
            format!("{BASE_URL}/ecx/v3/l2/serviceprofiles/services")
        );
        assert_eq!(requests[0].query, vec![("pageSize".to_string(), "1".to_string())]);
        assert_eq!(requests[1].query_param("pageNumber"), Some("1"));
        assert_eq!(requests[2].query_param("pageNumber"), Some("2"));
        assert!(requests.iter().all(|r| r.query_param("pageSize") == Some("1")));
    }

    #[test]
    fn get_l2_service_profile_maps_response() {
        let (client, transport) = scripted_client();
        transport.respond(
            200,
            r#"{"uuid":"spId","name":"profile","state":"APPROVED","features":{"cloudReach":true},"speedBands":[{"speed":50,"speedUnit":"MB"}]}"#,
        );

        let sp = client.get_l2_service_profile("spId").unwrap();

        assert_eq!(sp.uuid.as_deref(), Some("spId"));
        assert_eq!(sp.state.as_deref(), Some("APPROVED"));
        assert_eq!(sp.features.cloud_reach, Some(true));
        assert_eq!(sp.speed_bands[0].speed, Some(50));
        assert_eq!(
            transport.requests()[0].path,
            format!("{BASE_URL}/ecx/v3/l2/serviceprofiles/spId")
        );
    }

    #[test]
    fn create_l2_service_profile_assigns_uuid() {
        let (client, transport) = scripted_client();
        transport.respond(200, r#"{"uuid":"newSp"}"#);

        let created = client.create_l2_service_profile(&test_profile()).unwrap();

        assert_eq!(created.uuid.as_deref(), Some("newSp"));
        assert_eq!(created.name.as_deref(), Some("name"));
        let body = transport.request_body(0);
        assert_eq!(body["name"], "name");
        assert_eq!(body["alertPercentage"], 30.2);
        assert_eq!(body["ctagLabel"], "cTagLabel");
        assert_eq!(body["features"]["testProfile"], true);
        assert_eq!(body["speedBands"][1]["speed"], 1000);
        assert!(body.get("uuid").is_none());
    }

    #[test]
    fn update_without_uuid_fails_before_network() {
        let (client, transport) = scripted_client();

        let err = client.update_l2_service_profile(&test_profile()).unwrap_err();

        assert!(matches!(err, ApiError::PreconditionError(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn update_puts_full_profile() {
        let (client, transport) = scripted_client();
        transport.respond(200, r#"{"uuid":"spId"}"#);
        let sp = L2ServiceProfile {
            uuid: Some("spId".to_string()),
            ..test_profile()
        };

        let updated = client.update_l2_service_profile(&sp).unwrap();

        assert_eq!(updated, sp);
        let req = &transport.requests()[0];
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, format!("{BASE_URL}/ecx/v3/l2/serviceprofiles"));
        assert_eq!(transport.request_body(0)["uuid"], "spId");
    }

    #[test]
    fn delete_l2_service_profile_uses_id_path() {
        let (client, transport) = scripted_client();
        transport.respond(200, r#"{"message":"deleted"}"#);

        client.delete_l2_service_profile("spId").unwrap();

        let req = &transport.requests()[0];
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, format!("{BASE_URL}/ecx/v3/l2/serviceprofiles/spId"));
    }
}
