//! Request and response bodies as the provider spells them.
//!
//! Every attribute is optional and skipped when unset, so a request never
//! sends a zero value the server would read as an explicit setting.
//! `notifications` and `purchaseOrderNumber` on connection requests are the
//! exception: the API expects them present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pagination::PageEnvelope;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ConnectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "sellerServiceUUID", skip_serializing_if = "Option::is_none")]
    pub seller_service_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_status: Option<String>,
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    #[serde(rename = "portUUID", skip_serializing_if = "Option::is_none")]
    pub port_uuid: Option<String>,
    #[serde(rename = "virtualDeviceUUID", skip_serializing_if = "Option::is_none")]
    pub virtual_device_uuid: Option<String>,
    #[serde(rename = "vlanSTag", skip_serializing_if = "Option::is_none")]
    pub vlan_s_tag: Option<u32>,
    #[serde(rename = "vlanCTag", skip_serializing_if = "Option::is_none")]
    pub vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_info: Vec<L2ConnectionAdditionalInfo>,
    #[serde(rename = "zSidePortUUID", skip_serializing_if = "Option::is_none")]
    pub z_side_port_uuid: Option<String>,
    #[serde(rename = "zSideVlanSTag", skip_serializing_if = "Option::is_none")]
    pub z_side_vlan_s_tag: Option<u32>,
    #[serde(rename = "zSideVlanCTag", skip_serializing_if = "Option::is_none")]
    pub z_side_vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_metro_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_key: Option<String>,
    #[serde(rename = "redundantUUID", skip_serializing_if = "Option::is_none")]
    pub redundant_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redundancy_type: Option<String>,
}

/// Body of `POST /l2/connections`, for single and redundant connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ConnectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_name: Option<String>,
    #[serde(rename = "profileUUID", skip_serializing_if = "Option::is_none")]
    pub profile_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<String>,
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(default)]
    pub purchase_order_number: String,
    #[serde(rename = "primaryPortUUID", skip_serializing_if = "Option::is_none")]
    pub primary_port_uuid: Option<String>,
    #[serde(rename = "virtualDeviceUUID", skip_serializing_if = "Option::is_none")]
    pub virtual_device_uuid: Option<String>,
    #[serde(rename = "primaryVlanSTag", skip_serializing_if = "Option::is_none")]
    pub primary_vlan_s_tag: Option<u32>,
    #[serde(rename = "primaryVlanCTag", skip_serializing_if = "Option::is_none")]
    pub primary_vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_info: Vec<L2ConnectionAdditionalInfo>,
    #[serde(rename = "primaryZSidePortUUID", skip_serializing_if = "Option::is_none")]
    pub primary_z_side_port_uuid: Option<String>,
    #[serde(rename = "primaryZSideVlanSTag", skip_serializing_if = "Option::is_none")]
    pub primary_z_side_vlan_s_tag: Option<u32>,
    #[serde(rename = "primaryZSideVlanCTag", skip_serializing_if = "Option::is_none")]
    pub primary_z_side_vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    #[serde(rename = "secondaryPortUUID", skip_serializing_if = "Option::is_none")]
    pub secondary_port_uuid: Option<String>,
    #[serde(rename = "secondaryVirtualDeviceUUID", skip_serializing_if = "Option::is_none")]
    pub secondary_virtual_device_uuid: Option<String>,
    #[serde(rename = "secondaryVlanSTag", skip_serializing_if = "Option::is_none")]
    pub secondary_vlan_s_tag: Option<u32>,
    #[serde(rename = "secondaryVlanCTag", skip_serializing_if = "Option::is_none")]
    pub secondary_vlan_c_tag: Option<u32>,
    #[serde(rename = "secondaryZSidePortUUID", skip_serializing_if = "Option::is_none")]
    pub secondary_z_side_port_uuid: Option<String>,
    #[serde(rename = "secondaryZSideVlanSTag", skip_serializing_if = "Option::is_none")]
    pub secondary_z_side_vlan_s_tag: Option<u32>,
    #[serde(rename = "secondaryZSideVlanCTag", skip_serializing_if = "Option::is_none")]
    pub secondary_z_side_vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_metro_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateL2ConnectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Sparse body of `PATCH /l2/connections/{id}?action=update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ConnectionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<String>,
}

impl L2ConnectionUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.speed.is_none() && self.speed_unit.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmL2ConnectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmL2ConnectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_connection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ConnectionAdditionalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

pub type L2BuyerConnectionsResponse = PageEnvelope<L2ConnectionResponse>;

pub type L2SellerProfilesResponse = PageEnvelope<L2ServiceProfile>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ServiceProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_custom_speed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_over_subscription: Option<bool>,
    #[serde(rename = "apiAvailable", skip_serializing_if = "Option::is_none")]
    pub api_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name_label: Option<String>,
    #[serde(rename = "ctagLabel", skip_serializing_if = "Option::is_none")]
    pub ctag_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_generate_service_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equinix_managed_port_and_vlan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<L2ServiceProfileFeatures>,
    #[serde(rename = "integrationId", skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_bandwidth_threshold_notification: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_profile_approval_reject_notification: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_vc_approval_rejection_notification: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<L2ServiceProfilePort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_user_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_redundancy: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speed_bands: Vec<L2ServiceProfileSpeedBand>,
    #[serde(rename = "speedFromAPI", skip_serializing_if = "Option::is_none")]
    pub speed_from_api: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_same_as_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metros: Vec<L2SellerProfileMetro>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_infos: Vec<L2SellerProfileAdditionalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ServiceProfileFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_reach: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_profile: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ServiceProfilePort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2ServiceProfileSpeedBand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2SellerProfileMetro {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ibxs", default, skip_serializing_if = "Vec::is_empty")]
    pub ibxs: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub regions: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2SellerProfileAdditionalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_in_email: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateL2ServiceProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encapsulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bandwidth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_omits_unset_fields() {
        let req = L2ConnectionUpdateRequest {
            speed: Some(500),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"speed": 500}));
        assert!(!req.is_empty());
        assert!(L2ConnectionUpdateRequest::default().is_empty());
    }

    #[test]
    fn connection_request_always_sends_notifications_and_po_number() {
        let json = serde_json::to_value(L2ConnectionRequest::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"notifications": [], "purchaseOrderNumber": ""})
        );
    }

    #[test]
    fn connection_response_uses_provider_field_names() {
        let resp: L2ConnectionResponse = serde_json::from_str(
            r#"{"uuid":"u1","sellerServiceUUID":"sp1","portUUID":"p1","vlanSTag":100,"zSideVlanCTag":7,"redundantUUID":"u2"}"#,
        )
        .unwrap();
        assert_eq!(resp.seller_service_uuid.as_deref(), Some("sp1"));
        assert_eq!(resp.port_uuid.as_deref(), Some("p1"));
        assert_eq!(resp.vlan_s_tag, Some(100));
        assert_eq!(resp.z_side_vlan_c_tag, Some(7));
        assert_eq!(resp.redundant_uuid.as_deref(), Some("u2"));
        assert!(resp.notifications.is_empty());
    }
}
