//! Domain types for the ECX layer-2 API.
//!
//! # Design
//! These are the values callers work with. They are decoupled from the wire
//! DTOs in `wire`, which follow the provider's JSON naming; `mapping`
//! converts between the two. Fields are optional throughout because the API
//! omits unset attributes and treats an absent field differently from a zero
//! or empty one.

use std::collections::HashMap;

use strum::{AsRefStr, Display, EnumString};

/// Lifecycle states of a layer-2 connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    NotAvailable,
    PendingApproval,
    PendingAutoApproval,
    Provisioning,
    Provisioned,
    PendingBgpPeering,
    PendingProviderVlan,
    PendingDelete,
    Deprovisioning,
    Deprovisioned,
    NotProvisioned,
    Rejected,
    Failed,
}

/// A layer-2 connection managed by ECX Fabric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct L2Connection {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub profile_uuid: Option<String>,
    pub speed: Option<u32>,
    pub speed_unit: Option<String>,
    pub status: Option<String>,
    pub provider_status: Option<String>,
    pub notifications: Vec<String>,
    pub purchase_order_number: Option<String>,
    pub port_uuid: Option<String>,
    pub device_uuid: Option<String>,
    pub vlan_s_tag: Option<u32>,
    pub vlan_c_tag: Option<u32>,
    pub named_tag: Option<String>,
    pub additional_info: Vec<L2ConnectionAdditionalInfo>,
    pub z_side_port_uuid: Option<String>,
    pub z_side_vlan_s_tag: Option<u32>,
    pub z_side_vlan_c_tag: Option<u32>,
    pub seller_region: Option<String>,
    pub seller_metro_code: Option<String>,
    pub authorization_key: Option<String>,
    pub redundant_uuid: Option<String>,
    pub redundancy_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ConnectionAdditionalInfo {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Credentials a seller supplies to accept a hosted connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ConnectionToConfirm {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ConnectionConfirmation {
    pub primary_connection_id: Option<String>,
    pub message: Option<String>,
}

/// A layer-2 service profile published by a seller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct L2ServiceProfile {
    pub uuid: Option<String>,
    pub state: Option<String>,
    pub alert_percentage: Option<f64>,
    pub allow_custom_speed: Option<bool>,
    pub allow_over_subscription: Option<bool>,
    pub api_available: Option<bool>,
    pub auth_key_label: Option<String>,
    pub connection_name_label: Option<String>,
    pub ctag_label: Option<String>,
    pub enable_auto_generate_service_key: Option<bool>,
    pub equinix_managed_port_and_vlan: Option<bool>,
    pub features: L2ServiceProfileFeatures,
    pub integration_id: Option<String>,
    pub name: Option<String>,
    pub on_bandwidth_threshold_notification: Vec<String>,
    pub on_profile_approval_reject_notification: Vec<String>,
    pub on_vc_approval_rejection_notification: Vec<String>,
    pub over_subscription: Option<String>,
    pub ports: Vec<L2ServiceProfilePort>,
    pub private: Option<bool>,
    pub private_user_emails: Vec<String>,
    pub required_redundancy: Option<bool>,
    pub speed_bands: Vec<L2ServiceProfileSpeedBand>,
    pub speed_from_api: Option<bool>,
    pub tag_type: Option<String>,
    pub vlan_same_as_primary: Option<bool>,
    pub description: Option<String>,
    pub metros: Vec<L2SellerProfileMetro>,
    pub additional_infos: Vec<L2SellerProfileAdditionalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ServiceProfileFeatures {
    pub cloud_reach: Option<bool>,
    pub test_profile: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ServiceProfilePort {
    pub id: Option<String>,
    pub metro_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2ServiceProfileSpeedBand {
    pub speed: Option<u32>,
    pub speed_unit: Option<String>,
}

/// A metro in which a seller is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2SellerProfileMetro {
    pub code: Option<String>,
    pub name: Option<String>,
    pub ibxs: Vec<String>,
    pub regions: HashMap<String, String>,
}

/// Extra information a buyer may have to supply when using a seller profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2SellerProfileAdditionalInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub is_mandatory: Option<bool>,
    pub is_capture_in_email: Option<bool>,
}

/// A user port available for connections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Port {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub ibx: Option<String>,
    pub metro_code: Option<String>,
    pub priority: Option<String>,
    pub encapsulation: Option<String>,
    pub buyout: Option<bool>,
    pub bandwidth: Option<String>,
    pub status: Option<String>,
}
