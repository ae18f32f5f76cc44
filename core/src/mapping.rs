//! Conversions between domain types and wire DTOs.

use crate::types::{
    L2Connection, L2ConnectionAdditionalInfo, L2ConnectionConfirmation, L2ConnectionToConfirm,
    L2SellerProfileAdditionalInfo, L2SellerProfileMetro, L2ServiceProfile, L2ServiceProfileFeatures,
    L2ServiceProfilePort, L2ServiceProfileSpeedBand, Port,
};
use crate::wire;

impl From<wire::L2ConnectionResponse> for L2Connection {
    fn from(resp: wire::L2ConnectionResponse) -> Self {
        Self {
            uuid: resp.uuid,
            name: resp.name,
            profile_uuid: resp.seller_service_uuid,
            speed: resp.speed,
            speed_unit: resp.speed_unit,
            status: resp.status,
            provider_status: resp.provider_status,
            notifications: resp.notifications,
            purchase_order_number: resp.purchase_order_number,
            port_uuid: resp.port_uuid,
            device_uuid: resp.virtual_device_uuid,
            vlan_s_tag: resp.vlan_s_tag,
            vlan_c_tag: resp.vlan_c_tag,
            named_tag: resp.named_tag,
            additional_info: resp.additional_info.into_iter().map(Into::into).collect(),
            z_side_port_uuid: resp.z_side_port_uuid,
            z_side_vlan_s_tag: resp.z_side_vlan_s_tag,
            z_side_vlan_c_tag: resp.z_side_vlan_c_tag,
            seller_region: resp.seller_region,
            seller_metro_code: resp.seller_metro_code,
            authorization_key: resp.authorization_key,
            redundant_uuid: resp.redundant_uuid,
            redundancy_type: resp.redundancy_type,
        }
    }
}

/// Creation body for a single connection.
pub(crate) fn create_l2_connection_request(conn: &L2Connection) -> wire::L2ConnectionRequest {
    wire::L2ConnectionRequest {
        primary_name: conn.name.clone(),
        profile_uuid: conn.profile_uuid.clone(),
        speed: conn.speed,
        speed_unit: conn.speed_unit.clone(),
        notifications: conn.notifications.clone(),
        purchase_order_number: conn.purchase_order_number.clone().unwrap_or_default(),
        primary_port_uuid: conn.port_uuid.clone(),
        virtual_device_uuid: conn.device_uuid.clone(),
        primary_vlan_s_tag: conn.vlan_s_tag,
        primary_vlan_c_tag: conn.vlan_c_tag,
        named_tag: conn.named_tag.clone(),
        additional_info: conn.additional_info.iter().cloned().map(Into::into).collect(),
        primary_z_side_port_uuid: conn.z_side_port_uuid.clone(),
        primary_z_side_vlan_s_tag: conn.z_side_vlan_s_tag,
        primary_z_side_vlan_c_tag: conn.z_side_vlan_c_tag,
        seller_region: conn.seller_region.clone(),
        seller_metro_code: conn.seller_metro_code.clone(),
        authorization_key: conn.authorization_key.clone(),
        ..Default::default()
    }
}

/// Creation body for a redundant pair. `primary` is the baseline; only the
/// secondary leg's own attributes are taken from `secondary`.
pub(crate) fn create_l2_redundant_connection_request(
    primary: &L2Connection,
    secondary: &L2Connection,
) -> wire::L2ConnectionRequest {
    wire::L2ConnectionRequest {
        secondary_name: secondary.name.clone(),
        secondary_port_uuid: secondary.port_uuid.clone(),
        secondary_virtual_device_uuid: secondary.device_uuid.clone(),
        secondary_vlan_s_tag: secondary.vlan_s_tag,
        secondary_vlan_c_tag: secondary.vlan_c_tag,
        secondary_z_side_port_uuid: secondary.z_side_port_uuid.clone(),
        secondary_z_side_vlan_s_tag: secondary.z_side_vlan_s_tag,
        secondary_z_side_vlan_c_tag: secondary.z_side_vlan_c_tag,
        ..create_l2_connection_request(primary)
    }
}

impl From<L2ConnectionAdditionalInfo> for wire::L2ConnectionAdditionalInfo {
    fn from(info: L2ConnectionAdditionalInfo) -> Self {
        Self {
            name: info.name,
            value: info.value,
        }
    }
}

impl From<wire::L2ConnectionAdditionalInfo> for L2ConnectionAdditionalInfo {
    fn from(info: wire::L2ConnectionAdditionalInfo) -> Self {
        Self {
            name: info.name,
            value: info.value,
        }
    }
}

impl From<&L2ConnectionToConfirm> for wire::ConfirmL2ConnectionRequest {
    fn from(conn: &L2ConnectionToConfirm) -> Self {
        Self {
            access_key: conn.access_key.clone(),
            secret_key: conn.secret_key.clone(),
        }
    }
}

impl From<wire::ConfirmL2ConnectionResponse> for L2ConnectionConfirmation {
    fn from(resp: wire::ConfirmL2ConnectionResponse) -> Self {
        Self {
            primary_connection_id: resp.primary_connection_id,
            message: resp.message,
        }
    }
}

impl From<&L2ServiceProfile> for wire::L2ServiceProfile {
    fn from(sp: &L2ServiceProfile) -> Self {
        Self {
            uuid: sp.uuid.clone(),
            state: sp.state.clone(),
            alert_percentage: sp.alert_percentage,
            allow_custom_speed: sp.allow_custom_speed,
            allow_over_subscription: sp.allow_over_subscription,
            api_available: sp.api_available,
            auth_key_label: sp.auth_key_label.clone(),
            connection_name_label: sp.connection_name_label.clone(),
            ctag_label: sp.ctag_label.clone(),
            enable_auto_generate_service_key: sp.enable_auto_generate_service_key,
            equinix_managed_port_and_vlan: sp.equinix_managed_port_and_vlan,
            features: Some(wire::L2ServiceProfileFeatures {
                cloud_reach: sp.features.cloud_reach,
                test_profile: sp.features.test_profile,
            }),
            integration_id: sp.integration_id.clone(),
            name: sp.name.clone(),
            on_bandwidth_threshold_notification: sp.on_bandwidth_threshold_notification.clone(),
            on_profile_approval_reject_notification: sp
                .on_profile_approval_reject_notification
                .clone(),
            on_vc_approval_rejection_notification: sp.on_vc_approval_rejection_notification.clone(),
            over_subscription: sp.over_subscription.clone(),
            ports: sp
                .ports
                .iter()
                .map(|p| wire::L2ServiceProfilePort {
                    id: p.id.clone(),
                    metro_code: p.metro_code.clone(),
                })
                .collect(),
            private: sp.private,
            private_user_emails: sp.private_user_emails.clone(),
            required_redundancy: sp.required_redundancy,
            speed_bands: sp
                .speed_bands
                .iter()
                .map(|b| wire::L2ServiceProfileSpeedBand {
                    speed: b.speed,
                    speed_unit: b.speed_unit.clone(),
                })
                .collect(),
            speed_from_api: sp.speed_from_api,
            tag_type: sp.tag_type.clone(),
            vlan_same_as_primary: sp.vlan_same_as_primary,
            description: sp.description.clone(),
            // Metros and additional infos are seller-side read-only data.
            metros: Vec::new(),
            additional_infos: Vec::new(),
        }
    }
}

impl From<wire::L2ServiceProfile> for L2ServiceProfile {
    fn from(sp: wire::L2ServiceProfile) -> Self {
        let features = sp.features.unwrap_or_default();
        Self {
            uuid: sp.uuid,
            state: sp.state,
            alert_percentage: sp.alert_percentage,
            allow_custom_speed: sp.allow_custom_speed,
            allow_over_subscription: sp.allow_over_subscription,
            api_available: sp.api_available,
            auth_key_label: sp.auth_key_label,
            connection_name_label: sp.connection_name_label,
            ctag_label: sp.ctag_label,
            enable_auto_generate_service_key: sp.enable_auto_generate_service_key,
            equinix_managed_port_and_vlan: sp.equinix_managed_port_and_vlan,
            features: L2ServiceProfileFeatures {
                cloud_reach: features.cloud_reach,
                test_profile: features.test_profile,
            },
            integration_id: sp.integration_id,
            name: sp.name,
            on_bandwidth_threshold_notification: sp.on_bandwidth_threshold_notification,
            on_profile_approval_reject_notification: sp.on_profile_approval_reject_notification,
            on_vc_approval_rejection_notification: sp.on_vc_approval_rejection_notification,
            over_subscription: sp.over_subscription,
            ports: sp
                .ports
                .into_iter()
                .map(|p| L2ServiceProfilePort {
                    id: p.id,
                    metro_code: p.metro_code,
                })
                .collect(),
            private: sp.private,
            private_user_emails: sp.private_user_emails,
            required_redundancy: sp.required_redundancy,
            speed_bands: sp
                .speed_bands
                .into_iter()
                .map(|b| L2ServiceProfileSpeedBand {
                    speed: b.speed,
                    speed_unit: b.speed_unit,
                })
                .collect(),
            speed_from_api: sp.speed_from_api,
            tag_type: sp.tag_type,
            vlan_same_as_primary: sp.vlan_same_as_primary,
            description: sp.description,
            metros: sp
                .metros
                .into_iter()
                .map(|m| L2SellerProfileMetro {
                    code: m.code,
                    name: m.name,
                    ibxs: m.ibxs,
                    regions: m.regions,
                })
                .collect(),
            additional_infos: sp
                .additional_infos
                .into_iter()
                .map(|i| L2SellerProfileAdditionalInfo {
                    name: i.name,
                    description: i.description,
                    data_type: i.data_type,
                    is_mandatory: i.mandatory,
                    is_capture_in_email: i.capture_in_email,
                })
                .collect(),
        }
    }
}

impl From<wire::Port> for Port {
    fn from(port: wire::Port) -> Self {
        Self {
            uuid: port.uuid,
            name: port.name,
            region: port.region,
            ibx: port.ibx,
            metro_code: port.metro_code,
            priority: port.device_priority,
            encapsulation: port.encapsulation,
            buyout: port.buyout,
            bandwidth: port.total_bandwidth.map(|b| b.to_string()),
            status: port.provision_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> L2Connection {
        L2Connection {
            name: Some("name".to_string()),
            profile_uuid: Some("profileUUID".to_string()),
            speed: Some(666),
            speed_unit: Some("MB".to_string()),
            notifications: vec!["janek@equinix.com".to_string()],
            purchase_order_number: Some("orderNumber".to_string()),
            port_uuid: Some("primaryPortUUID".to_string()),
            vlan_s_tag: Some(100),
            vlan_c_tag: Some(101),
            additional_info: vec![L2ConnectionAdditionalInfo {
                name: Some("asn".to_string()),
                value: Some("1543".to_string()),
            }],
            z_side_port_uuid: Some("primaryZSidePortUUID".to_string()),
            z_side_vlan_s_tag: Some(200),
            seller_metro_code: Some("AM".to_string()),
            authorization_key: Some("authorizationKey".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn create_request_maps_primary_fields() {
        let req = create_l2_connection_request(&primary());
        assert_eq!(req.primary_name.as_deref(), Some("name"));
        assert_eq!(req.profile_uuid.as_deref(), Some("profileUUID"));
        assert_eq!(req.primary_port_uuid.as_deref(), Some("primaryPortUUID"));
        assert_eq!(req.primary_vlan_s_tag, Some(100));
        assert_eq!(req.primary_z_side_vlan_s_tag, Some(200));
        assert_eq!(req.primary_z_side_vlan_c_tag, None);
        assert_eq!(req.purchase_order_number, "orderNumber");
        assert_eq!(req.additional_info[0].value.as_deref(), Some("1543"));
        assert!(req.secondary_name.is_none());
    }

    #[test]
    fn redundant_request_takes_secondary_leg_fields_only() {
        let secondary = L2Connection {
            name: Some("secName".to_string()),
            port_uuid: Some("secondaryPortUUID".to_string()),
            vlan_s_tag: Some(690),
            profile_uuid: Some("ignored".to_string()),
            ..Default::default()
        };
        let req = create_l2_redundant_connection_request(&primary(), &secondary);
        assert_eq!(req.primary_name.as_deref(), Some("name"));
        assert_eq!(req.profile_uuid.as_deref(), Some("profileUUID"));
        assert_eq!(req.secondary_name.as_deref(), Some("secName"));
        assert_eq!(req.secondary_port_uuid.as_deref(), Some("secondaryPortUUID"));
        assert_eq!(req.secondary_vlan_s_tag, Some(690));
    }

    #[test]
    fn connection_response_maps_seller_service_to_profile() {
        let conn: L2Connection = wire::L2ConnectionResponse {
            uuid: Some("connId".to_string()),
            seller_service_uuid: Some("sp".to_string()),
            virtual_device_uuid: Some("dev".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(conn.uuid.as_deref(), Some("connId"));
        assert_eq!(conn.profile_uuid.as_deref(), Some("sp"));
        assert_eq!(conn.device_uuid.as_deref(), Some("dev"));
    }

    #[test]
    fn port_bandwidth_is_rendered_as_string() {
        let port: Port = wire::Port {
            name: Some("port-1".to_string()),
            total_bandwidth: Some(10_000_000_000),
            device_priority: Some("PRIMARY".to_string()),
            provision_status: Some("PROVISIONED".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(port.bandwidth.as_deref(), Some("10000000000"));
        assert_eq!(port.priority.as_deref(), Some("PRIMARY"));
        assert_eq!(port.status.as_deref(), Some("PROVISIONED"));
    }

    #[test]
    fn service_profile_maps_nested_collections() {
        let sp = L2ServiceProfile {
            name: Some("profile".to_string()),
            features: L2ServiceProfileFeatures {
                cloud_reach: Some(true),
                test_profile: None,
            },
            speed_bands: vec![L2ServiceProfileSpeedBand {
                speed: Some(100),
                speed_unit: Some("MB".to_string()),
            }],
            ports: vec![L2ServiceProfilePort {
                id: Some("port-id1".to_string()),
                metro_code: Some("FR".to_string()),
            }],
            ..Default::default()
        };
        let api: wire::L2ServiceProfile = (&sp).into();
        assert_eq!(api.features.as_ref().unwrap().cloud_reach, Some(true));
        let back: L2ServiceProfile = api.into();
        assert_eq!(back, sp);
    }
}
