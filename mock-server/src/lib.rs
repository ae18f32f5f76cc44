//! In-memory stand-in for the ECX Fabric layer-2 API.
//!
//! Serves the same paths and JSON shapes as the provider under `/ecx/v3`,
//! including both error body shapes, so the client can be exercised over
//! real HTTP without credentials.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "sellerServiceUUID", skip_serializing_if = "Option::is_none")]
    pub seller_service_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<String>,
    pub status: String,
    pub provider_status: String,
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(default)]
    pub purchase_order_number: String,
    #[serde(rename = "portUUID", skip_serializing_if = "Option::is_none")]
    pub port_uuid: Option<String>,
    #[serde(rename = "vlanSTag", skip_serializing_if = "Option::is_none")]
    pub vlan_s_tag: Option<u32>,
    #[serde(rename = "vlanCTag", skip_serializing_if = "Option::is_none")]
    pub vlan_c_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_metro_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_key: Option<String>,
    #[serde(rename = "redundantUUID", skip_serializing_if = "Option::is_none")]
    pub redundant_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redundancy_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnection {
    pub primary_name: Option<String>,
    #[serde(rename = "profileUUID")]
    pub profile_uuid: Option<String>,
    pub speed: Option<u32>,
    pub speed_unit: Option<String>,
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(default)]
    pub purchase_order_number: String,
    #[serde(rename = "primaryPortUUID")]
    pub primary_port_uuid: Option<String>,
    #[serde(rename = "primaryVlanSTag")]
    pub primary_vlan_s_tag: Option<u32>,
    #[serde(rename = "primaryVlanCTag")]
    pub primary_vlan_c_tag: Option<u32>,
    pub secondary_name: Option<String>,
    #[serde(rename = "secondaryPortUUID")]
    pub secondary_port_uuid: Option<String>,
    #[serde(rename = "secondaryVlanSTag")]
    pub secondary_vlan_s_tag: Option<u32>,
    #[serde(rename = "secondaryVlanCTag")]
    pub secondary_vlan_c_tag: Option<u32>,
    pub seller_metro_code: Option<String>,
    pub seller_region: Option<String>,
    pub authorization_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnection {
    pub name: Option<String>,
    pub speed: Option<u32>,
    pub speed_unit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page_size: Option<usize>,
    pub page_number: Option<usize>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActionParams {
    pub action: Option<String>,
}

/// One entry of an error body, in the provider's field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorEntry {
    pub error_code: String,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

/// Error responses in the two shapes the provider uses.
#[derive(Debug)]
pub enum Failure {
    /// A single error object.
    Single(StatusCode, ApiErrorEntry),
    /// A JSON array of error objects.
    Multiple(StatusCode, Vec<ApiErrorEntry>),
}

impl Failure {
    fn not_found(kind: &str, id: &str) -> Self {
        Failure::Single(
            StatusCode::NOT_FOUND,
            ApiErrorEntry {
                error_code: "IC-LAYER2-4004".to_string(),
                error_message: format!("{kind} {id} not found"),
                property: None,
            },
        )
    }

    fn invalid(errors: Vec<ApiErrorEntry>) -> Self {
        Failure::Multiple(StatusCode::BAD_REQUEST, errors)
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        match self {
            Failure::Single(status, entry) => (status, Json(entry)).into_response(),
            Failure::Multiple(status, entries) => (status, Json(entries)).into_response(),
        }
    }
}

fn missing(property: &str) -> ApiErrorEntry {
    ApiErrorEntry {
        error_code: "IC-LAYER2-4001".to_string(),
        error_message: format!("{property} is required"),
        property: Some(property.to_string()),
    }
}

fn invalid_speed_unit(unit: &str) -> ApiErrorEntry {
    ApiErrorEntry {
        error_code: "IC-LAYER2-4021".to_string(),
        error_message: format!("speedUnit {unit} is not supported"),
        property: Some("speedUnit".to_string()),
    }
}

#[derive(Debug, Default)]
pub struct Store {
    pub connections: Vec<Connection>,
    pub profiles: Vec<Value>,
    pub ports: Vec<Value>,
}

pub type Db = Arc<RwLock<Store>>;

fn seeded_ports() -> Vec<Value> {
    vec![
        json!({
            "uuid": "9127aa2e-5ac9-4c4a-9d5e-5e1d4b3ed2a1",
            "name": "port-am1-primary",
            "region": "EMEA",
            "ibx": "AM1",
            "metroCode": "AM",
            "devicePriority": "PRIMARY",
            "encapsulation": "Dot1q",
            "buyout": false,
            "totalBandwidth": 10_000_000_000_i64,
            "provisionStatus": "PROVISIONED"
        }),
        json!({
            "uuid": "5cb2b7a0-0e0c-4b6e-bd5a-3a9b7c6f1e22",
            "name": "port-am1-secondary",
            "region": "EMEA",
            "ibx": "AM1",
            "metroCode": "AM",
            "devicePriority": "SECONDARY",
            "encapsulation": "Dot1q",
            "buyout": false,
            "totalBandwidth": 10_000_000_000_i64,
            "provisionStatus": "PROVISIONED"
        }),
    ]
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store {
        ports: seeded_ports(),
        ..Store::default()
    }));
    Router::new()
        .route("/ecx/v3/l2/connections", post(create_connection))
        .route(
            "/ecx/v3/l2/connections/{id}",
            get(get_connection).patch(patch_connection).delete(delete_connection),
        )
        .route("/ecx/v3/l2/buyer/connections", get(list_buyer_connections))
        .route(
            "/ecx/v3/l2/serviceprofiles",
            post(create_profile).put(update_profile),
        )
        .route("/ecx/v3/l2/serviceprofiles/services", get(list_profiles))
        .route(
            "/ecx/v3/l2/serviceprofiles/{id}",
            get(get_profile).delete(delete_profile),
        )
        .route("/ecx/v3/port/userport", get(list_ports))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Slice `items` into the provider's page envelope.
fn page<T: Serialize>(items: &[T], params: &ListParams) -> Value {
    let size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let number = params.page_number.unwrap_or(0);
    let start = number.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    json!({
        "content": &items[start..end],
        "pageSize": size,
        "isLastPage": end >= items.len(),
        "totalCount": items.len(),
    })
}

fn validate_speed_unit(unit: Option<&str>, errors: &mut Vec<ApiErrorEntry>) {
    if let Some(unit) = unit {
        if unit != "MB" && unit != "GB" {
            errors.push(invalid_speed_unit(unit));
        }
    }
}

async fn create_connection(
    State(db): State<Db>,
    Json(input): Json<CreateConnection>,
) -> Result<Json<Value>, Failure> {
    let mut errors = Vec::new();
    if input.primary_name.as_deref().unwrap_or("").is_empty() {
        errors.push(missing("primaryName"));
    }
    if input.profile_uuid.as_deref().unwrap_or("").is_empty() {
        errors.push(missing("profileUUID"));
    }
    validate_speed_unit(input.speed_unit.as_deref(), &mut errors);
    if !errors.is_empty() {
        return Err(Failure::invalid(errors));
    }

    let primary = Connection {
        uuid: Uuid::new_v4().to_string(),
        name: input.primary_name.clone().unwrap_or_default(),
        seller_service_uuid: input.profile_uuid.clone(),
        speed: input.speed,
        speed_unit: input.speed_unit.clone(),
        status: "PENDING_APPROVAL".to_string(),
        provider_status: "NOT_AVAILABLE".to_string(),
        notifications: input.notifications.clone(),
        purchase_order_number: input.purchase_order_number.clone(),
        port_uuid: input.primary_port_uuid.clone(),
        vlan_s_tag: input.primary_vlan_s_tag,
        vlan_c_tag: input.primary_vlan_c_tag,
        seller_metro_code: input.seller_metro_code.clone(),
        seller_region: input.seller_region.clone(),
        authorization_key: input.authorization_key.clone(),
        ..Connection::default()
    };

    let mut store = db.write().await;
    let mut body = json!({
        "message": "Connection Saved Successfully",
        "primaryConnectionId": primary.uuid,
        "status": "SUCCESS",
    });

    match input.secondary_name.filter(|n| !n.is_empty()) {
        Some(secondary_name) => {
            let secondary_uuid = Uuid::new_v4().to_string();
            let secondary = Connection {
                uuid: secondary_uuid.clone(),
                name: secondary_name,
                port_uuid: input.secondary_port_uuid,
                vlan_s_tag: input.secondary_vlan_s_tag,
                vlan_c_tag: input.secondary_vlan_c_tag,
                redundant_uuid: Some(primary.uuid.clone()),
                redundancy_type: Some("SECONDARY".to_string()),
                ..primary.clone()
            };
            let primary = Connection {
                redundant_uuid: Some(secondary_uuid.clone()),
                redundancy_type: Some("PRIMARY".to_string()),
                ..primary
            };
            body["secondaryConnectionId"] = json!(secondary_uuid);
            debug!(primary = %primary.uuid, secondary = %secondary.uuid, "created redundant pair");
            store.connections.push(primary);
            store.connections.push(secondary);
        }
        None => {
            debug!(uuid = %primary.uuid, "created connection");
            store.connections.push(primary);
        }
    }
    Ok(Json(body))
}

async fn get_connection(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Connection>, Failure> {
    let store = db.read().await;
    store
        .connections
        .iter()
        .find(|c| c.uuid == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found("connection", &id))
}

async fn patch_connection(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<ActionParams>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    let conn = store
        .connections
        .iter_mut()
        .find(|c| c.uuid == id)
        .ok_or_else(|| Failure::not_found("connection", &id))?;

    match params.action.as_deref() {
        Some("Approve") => {
            let mut errors = Vec::new();
            for key in ["accessKey", "secretKey"] {
                if body.get(key).and_then(Value::as_str).unwrap_or("").is_empty() {
                    errors.push(missing(key));
                }
            }
            if !errors.is_empty() {
                return Err(Failure::invalid(errors));
            }
            conn.status = "PROVISIONED".to_string();
            conn.provider_status = "PROVISIONED".to_string();
            Ok(Json(json!({
                "message": "Connection approved",
                "primaryConnectionId": conn.uuid,
            })))
        }
        Some("update") => {
            let update: UpdateConnection = serde_json::from_value(body).map_err(|e| {
                Failure::invalid(vec![ApiErrorEntry {
                    error_code: "IC-LAYER2-4000".to_string(),
                    error_message: e.to_string(),
                    property: None,
                }])
            })?;
            let mut errors = Vec::new();
            validate_speed_unit(update.speed_unit.as_deref(), &mut errors);
            if !errors.is_empty() {
                return Err(Failure::invalid(errors));
            }
            if let Some(name) = update.name {
                conn.name = name;
            }
            if let Some(speed) = update.speed {
                conn.speed = Some(speed);
            }
            if let Some(unit) = update.speed_unit {
                conn.speed_unit = Some(unit);
            }
            Ok(Json(json!({
                "message": "Connection updated",
                "primaryConnectionId": conn.uuid,
            })))
        }
        other => Err(Failure::Single(
            StatusCode::BAD_REQUEST,
            ApiErrorEntry {
                error_code: "IC-LAYER2-4000".to_string(),
                error_message: format!("unsupported action {}", other.unwrap_or("<none>")),
                property: Some("action".to_string()),
            },
        )),
    }
}

async fn delete_connection(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Failure> {
    let mut store = db.write().await;
    let before = store.connections.len();
    store.connections.retain(|c| c.uuid != id);
    if store.connections.len() == before {
        return Err(Failure::not_found("connection", &id));
    }
    Ok(Json(json!({
        "message": "Connection deleted",
        "primaryConnectionId": id,
    })))
}

async fn list_buyer_connections(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let store = db.read().await;
    let statuses: Vec<&str> = params
        .status
        .as_deref()
        .map(|s| s.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let matching: Vec<&Connection> = store
        .connections
        .iter()
        .filter(|c| statuses.is_empty() || statuses.contains(&c.status.as_str()))
        .collect();
    Json(page(&matching, &params))
}

fn profile_uuid(profile: &Value) -> Option<&str> {
    profile.get("uuid").and_then(Value::as_str)
}

fn validate_profile(profile: &Value) -> Result<(), Failure> {
    let mut errors = Vec::new();
    if profile.get("name").and_then(Value::as_str).unwrap_or("").is_empty() {
        errors.push(missing("name"));
    }
    if profile
        .get("speedBands")
        .and_then(Value::as_array)
        .map_or(true, Vec::is_empty)
    {
        errors.push(missing("speedBands"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Failure::invalid(errors))
    }
}

async fn create_profile(
    State(db): State<Db>,
    Json(mut profile): Json<Value>,
) -> Result<Json<Value>, Failure> {
    validate_profile(&profile)?;
    let uuid = Uuid::new_v4().to_string();
    profile["uuid"] = json!(uuid);
    profile["state"] = json!("APPROVED");
    db.write().await.profiles.push(profile);
    debug!(%uuid, "created service profile");
    Ok(Json(json!({ "uuid": uuid })))
}

async fn update_profile(
    State(db): State<Db>,
    Json(mut profile): Json<Value>,
) -> Result<Json<Value>, Failure> {
    validate_profile(&profile)?;
    let uuid = profile_uuid(&profile)
        .map(str::to_string)
        .ok_or_else(|| Failure::invalid(vec![missing("uuid")]))?;
    let mut store = db.write().await;
    let slot = store
        .profiles
        .iter_mut()
        .find(|p| profile_uuid(p) == Some(uuid.as_str()))
        .ok_or_else(|| Failure::not_found("service profile", &uuid))?;
    profile["state"] = slot.get("state").cloned().unwrap_or(json!("APPROVED"));
    *slot = profile;
    Ok(Json(json!({ "uuid": uuid })))
}

async fn list_profiles(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Value> {
    let store = db.read().await;
    Json(page(&store.profiles, &params))
}

async fn get_profile(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Failure> {
    let store = db.read().await;
    store
        .profiles
        .iter()
        .find(|p| profile_uuid(p) == Some(id.as_str()))
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found("service profile", &id))
}

async fn delete_profile(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    let before = store.profiles.len();
    store.profiles.retain(|p| profile_uuid(p) != Some(id.as_str()));
    if store.profiles.len() == before {
        return Err(Failure::not_found("service profile", &id));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_ports(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.read().await.ports.clone())
}
