//! Conversion of provider error bodies into `RestError`.
//!
//! The API answers failures either with a single error object or with an
//! array of them. Parsing is attempted in that order and falls back to the
//! raw body text; a body that fits neither shape is data, not a failure.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ErrorDetail, RestError};

/// Message used when the body carried more than one error entry.
pub const MULTIPLE_ERRORS_MESSAGE: &str = "Multiple errors occurred";

/// Single error entry as sent by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub more_info: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub property: Option<String>,
}

/// Build the normalized error for a response with `status` and `body`.
///
/// `http_status` is always taken from `status`, whatever the body says.
pub fn normalize_error_body(status: u16, body: &str) -> RestError {
    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => parse_single(fields).map(single_to_rest),
        Ok(Value::Array(items)) => parse_multiple(items).map(multiple_to_rest),
        _ => None,
    };
    let mut err = parsed.unwrap_or_else(|| RestError {
        http_status: None,
        message: body.to_string(),
        errors: Vec::new(),
    });
    err.http_status = Some(status);
    err
}

fn parse_single(fields: Map<String, Value>) -> Option<ErrorResponse> {
    ErrorResponse::deserialize(Value::Object(fields)).ok()
}

// An empty array parses but carries nothing; it is left to the raw fallback.
fn parse_multiple(items: Vec<Value>) -> Option<Vec<ErrorResponse>> {
    if items.is_empty() {
        return None;
    }
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(fields) => parse_single(fields),
            _ => None,
        })
        .collect()
}

fn single_to_rest(resp: ErrorResponse) -> RestError {
    RestError {
        http_status: None,
        message: resp.error_message.clone(),
        errors: vec![ErrorDetail::new(resp.error_code, resp.error_message)],
    }
}

fn multiple_to_rest(resps: Vec<ErrorResponse>) -> RestError {
    RestError {
        http_status: None,
        message: MULTIPLE_ERRORS_MESSAGE.to_string(),
        errors: resps
            .into_iter()
            .map(|r| ErrorDetail::new(r.error_code, r.error_message))
            .collect(),
    }
}
