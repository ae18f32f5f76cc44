//! Check error normalization and list pagination against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Pagination cases replay canned page responses through a `Transport`
//! implementation, so the full request/decode path is covered without a
//! server.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ecx_core::{
    normalize_error_body, ApiError, ConnectionStatus, EcxClient, HttpMethod, HttpRequest,
    HttpResponse, Transport, TransportError,
};

const BASE_URL: &str = "http://localhost:3000";

/// Replays queued responses and records the requests it sees.
struct Replay {
    responses: Mutex<VecDeque<HttpResponse>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Replay {
    fn new(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl Transport for Replay {
    fn send(&self, request: &HttpRequest, _timeout: Option<Duration>) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::new("no response queued"))
    }
}

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Error normalization
// ---------------------------------------------------------------------------

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let expected = &case["expected"];

        let rest = normalize_error_body(status, case["body"].as_str().unwrap());

        assert_eq!(
            rest.http_status,
            Some(expected["http_status"].as_u64().unwrap() as u16),
            "{name}: status"
        );
        assert_eq!(rest.message, expected["message"].as_str().unwrap(), "{name}: message");
        let errors: Vec<(String, String)> = rest
            .errors
            .iter()
            .map(|e| (e.code.clone(), e.message.clone()))
            .collect();
        assert_eq!(errors, pairs(&expected["errors"]), "{name}: errors");
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn pagination_test_vectors() {
    let raw = include_str!("../../test-vectors/pagination.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let responses = case["responses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| HttpResponse {
                status: r["status"].as_u64().unwrap() as u16,
                headers: Vec::new(),
                body: r["body"].as_str().unwrap().to_string(),
            })
            .collect();
        let transport = Replay::new(responses);
        let mut client = EcxClient::new(BASE_URL, transport.clone());
        if let Some(size) = case["page_size"].as_u64() {
            client.set_page_size(size as u32);
        }
        let statuses: Vec<ConnectionStatus> = case["statuses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| ConnectionStatus::from_str(s.as_str().unwrap()).unwrap())
            .collect();

        let result = client.get_l2_outgoing_connections(&statuses);

        let seen = transport.seen.lock().unwrap().clone();
        let expected_queries = case["expected_queries"].as_array().unwrap();
        assert_eq!(seen.len(), expected_queries.len(), "{name}: request count");
        for (req, expected) in seen.iter().zip(expected_queries) {
            assert_eq!(req.method, HttpMethod::Get, "{name}: method");
            assert_eq!(req.path, format!("{BASE_URL}/ecx/v3/l2/buyer/connections"), "{name}: path");
            assert_eq!(req.query, pairs(expected), "{name}: query");
            assert!(req.body.is_none(), "{name}: body should be None");
        }

        match case.get("expected_error") {
            Some(serde_json::Value::String(kind)) => {
                let err = result.unwrap_err();
                match kind.as_str() {
                    "DeserializationError" => assert!(
                        matches!(err, ApiError::DeserializationError(_)),
                        "{name}: expected DeserializationError, got {err:?}"
                    ),
                    other => panic!("{name}: unknown expected_error: {other}"),
                }
            }
            Some(expected) => {
                let err = result.unwrap_err();
                let rest = err.rest_error().unwrap_or_else(|| panic!("{name}: {err:?}"));
                assert_eq!(
                    rest.http_status,
                    Some(expected["http_status"].as_u64().unwrap() as u16),
                    "{name}: status"
                );
                assert_eq!(rest.message, expected["message"].as_str().unwrap(), "{name}: message");
            }
            None => {
                let uuids: Vec<String> = result
                    .unwrap()
                    .into_iter()
                    .map(|c| c.uuid.unwrap())
                    .collect();
                let expected: Vec<String> = case["expected_uuids"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|u| u.as_str().unwrap().to_string())
                    .collect();
                assert_eq!(uuids, expected, "{name}: collected uuids");
            }
        }
    }
}
