//! Adapter from an API-gateway style serverless event to the route table.
//!
//! # Design
//! The event carries the path, the method and two optional query maps. For a
//! key present in both, the multi-value entry wins; other keys are taken from
//! whichever map has them. Multi-value entries may be a bare string or a
//! list of strings. Any other field in the envelope (request
//! context, headers, body) is ignored because no route reads it.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::EventError;
use crate::http::{HttpMethod, Request, Response};
use crate::router::Router;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayEvent {
    pub path: String,
    pub http_method: String,
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub multi_value_query_string_parameters: Option<BTreeMap<String, QueryValue>>,
}

/// A multi-value query entry: gateways send lists, hand-written events often
/// send a single string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl ApiGatewayEvent {
    pub fn into_request(self) -> Request {
        let request = Request::new(HttpMethod::parse(&self.http_method), &self.path);
        let multi = self.multi_value_query_string_parameters.unwrap_or_default();
        let single = self.query_string_parameters.unwrap_or_default();

        // Keys missing from the multi-value map fall back to the single-value one.
        let fallback: Vec<(String, String)> = single
            .into_iter()
            .filter(|(key, _)| !multi.contains_key(key))
            .collect();
        let pairs = multi.into_iter().flat_map(|(key, value)| {
            let values = match value {
                QueryValue::One(v) => vec![v],
                QueryValue::Many(vs) => vs,
            };
            values.into_iter().map(move |v| (key.clone(), v))
        });
        request.with_query_pairs(pairs.chain(fallback))
    }
}

pub fn handle_event(router: &Router, event: ApiGatewayEvent) -> Response {
    router.dispatch(&event.into_request())
}

/// Decode a JSON event, dispatch it and encode the `{statusCode, body}`
/// envelope.
pub fn handle_event_json(router: &Router, event: &str) -> Result<String, EventError> {
    let event: ApiGatewayEvent =
        serde_json::from_str(event).map_err(|e| EventError::InvalidEvent(e.to_string()))?;
    let response = handle_event(router, event);
    serde_json::to_string(&response).map_err(|e| EventError::SerializationError(e.to_string()))
}
