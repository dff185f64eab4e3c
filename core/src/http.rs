//! HTTP request and response types for the route table.
//!
//! # Design
//! These types describe a request and its response as plain data. The
//! transport (the axum server, a serverless runtime) builds a `Request`,
//! hands it to `Router::dispatch`, and owns the returned `Response`. Nothing
//! in here touches the network, which keeps dispatch deterministic and easy
//! to test.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    /// Any other token, kept verbatim.
    Other(String),
}

impl HttpMethod {
    /// Parse a wire method token. Matching is case-sensitive, as in HTTP.
    pub fn parse(token: &str) -> Self {
        match token {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            other => HttpMethod::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(token) => token.as_str(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An incoming request described as plain data.
///
/// Query keys are unique. A key that arrives more than once keeps all of its
/// values joined with `,` in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Request {
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: BTreeMap::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Add one query value, appending to an existing key.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        push_query_value(&mut self.query, key, value);
        self
    }

    /// Add decoded `(key, value)` pairs in arrival order.
    pub fn with_query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            push_query_value(&mut self.query, key.as_ref(), value.as_ref());
        }
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

fn push_query_value(query: &mut BTreeMap<String, String>, key: &str, value: &str) {
    match query.get_mut(key) {
        Some(existing) => {
            existing.push(',');
            existing.push_str(value);
        }
        None => {
            query.insert(key.to_string(), value.to_string());
        }
    }
}

/// A response described as plain data.
///
/// Serializes to the `{"statusCode": .., "body": ..}` envelope expected by
/// serverless runtimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    pub fn not_found(body: impl Into<String>) -> Self {
        Self {
            status_code: 404,
            body: body.into(),
        }
    }
}
