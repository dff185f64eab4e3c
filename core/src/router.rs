//! Ordered route table with exact-match resolution.
//!
//! # Design
//! `Router` is a plain list of `(method, path, handler)` tuples checked in
//! registration order. It carries no mutable state after construction, so a
//! single value can be shared across threads and several independent tables
//! can coexist. A request that matches nothing gets a defined 404 from
//! `dispatch` instead of whatever the transport would do by default.

use crate::handlers::{handle_goodbye, handle_root};
use crate::http::{HttpMethod, Request, Response};

/// Function that turns a request into a response.
pub type Handler = fn(&Request) -> Response;

/// A single registered route.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    pub handler: Handler,
}

impl Route {
    fn matches(&self, request: &Request) -> bool {
        self.method == request.method && self.path == request.path
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Earlier registrations win on duplicates.
    pub fn route(mut self, method: HttpMethod, path: &str, handler: Handler) -> Self {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            handler,
        });
        self
    }

    pub fn resolve(&self, request: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(request))
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        match self.resolve(request) {
            Some(route) => (route.handler)(request),
            None => not_found(request),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Response for a request no route matched.
pub fn not_found(request: &Request) -> Response {
    Response::not_found(format!("Cannot {} {}", request.method, request.path))
}

/// The greeting service's route table.
pub fn app() -> Router {
    Router::new()
        .route(HttpMethod::Get, "/", handle_root)
        .route(HttpMethod::Get, "/adios", handle_goodbye)
}
