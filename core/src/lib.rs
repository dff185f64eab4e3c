//! Route table and handlers for the greeting service.
//!
//! # Overview
//! Maps a `Request` (method, path, query) to a `Response` (status, body)
//! without touching the network. Transports (the axum server in
//! `saludo-server`, a serverless runtime via `event`) build the request and
//! send the response.
//!
//! # Design
//! - `Router` is an explicit, ordered list of exact-match routes; `app()`
//!   builds the service's table. There is no global instance.
//! - Unmatched requests get a defined 404 from `Router::dispatch`.
//! - Handlers are plain `fn` pointers with no shared state.

pub mod error;
pub mod event;
pub mod handlers;
pub mod http;
pub mod router;

pub use error::EventError;
pub use event::{handle_event, handle_event_json, ApiGatewayEvent};
pub use handlers::{handle_goodbye, handle_root};
pub use http::{HttpMethod, Request, Response};
pub use router::{app, Handler, Route, Router};
