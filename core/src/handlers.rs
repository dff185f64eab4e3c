//! Route handlers for the greeting service.

use crate::http::{Request, Response};

/// Text substituted for an absent `nombre` parameter.
pub const MISSING_VALUE: &str = "undefined";

pub const GREETING_PREFIX: &str = "Hola mundo!! El parámetro 'nombre' es: ";

pub const GOODBYE: &str = "Adiós mundo!!";

/// `GET /`: greet, echoing the `nombre` query parameter verbatim.
pub fn handle_root(request: &Request) -> Response {
    let nombre = request.query_param("nombre").unwrap_or(MISSING_VALUE);
    Response::ok(format!("{GREETING_PREFIX}{nombre}"))
}

/// `GET /adios`
pub fn handle_goodbye(_request: &Request) -> Response {
    Response::ok(GOODBYE)
}
