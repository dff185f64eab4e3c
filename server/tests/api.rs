use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use saludo_core::{HttpMethod, Response};
use saludo_server::{app, app_with};
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(method: &str, uri: &str) -> (StatusCode, String) {
    let resp = app().oneshot(request(method, uri)).await.unwrap();
    let status = resp.status();
    (status, body_text(resp).await)
}

// --- root ---

#[tokio::test]
async fn root_with_nombre() {
    let (status, body) = send("GET", "/?nombre=Pedro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hola mundo!! El parámetro 'nombre' es: Pedro");
}

#[tokio::test]
async fn root_without_nombre_says_undefined() {
    let (status, body) = send("GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hola mundo!! El parámetro 'nombre' es: undefined");
}

#[tokio::test]
async fn root_decodes_percent_encoding() {
    let (_, body) = send("GET", "/?nombre=Jos%C3%A9%20Mar%C3%ADa").await;
    assert_eq!(body, "Hola mundo!! El parámetro 'nombre' es: José María");
}

#[tokio::test]
async fn root_joins_repeated_nombre() {
    let (_, body) = send("GET", "/?nombre=Ana&otro=1&nombre=Luis").await;
    assert_eq!(body, "Hola mundo!! El parámetro 'nombre' es: Ana,Luis");
}

#[tokio::test]
async fn root_with_empty_nombre() {
    let (_, body) = send("GET", "/?nombre=").await;
    assert_eq!(body, "Hola mundo!! El parámetro 'nombre' es: ");
}

#[tokio::test]
async fn root_responds_with_plain_text() {
    let resp = app().oneshot(request("GET", "/")).await.unwrap();
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/plain; charset=utf-8");
}

// --- adios ---

#[tokio::test]
async fn goodbye() {
    let (status, body) = send("GET", "/adios").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Adiós mundo!!");
}

#[tokio::test]
async fn goodbye_ignores_query() {
    let (status, body) = send("GET", "/adios?nombre=Pedro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Adiós mundo!!");
}

// --- not found ---

#[tokio::test]
async fn unknown_path_returns_404() {
    let (status, body) = send("GET", "/unknown-path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Cannot GET /unknown-path");
}

#[tokio::test]
async fn wrong_method_returns_404() {
    let (status, body) = send("POST", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Cannot POST /");

    let (status, _) = send("DELETE", "/adios").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trailing_slash_is_a_different_path() {
    let (status, _) = send("GET", "/adios/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- custom tables ---

fn accepted(_request: &saludo_core::Request) -> Response {
    Response {
        status_code: 202,
        body: "aceptado".to_string(),
    }
}

#[tokio::test]
async fn custom_route_table_is_served() {
    let routes = saludo_core::Router::new().route(HttpMethod::Put, "/cola", accepted);
    let resp = app_with(routes.clone()).oneshot(request("PUT", "/cola")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    assert_eq!(body_text(resp).await, "aceptado");

    let resp = app_with(routes).oneshot(request("GET", "/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let first = send("GET", "/?nombre=Pedro").await;
    let second = send("GET", "/?nombre=Pedro").await;
    assert_eq!(first, second);
}

fn out_of_range(_request: &saludo_core::Request) -> Response {
    Response {
        status_code: 1000,
        body: "fuera de rango".to_string(),
    }
}

#[tokio::test]
async fn invalid_handler_status_becomes_500() {
    let routes = saludo_core::Router::new().route(HttpMethod::Get, "/roto", out_of_range);
    let resp = app_with(routes).oneshot(request("GET", "/roto")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(resp).await, "fuera de rango");
}
