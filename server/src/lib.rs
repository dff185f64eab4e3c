//! HTTP transport for the greeting service.
//!
//! axum owns the socket, parsing and connection lifecycle. Every request goes
//! to one fallback that hands it to the core `Router`, so unmatched routes
//! get the core's 404 rather than axum's default.

use std::{
    io,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    Router,
};
use saludo_core::{HttpMethod, Request};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tracing::{debug, info, warn};

pub const DEFAULT_PORT: u16 = 3000;

type Routes = Arc<saludo_core::Router>;

pub fn app() -> Router {
    app_with(saludo_core::app())
}

/// Serve any core route table.
pub fn app_with(routes: saludo_core::Router) -> Router {
    Router::new().fallback(dispatch).with_state(Arc::new(routes))
}

pub async fn run(listener: TcpListener, routes: saludo_core::Router) -> Result<(), io::Error> {
    axum::serve(listener, app_with(routes)).await
}

async fn dispatch(State(routes): State<Routes>, method: Method, uri: Uri) -> (StatusCode, String) {
    let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&uri) {
        Ok(Query(pairs)) => pairs,
        Err(err) => {
            warn!(%uri, error = %err, "ignoring undecodable query string");
            Vec::new()
        }
    };
    let request = Request::new(HttpMethod::parse(method.as_str()), uri.path()).with_query_pairs(pairs);

    let response = routes.dispatch(&request);
    debug!(
        method = %request.method,
        path = %request.path,
        status = response.status_code,
        "dispatched"
    );

    let status = match StatusCode::from_u16(response.status_code) {
        Ok(status) => status,
        Err(_) => {
            warn!(
                path = %request.path,
                status = response.status_code,
                "handler returned an invalid status, sending 500"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, response.body)
}

/// A running server. Pass it to [`stop`] to release the socket.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

/// Start serving the greeting routes on `0.0.0.0:3000`.
pub async fn start() -> io::Result<ServerHandle> {
    start_on(
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        saludo_core::app(),
    )
    .await
}

/// Start serving `routes` on `addr`. Port 0 picks a free port; see
/// [`ServerHandle::local_addr`].
pub async fn start_on(addr: SocketAddr, routes: saludo_core::Router) -> io::Result<ServerHandle> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let (shutdown, signal) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, app_with(routes))
            .with_graceful_shutdown(async move {
                // A dropped sender also means shut down.
                let _ = signal.await;
            })
            .await
    });

    info!(%local_addr, "listening");
    Ok(ServerHandle {
        local_addr,
        shutdown,
        task,
    })
}

/// Shut the server down. Returns once the listener is closed and in-flight
/// connections have finished.
pub async fn stop(handle: ServerHandle) -> io::Result<()> {
    let ServerHandle {
        local_addr,
        shutdown,
        task,
    } = handle;
    // Err only if the server task already exited; the join below reports why.
    let _ = shutdown.send(());
    let result = task.await.map_err(io::Error::other)?;
    info!(%local_addr, "stopped");
    result
}
