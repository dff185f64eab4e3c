use std::net::{Ipv4Addr, SocketAddr};

use saludo_server::DEFAULT_PORT;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(port = %raw, "invalid PORT, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };

    let routes = saludo_core::app();
    let handle =
        saludo_server::start_on(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)), routes).await?;
    tokio::signal::ctrl_c().await?;
    saludo_server::stop(handle).await
}
