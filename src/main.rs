mod config;
mod routes;

use careersu_client::routing::policy::route_policy;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    // A malformed route table must never serve a request.
    route_policy().validate().expect("invalid route policy");
    tracing::info!(routes = route_policy().entries().len(), "route policy validated");

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.socket_addr(), compression = config.compression, "careersu listening");
    axum::serve(listener, app).await.expect("server failed");
}
