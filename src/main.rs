mod api;
mod config;
mod guard;
mod models;
mod routes;
mod session;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let api = api::ApiClient::new(&config.api_base_url).expect("api client init failed");
    let state = state::AppState::new(api, config.cookie_secure);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api = %config.api_base_url, "streamletz-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
