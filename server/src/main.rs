mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;

    let catalog = forms::Catalog::standard();
    catalog.verify()?;
    tracing::info!(modules = catalog.modules().len(), forms = catalog.forms().count(), "catalog loaded");

    let state = state::AppState::new(catalog);
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable; serving API only");
            routes::api_routes(state).layer(tower_http::trace::TraceLayer::new_for_http())
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "apex-erp listening");
    axum::serve(listener, app).await?;
    Ok(())
}
