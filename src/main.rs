use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use corpus_search::api;
use corpus_search::config::Config;
use corpus_search::search::paginate::SEARCH_PATH;
use corpus_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Corpus: {}", config.corpus_path.display());

    // The index is complete before the listener opens; a bad corpus aborts here.
    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route(SEARCH_PATH, get(api::search::search))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
