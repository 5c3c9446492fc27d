use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use movies_core::{Config, seed, services::MovieService};

pub mod error;
pub mod extract;
pub mod routes;

pub use error::{ApiError, ApiResult};

use routes::{movies, root};

pub struct AppState {
    pub movie_service: MovieService,
}

impl AppState {
    pub fn new(movie_service: MovieService) -> Self {
        Self { movie_service }
    }
}

/// Creates the application state with the collection seeded
pub fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let movies = seed::load(config.seed_file.as_deref())?;
    match &config.seed_file {
        Some(path) => tracing::info!("Seeded {} movies from {}", movies.len(), path.display()),
        None => tracing::info!("Seeded {} built-in movies", movies.len()),
    }

    Ok(Arc::new(AppState::new(MovieService::new(movies))))
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(root::banner))
        .route("/health", get(root::health_check))
        // Movies
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::get).delete(movies::delete))
        .route("/movies/{id}/", get(movies::get).delete(movies::delete))
        // Anything else, including a known path with the wrong method
        .fallback(root::route_not_found)
        .method_not_allowed_fallback(root::route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the server and blocks until shutdown
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting movies server...");

    let state = create_app_state(&config)?;
    let app = create_router(state, config.body_limit);

    let addr = config.server_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum_test::TestServer;
    use movies_core::{services::MovieService, test_helpers::fixtures};

    use crate::{AppState, create_router};

    pub const TEST_BODY_LIMIT: usize = 16 * 1024;

    /// A server over a fresh store seeded with the fixture movies (ids 1, 8, 16)
    pub fn test_server() -> TestServer {
        test_server_with(MovieService::new(fixtures::seed()), TEST_BODY_LIMIT)
    }

    pub fn test_server_with(service: MovieService, body_limit: usize) -> TestServer {
        let state = Arc::new(AppState::new(service));
        TestServer::new(create_router(state, body_limit)).unwrap()
    }
}
