/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware. Authentication is a policy, not a
/// codebase: the same task routes are built either guarded by the bearer
/// token gate or open, depending on configuration.
///
/// # Example
///
/// ```no_run
/// use tarefas_api::{app::AppState, config::Config};
/// use tarefas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// }).await?;
/// let state = AppState::new(pool, config);
/// let app = tarefas_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::config::Config;
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tarefas_shared::auth::{jwt, middleware::AuthContext};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.auth.jwt_secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                 # Static index page (public)
/// ├── /static/*              # Static assets (public)
/// ├── GET  /health           # Health check (public)
/// ├── POST /register         # Create account (public)
/// ├── POST /login            # Authenticate, returns bearer token (public)
/// └── /tarefas               # Task CRUD (gated when auth is enabled)
///     ├── GET    /           # List all tasks
///     ├── POST   /           # Create task
///     ├── GET    /:id        # Fetch task
///     ├── PUT    /:id        # Partial update
///     └── DELETE /:id        # Delete task
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Bearer-token gate on the task routes, only when
///    `config.auth.enabled`
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let static_dir = &state.config.api.static_dir;
    let index_file = format!("{}/index.html", static_dir);

    // Public routes: static page, health, registration, login
    let public_routes = Router::new()
        .route_service("/", ServeFile::new(index_file))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(routes::health::health_check))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Task routes, gated by the bearer-token check when auth is enabled
    let mut tarefa_routes = Router::new()
        .route("/tarefas", get(routes::tarefas::list_tarefas))
        .route("/tarefas", post(routes::tarefas::create_tarefa))
        .route("/tarefas/:id", get(routes::tarefas::get_tarefa))
        .route("/tarefas/:id", put(routes::tarefas::update_tarefa))
        .route("/tarefas/:id", delete(routes::tarefas::delete_tarefa));

    if state.config.auth.enabled {
        tarefa_routes = tarefa_routes.layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));
    }

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    };

    Router::new()
        .merge(public_routes)
        .merge(tarefa_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Bearer-token authentication middleware
///
/// Extracts and validates the JWT from the Authorization header, then
/// injects an [`AuthContext`] into request extensions. A missing header,
/// non-Bearer scheme, bad signature, malformed payload, or expired token all
/// fail the request with 401 before any handler or store access runs.
async fn jwt_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            crate::error::ApiError::Unauthorized("cabeçalho de autorização ausente".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        crate::error::ApiError::Unauthorized("esperado token Bearer".to_string())
    })?;

    let claims = jwt::validate_token(token, state.jwt_secret())?;

    req.extensions_mut()
        .insert(AuthContext::from_claims(&claims));

    Ok(next.run(req).await)
}
