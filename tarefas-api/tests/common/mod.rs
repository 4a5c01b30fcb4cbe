/// Common test utilities for integration tests
///
/// Provides shared infrastructure for the HTTP tests:
/// - In-memory SQLite database with the schema applied
/// - Router construction with auth enabled or disabled
/// - Register/login helpers that go through the real endpoints
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tarefas_api::app::{build_router, AppState};
use tarefas_api::config::{ApiConfig, AuthConfig, Config, DatabaseConfig};
use tarefas_shared::db::schema::ensure_schema;
use tower::ServiceExt as _;

/// Secret used by every test context
pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Test context containing the app and its backing store
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a context with the auth gate enabled
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_auth(true).await
    }

    /// Creates a context with the auth gate toggled explicitly
    pub async fn with_auth(auth_enabled: bool) -> anyhow::Result<Self> {
        // One connection only: each in-memory SQLite connection is its own db
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        ensure_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
                static_dir: "../static".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            auth: AuthConfig {
                enabled: auth_enabled,
                jwt_secret: TEST_JWT_SECRET.to_string(),
            },
        };

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext { db, app, config })
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a JSON request with optional bearer token
    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Sends a bodyless request with optional bearer token
    pub async fn send_empty(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user through the real endpoint
pub async fn register(ctx: &TestContext, username: &str, password: &str) -> StatusCode {
    let response = ctx
        .send_json(
            "POST",
            "/register",
            None,
            serde_json::json!({"username": username, "password": password}),
        )
        .await;
    response.status()
}

/// Registers and logs a user in, returning the bearer token
pub async fn register_and_login(ctx: &TestContext, username: &str, password: &str) -> String {
    let status = register(ctx, username, password).await;
    assert_eq!(status, StatusCode::CREATED);

    let response = ctx
        .send_json(
            "POST",
            "/login",
            None,
            serde_json::json!({"username": username, "password": password}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login should return access_token")
        .to_string()
}
