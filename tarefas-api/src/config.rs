/// Configuration management for the API server
///
/// Configuration is loaded once at startup from environment variables (with
/// `.env` support for development) into a typed struct that the rest of the
/// application receives by injection.
///
/// # Environment Variables
///
/// - `API_HOST`: host to bind to (default: 0.0.0.0)
/// - `API_PORT`: port to bind to (default: 8080)
/// - `DATABASE_URL`: SQLite connection string (default: sqlite://tarefas.db)
/// - `AUTH_ENABLED`: whether the task routes require a bearer token
///   (default: true)
/// - `JWT_SECRET`: signing key, required when AUTH_ENABLED is true; at least
///   32 bytes
/// - `CORS_ORIGINS`: comma-separated allowed origins (default: *)
/// - `STATIC_DIR`: directory holding the index page (default: static)
/// - `RUST_LOG`: log filter (default: info)
///
/// # Example
///
/// ```no_run
/// use tarefas_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication policy
    pub auth: AuthConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins ("*" means permissive)
    pub cors_origins: Vec<String>,

    /// Directory holding the static index page
    pub static_dir: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Authentication policy configuration
///
/// The task routes are guarded by the auth gate only when `enabled` is true.
/// Disabling the gate is a deployment configuration choice: the same routes
/// become reachable without a token, matching the unauthenticated variant of
/// the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether the task routes require a valid bearer token
    pub enabled: bool,

    /// Secret key for token signing
    ///
    /// Required (and checked for length) only when the gate is enabled.
    /// Generate with: `openssl rand -hex 32`
    pub jwt_secret: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value, or if the auth
    /// gate is enabled without a sufficiently long `JWT_SECRET`.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tarefas.db".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()?;

        let auth_enabled = env::var("AUTH_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();

        if auth_enabled {
            if jwt_secret.is_empty() {
                anyhow::bail!("JWT_SECRET environment variable is required when AUTH_ENABLED");
            }
            if jwt_secret.len() < 32 {
                anyhow::bail!("JWT_SECRET must be at least 32 characters long");
            }
        }

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
                static_dir,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            auth: AuthConfig {
                enabled: auth_enabled,
                jwt_secret,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
