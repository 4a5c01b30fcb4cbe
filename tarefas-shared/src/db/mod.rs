/// Database layer
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Startup schema bootstrap (create-if-absent)
///
/// Models live in the `models` module at crate root level.
pub mod pool;
pub mod schema;
