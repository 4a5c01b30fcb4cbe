//! # Tarefas Shared Library
//!
//! This crate contains the domain types and storage logic shared by the
//! tarefas API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their store operations
//! - `auth`: Password hashing, token issuance/verification, auth context
//! - `db`: Connection pool and schema bootstrap

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the tarefas shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
