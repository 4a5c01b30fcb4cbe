/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login endpoints
/// - `tarefas`: Task CRUD endpoints
pub mod auth;
pub mod health;
pub mod tarefas;
