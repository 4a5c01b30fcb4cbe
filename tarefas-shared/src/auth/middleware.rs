/// Authentication context for guarded requests
///
/// After the HTTP layer's auth gate validates a bearer token, it inserts an
/// [`AuthContext`] into the request extensions so downstream handlers can see
/// who made the call.
///
/// Task handlers do not consume it today (tasks are not owned by accounts),
/// but the context is in place for future ownership checks.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use tarefas_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("User: {}", auth.user_id)
/// }
/// ```
use serde::{Deserialize, Serialize};

use super::jwt::Claims;

/// Authentication context added to request extensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user id
    pub user_id: i64,
}

impl AuthContext {
    /// Creates auth context from validated token claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims() {
        let claims = Claims::new(99);
        let ctx = AuthContext::from_claims(&claims);
        assert_eq!(ctx.user_id, 99);
    }
}
