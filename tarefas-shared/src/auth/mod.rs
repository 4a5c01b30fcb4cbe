/// Authentication utilities
///
/// This module provides the authentication primitives for the tarefas API:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Signed bearer-token issuance and verification
/// - [`middleware`]: Request auth context shared with the HTTP layer
///
/// # Example
///
/// ```no_run
/// use tarefas_shared::auth::password::{hash_password, verify_password};
/// use tarefas_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let token = create_token(&Claims::new(42), "secret-key-at-least-32-bytes-long!")?;
/// let claims = validate_token(&token, "secret-key-at-least-32-bytes-long!")?;
/// assert_eq!(claims.sub, 42);
/// # Ok(())
/// # }
/// ```
pub mod jwt;
pub mod middleware;
pub mod password;
