/// Bearer-token issuance and verification
///
/// Access tokens are JWTs signed with HS256. A token embeds the user id and
/// an absolute expiry set at issuance time; there is no refresh or rotation
/// mechanism, an expired token is simply rejected and the client
/// re-authenticates.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC-SHA256)
/// - **Expiration**: fixed 1 hour from issuance
/// - **Validation**: signature, expiration, and issuer checks
/// - **Secret**: process-wide configuration, at least 32 bytes
///
/// # Example
///
/// ```
/// use tarefas_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "test-secret-key-at-least-32-bytes-long";
/// let token = create_token(&Claims::new(7), secret)?;
///
/// let claims = validate_token(&token, secret)?;
/// assert_eq!(claims.sub, 7);
/// # Ok(())
/// # }
/// ```
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token issuer name embedded in and required from every token
const ISSUER: &str = "tarefas";

/// Fixed access-token lifetime
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Signature mismatch, malformed payload, or wrong issuer
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// JWT claims structure
///
/// Standard claims only: `sub` (user id), `iss`, `iat`, `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user id
    pub sub: i64,

    /// Issuer - always "tarefas"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user with the fixed 1-hour expiry.
    pub fn new(user_id: i64) -> Self {
        Self::with_expiration(user_id, Duration::seconds(TOKEN_TTL_SECONDS))
    }

    /// Creates claims with a custom expiry offset from now.
    ///
    /// Negative durations produce an already-expired token, which the tests
    /// use to exercise expiry rejection.
    pub fn with_expiration(user_id: i64, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a JWT token string.
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims.
///
/// Verifies the signature, expiry, and issuer.
///
/// # Errors
///
/// - `JwtError::Expired` when the expiry has passed
/// - `JwtError::Invalid` for signature mismatch, wrong issuer, or a
///   malformed payload
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::Invalid(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(42);

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.iss, "tarefas");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_create_and_validate_token() {
        let token = create_token(&Claims::new(42), SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.sub, 42);
        assert_eq!(validated.iss, "tarefas");
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let token = create_token(&Claims::new(1), SECRET).expect("Should create token");

        let result = validate_token(&token, "another-secret-also-32-bytes-long!!");
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_validate_expired_token() {
        // Expired an hour ago, well past the validation leeway
        let claims = Claims::with_expiration(42, Duration::seconds(-3600));
        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).expect("Should create token");
        let result = validate_token(&token, SECRET);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_validate_garbage_token() {
        let result = validate_token("not-a-jwt", SECRET);
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_validate_wrong_issuer() {
        let claims = Claims {
            iss: "someone-else".to_string(),
            ..Claims::new(42)
        };
        let token = create_token(&claims, SECRET).expect("Should create token");

        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }
}
