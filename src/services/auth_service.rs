use std::fmt;

use futures::future::{ready, BoxFuture};
use futures::FutureExt;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::CurrentUser;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,     // subject (email)
    pub exp: usize,      // expiration time
    pub iat: usize,      // issued at
    pub user_id: String,
    pub role: Option<String>,
}

#[derive(Debug)]
pub enum AuthError {
    InvalidToken(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidToken(e) => write!(f, "Invalid token: {}", e),
        }
    }
}

/// Current-user lookup for a session. `Ok(None)` means nobody is signed in.
pub trait AuthClient: Send + Sync {
    fn current_user(
        &self,
        token: Option<String>,
    ) -> BoxFuture<'_, Result<Option<CurrentUser>, AuthError>>;
}

pub struct JwtAuthClient {
    secret: String,
}

impl JwtAuthClient {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat", "sub", "user_id"]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl AuthClient for JwtAuthClient {
    fn current_user(
        &self,
        token: Option<String>,
    ) -> BoxFuture<'_, Result<Option<CurrentUser>, AuthError>> {
        let result = match token {
            None => Ok(None),
            Some(token) => self.decode_claims(&token).map(|claims| {
                Some(CurrentUser {
                    user_id: claims.user_id,
                    email: claims.sub,
                    role: claims.role,
                })
            }),
        };
        ready(result).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, expires_in: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: "admin@example.com".to_string(),
            exp: (now + expires_in).timestamp() as usize,
            iat: now.timestamp() as usize,
            user_id: "user-42".to_string(),
            role: Some("admin".to_string()),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_resolves_user() {
        let client = JwtAuthClient::new("secret");
        let user = tokio_test::block_on(
            client.current_user(Some(token("secret", Duration::hours(1)))),
        )
        .unwrap()
        .unwrap();

        assert_eq!(user.user_id, "user-42");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_no_token_is_no_user() {
        let client = JwtAuthClient::new("secret");
        let user = tokio_test::block_on(client.current_user(None)).unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let client = JwtAuthClient::new("secret");
        let result =
            tokio_test::block_on(client.current_user(Some(token("other", Duration::hours(1)))));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let client = JwtAuthClient::new("secret");
        let result =
            tokio_test::block_on(client.current_user(Some(token("secret", Duration::hours(-2)))));
        assert!(result.is_err());
    }
}
