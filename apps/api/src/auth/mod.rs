//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs minted by the identity service that shares
//! `JWT_SECRET`. This module only verifies them:
//!
//! ```text
//! Authorization: Bearer <token>  →  TokenVerifier::verify  →  AuthUser
//! ```
//!
//! Handlers opt in per route with `AuthUser` (required) or `MaybeAuthUser`
//! (optional; a present-but-bad token is still rejected).

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    /// Expiry (Unix epoch seconds).
    pub exp: usize,
}

/// The verified caller of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
}

#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<AuthUser, AppError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| AuthUser {
                id: data.claims.sub,
            })
            .map_err(|e| {
                debug!("Rejected bearer token: {e}");
                AppError::Unauthorized
            })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    TokenVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        TokenVerifier::from_ref(state).verify(token)
    }
}

/// Authentication for routes that also serve anonymous callers.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    TokenVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match bearer_token(&parts.headers) {
            Some(token) => TokenVerifier::from_ref(state)
                .verify(token)
                .map(|user| MaybeAuthUser(Some(user))),
            None => Ok(MaybeAuthUser(None)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    pub(crate) const SECRET: &str = "test-secret";

    pub(crate) fn token_for(user_id: Uuid, valid_for: Duration) -> String {
        let claims = Claims {
            sub: user_id,
            exp: (Utc::now() + valid_for).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn parts_with(auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_verify_valid_token() {
        let id = Uuid::new_v4();
        let user = TokenVerifier::new(SECRET)
            .verify(&token_for(id, Duration::hours(1)))
            .unwrap();
        assert_eq!(user.id, id);
    }

    #[test]
    fn test_verify_ignores_extra_claims() {
        let id = Uuid::new_v4();
        let claims = serde_json::json!({
            "sub": id,
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
            "email": "user@example.com",
            "role": "member"
        });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let user = TokenVerifier::new(SECRET).verify(&token).unwrap();
        assert_eq!(user, AuthUser { id });
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let token = token_for(Uuid::new_v4(), Duration::hours(-2));
        assert!(matches!(
            TokenVerifier::new(SECRET).verify(&token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = token_for(Uuid::new_v4(), Duration::hours(1));
        assert!(TokenVerifier::new("other-secret").verify(&token).is_err());
    }

    #[test]
    fn test_bearer_token_parsing() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts.headers), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&parts_with(Some("Basic xyz")).headers), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer   ")).headers), None);
        assert_eq!(bearer_token(&parts_with(None).headers), None);
    }

    #[tokio::test]
    async fn test_auth_user_extractor() {
        let verifier = TokenVerifier::new(SECRET);
        let id = Uuid::new_v4();
        let header = format!("Bearer {}", token_for(id, Duration::hours(1)));

        let mut parts = parts_with(Some(&header));
        let user = AuthUser::from_request_parts(&mut parts, &verifier)
            .await
            .unwrap();
        assert_eq!(user.id, id);

        let mut anonymous = parts_with(None);
        assert!(matches!(
            AuthUser::from_request_parts(&mut anonymous, &verifier).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_maybe_auth_user_extractor() {
        let verifier = TokenVerifier::new(SECRET);

        let mut anonymous = parts_with(None);
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(&mut anonymous, &verifier)
            .await
            .unwrap();
        assert!(user.is_none());

        let mut garbage = parts_with(Some("Bearer not-a-jwt"));
        assert!(MaybeAuthUser::from_request_parts(&mut garbage, &verifier)
            .await
            .is_err());
    }
}
