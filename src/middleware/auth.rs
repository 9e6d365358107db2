//! Bearer-token authentication boundary.
//!
//! Token issuance lives in the external identity service; this module only
//! validates tokens and turns a request into an explicit acting user id.
//! Core domain functions never read request state — they take the id the
//! extractors produce.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: i64,
}

/// The acting identity. Rejects the request with 401 when the bearer token
/// is missing, malformed, or expired.
#[derive(Debug, Clone)]
pub struct Auth {
    pub user_id: i64,
}

/// Anonymous-friendly variant for public reads: a valid token yields the
/// viewer id, anything else is treated as anonymous.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<i64>);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_user_id(parts, &state.jwt_secret) {
            Some(user_id) => Ok(Auth { user_id }),
            None => Err(AppError::Unauthorized),
        }
    }
}

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(bearer_user_id(parts, &state.jwt_secret)))
    }
}

fn bearer_user_id(parts: &Parts, secret: &str) -> Option<i64> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()?;
    Some(data.claims.sub)
}

/// Mint a token for the given user. The production identity service issues
/// tokens with the same claims; this seam exists for tooling and tests.
pub fn issue_token(
    user_id: i64,
    secret: &str,
    expiration_days: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::days(expiration_days)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
