//! Bearer-token pipeline: pull the token out of the request, verify it against
//! the identity provider's published keys, then check a scoped permission.

pub mod jwks;
pub mod permissions;
pub mod verifier;

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

pub use jwks::{JwksCache, KeySource, RemoteJwks, StaticJwks};
pub use permissions::Permission;
pub use verifier::TokenVerifier;

/// Access-token payload. Only the fields the services read are typed;
/// `aud`, `iss` and `exp` are enforced by the verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub scope: Option<String>,
    pub exp: i64,
    pub iat: Option<i64>,
}

/// Rejection raised anywhere in the token pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub code: &'static str,
    pub description: String,
    pub status: StatusCode,
}

impl AuthError {
    pub fn new(code: &'static str, description: impl Into<String>, status: StatusCode) -> Self {
        Self {
            code,
            description: description.into(),
            status,
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            "authorization_header_missing",
            "Authorization header is expected.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn invalid_header(description: impl Into<String>, status: StatusCode) -> Self {
        Self::new("invalid_header", description, status)
    }

    pub fn malformed() -> Self {
        Self::invalid_header("Authorization malformed.", StatusCode::UNAUTHORIZED)
    }

    pub fn unknown_key() -> Self {
        Self::invalid_header("Unable to find the appropriate key.", StatusCode::BAD_REQUEST)
    }

    pub fn unparsable() -> Self {
        Self::invalid_header("Unable to parse authentication token.", StatusCode::BAD_REQUEST)
    }

    pub fn expired() -> Self {
        Self::new("token_expired", "Token expired.", StatusCode::UNAUTHORIZED)
    }

    pub fn incorrect_claims() -> Self {
        Self::new(
            "invalid_claims",
            "Incorrect claims. Please, check the audience and issuer.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn keys_unavailable() -> Self {
        Self::new(
            "jwks_unavailable",
            "Unable to fetch signing keys.",
            StatusCode::SERVICE_UNAVAILABLE,
        )
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for AuthError {}

/// Extract the raw JWT from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(AuthError::header_missing)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::invalid_header("Authorization header must be bearer token.", StatusCode::UNAUTHORIZED))?;

    let parts: Vec<&str> = value.split_whitespace().collect();

    match parts.as_slice() {
        [] => Err(AuthError::header_missing()),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\".",
            StatusCode::UNAUTHORIZED,
        )),
        [_] => Err(AuthError::invalid_header("Token not found.", StatusCode::UNAUTHORIZED)),
        [_, token] => Ok(*token),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
            StatusCode::UNAUTHORIZED,
        )),
    }
}

/// Require `permission` in the token's `permissions` claim
pub fn check_permissions(permission: &str, claims: &Claims) -> Result<(), AuthError> {
    let granted = claims.permissions.as_ref().ok_or_else(|| {
        AuthError::new(
            "invalid_claims",
            "Permissions not included in JWT.",
            StatusCode::BAD_REQUEST,
        )
    })?;

    if !granted.iter().any(|p| p == permission) {
        return Err(AuthError::new(
            "unauthorized",
            "Permission not found.",
            StatusCode::FORBIDDEN,
        ));
    }

    Ok(())
}
