use std::marker::PhantomData;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::auth::{bearer_token, check_permissions, Claims, Permission};
use crate::error::ApiError;
use crate::state::AppState;

/// Verified caller holding permission `P`.
///
/// Runs before any body extractor, so a request without the permission is
/// rejected before its payload is looked at.
#[derive(Debug)]
pub struct Authorized<P: Permission> {
    pub claims: Claims,
    _permission: PhantomData<fn() -> P>,
}

impl<P: Permission> Authorized<P> {
    pub fn subject(&self) -> &str {
        self.claims.sub.as_deref().unwrap_or("unknown")
    }
}

#[async_trait]
impl<P: Permission> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.verifier.verify(token).await?;
        check_permissions(P::NAME, &claims)?;

        tracing::debug!(sub = ?claims.sub, permission = P::NAME, "Request authorized");

        Ok(Self {
            claims,
            _permission: PhantomData,
        })
    }
}
