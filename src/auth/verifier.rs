use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use tracing::debug;

use super::jwks::{JwksCache, KeySource, RemoteJwks, StaticJwks};
use super::{AuthError, Claims};
use crate::config::AuthConfig;

/// Verifies RS256 access tokens issued for one audience
pub struct TokenVerifier {
    keys: JwksCache,
    issuer: String,
    audience: String,
}

impl TokenVerifier {
    pub fn new(
        source: Box<dyn KeySource>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            keys: JwksCache::new(source, cache_ttl),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Verifier backed by the provider's published key set
    /// Without a configured domain there is nothing to fetch; every token names an unknown key
    pub fn from_config(auth: &AuthConfig) -> Self {
        let source: Box<dyn KeySource> = if auth.is_configured() {
            Box::new(RemoteJwks::new(auth.jwks_url()))
        } else {
            Box::new(StaticJwks::new(JwkSet { keys: Vec::new() }))
        };

        Self::new(
            source,
            auth.issuer(),
            auth.audience.clone(),
            Duration::from_secs(auth.jwks_cache_secs),
        )
    }

    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::malformed())?;
        let kid = header.kid.ok_or_else(AuthError::malformed)?;

        let key = self.keys.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(kid = %kid, error = %e, "Token rejected");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::expired(),
                    ErrorKind::InvalidAudience
                    | ErrorKind::InvalidIssuer
                    | ErrorKind::MissingRequiredClaim(_) => AuthError::incorrect_claims(),
                    _ => AuthError::unparsable(),
                }
            })
    }
}
