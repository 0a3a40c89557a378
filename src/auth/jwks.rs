use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::DecodingKey;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::AuthError;

/// Unknown `kid`s never trigger more than one re-fetch per interval
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Where the signing keys come from
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, AuthError>;
}

/// Keys published by the identity provider at its discovery endpoint
pub struct RemoteJwks {
    client: reqwest::Client,
    url: String,
}

impl RemoteJwks {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl KeySource for RemoteJwks {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "JWKS request failed");
                AuthError::keys_unavailable()
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "JWKS response was not a key set");
            AuthError::keys_unavailable()
        })
    }
}

/// Fixed key set, for offline runs and tests
pub struct StaticJwks {
    keys: JwkSet,
}

impl StaticJwks {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeySource for StaticJwks {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        Ok(self.keys.clone())
    }
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    current: Option<CachedKeys>,
    failed_at: Option<Instant>,
}

impl CacheState {
    fn recently_failed(&self) -> bool {
        self.failed_at
            .map(|at| at.elapsed() < MIN_REFRESH_INTERVAL)
            .unwrap_or(false)
    }

    /// Key from the last good fetch, however old
    fn last_known(&self, kid: &str) -> Option<Result<DecodingKey, AuthError>> {
        self.current
            .as_ref()
            .and_then(|entry| entry.keys.find(kid))
            .map(to_decoding_key)
    }
}

fn to_decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
    DecodingKey::from_jwk(jwk).map_err(|_| AuthError::unparsable())
}

/// Key set cached for `ttl`, re-fetched early when a token names an unknown key.
///
/// Failed fetches are remembered too: for `MIN_REFRESH_INTERVAL` after one,
/// lookups answer from the last good key set (or fail fast) instead of
/// queueing behind another request to the provider.
pub struct JwksCache {
    source: Box<dyn KeySource>,
    ttl: Duration,
    state: RwLock<CacheState>,
}

impl JwksCache {
    pub fn new(source: Box<dyn KeySource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Decoding key for `kid`
    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(outcome) = self.lookup(&*self.state.read().await, kid) {
            return outcome;
        }

        let mut state = self.state.write().await;

        // Another request may have refreshed, or failed to, while we waited for the lock
        if let Some(outcome) = self.lookup(&state, kid) {
            return outcome;
        }

        match self.source.fetch().await {
            Ok(keys) => {
                debug!(count = keys.keys.len(), "Fetched signing keys");
                let outcome = keys.find(kid).map(to_decoding_key);
                state.current = Some(CachedKeys {
                    keys,
                    fetched_at: Instant::now(),
                });
                state.failed_at = None;
                outcome.unwrap_or_else(|| Err(AuthError::unknown_key()))
            }
            Err(err) => {
                warn!(retry_after = ?MIN_REFRESH_INTERVAL, "Signing key refresh failed");
                state.failed_at = Some(Instant::now());
                state.last_known(kid).unwrap_or(Err(err))
            }
        }
    }

    /// Answer from the cache, or `None` when a fetch is due
    fn lookup(&self, state: &CacheState, kid: &str) -> Option<Result<DecodingKey, AuthError>> {
        if let Some(entry) = state.current.as_ref() {
            let age = entry.fetched_at.elapsed();
            if age < self.ttl {
                if let Some(jwk) = entry.keys.find(kid) {
                    return Some(to_decoding_key(jwk));
                }
                if age < MIN_REFRESH_INTERVAL {
                    return Some(Err(AuthError::unknown_key()));
                }
            }
        }

        if state.recently_failed() {
            return Some(
                state
                    .last_known(kid)
                    .unwrap_or_else(|| Err(AuthError::keys_unavailable())),
            );
        }

        None
    }
}
