use axum::{
    http::{header, HeaderValue, Method},
    middleware::map_response,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{casting, coffee, health, trivia, venues};
use crate::middleware::{json_error_fallback, not_found};
use crate::state::AppState;

/// The full HTTP surface: every service merged onto one router
pub fn app(state: AppState) -> Router {
    let security = state.config.security.clone();
    let request_logging = state.config.api.enable_request_logging;

    let mut router = Router::new()
        // Public
        .merge(health::routes())
        .merge(venues::routes())
        .merge(trivia::routes())
        // Public listing, protected writes
        .merge(coffee::routes())
        // Protected
        .merge(casting::routes())
        .fallback(not_found)
        .layer(map_response(json_error_fallback));

    if security.enable_cors {
        router = router.layer(cors_layer(&security));
    }
    if request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if security.cors_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
