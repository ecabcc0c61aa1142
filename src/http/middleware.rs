//! Response finalization middleware.
//!
//! Runs after the handler, just before the response leaves the process:
//! captures the request snapshot, lets the handler produce its response,
//! then asks the engine to resolve and write the cache headers.
//!
//! Mount it once, over the whole app:
//!
//! ```ignore
//! let engine = Arc::new(CacheHeaderEngine::from_config(&config)?);
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn_with_state(engine, cache_header_middleware));
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::RequestInfo;
use crate::resolve::engine::CacheHeaderEngine;
use crate::resolve::outcome::{CacheOverride, RoutePolicy};

/// Finalization middleware for the cache header engine.
///
/// Reads the per-route policy attached by [`RoutePolicyLayer`] (or by an
/// `Extension` layered outside this middleware) and the per-response
/// override from the response extensions, then applies the engine. A
/// resolution failure is a caller configuration error; it is logged and
/// surfaced through the host's error path as a 500.
///
/// [`RoutePolicyLayer`]: crate::http::layer::RoutePolicyLayer
pub async fn cache_header_middleware(
    State(engine): State<Arc<CacheHeaderEngine>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let info = RequestInfo::capture(&request);
    let outer_route_policy = request.extensions().get::<RoutePolicy>().cloned();

    let mut response = next.run(request).await;

    let override_policy = response.extensions_mut().remove::<CacheOverride>();
    let route_policy = response
        .extensions_mut()
        .remove::<RoutePolicy>()
        .or(outer_route_policy);
    let result = engine.apply(
        &info,
        override_policy.as_ref().map(CacheOverride::policy),
        route_policy.as_ref().map(RoutePolicy::policy),
        &mut response,
    );

    match result {
        Ok(applied) => {
            tracing::debug!(path = %info.path(), outcome = ?applied, "Cache header resolution finished");
            response
        }
        Err(err) => {
            tracing::error!(path = %info.path(), error = %err, "Cache header resolution failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
