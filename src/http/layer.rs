//! Route-level policy attachment.
//!
//! The finalization middleware runs outside the router, so anything put
//! into the request extensions by a route-scoped layer is gone by the time
//! the handler has consumed the request. This layer records the policy on
//! the response instead, where finalization can still see it.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::http::{Request, Response};
use tower::{Layer, Service};

use crate::resolve::outcome::{CachePolicy, RoutePolicy};

/// Attaches an inert [`RoutePolicy`] to every response produced by the
/// wrapped route.
///
/// A policy the handler already placed on the response wins; the layer
/// never overwrites one.
#[derive(Debug, Clone)]
pub struct RoutePolicyLayer {
    policy: RoutePolicy,
}

impl RoutePolicyLayer {
    pub fn new(policy: impl Into<CachePolicy>) -> Self {
        Self {
            policy: RoutePolicy::new(policy),
        }
    }

    /// A route that must never emit cache headers.
    pub fn disable() -> Self {
        Self {
            policy: RoutePolicy::disable(),
        }
    }
}

impl<S> Layer<S> for RoutePolicyLayer {
    type Service = RoutePolicyService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RoutePolicyService {
            inner,
            policy: self.policy.clone(),
        }
    }
}

/// Service produced by [`RoutePolicyLayer`].
#[derive(Debug, Clone)]
pub struct RoutePolicyService<S> {
    inner: S,
    policy: RoutePolicy,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RoutePolicyService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let policy = self.policy.clone();
        let future = self.inner.call(request);
        Box::pin(async move {
            let mut response = future.await?;
            if response.extensions().get::<RoutePolicy>().is_none() {
                response.extensions_mut().insert(policy);
            }
            Ok(response)
        })
    }
}
