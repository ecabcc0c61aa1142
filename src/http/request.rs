//! Request snapshot captured before the handler runs.
//!
//! Resolution happens after the handler has consumed the request, so the
//! routing-relevant parts are captured up front and carried through to the
//! finalization step.

use axum::http::{HeaderMap, Method, Request, Uri};

/// The routing-relevant view of one request.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

impl RequestInfo {
    /// Build a snapshot from loose parts.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
        }
    }

    /// Capture the routing-relevant parts of a request before it is
    /// handed to the handler.
    pub fn capture<B>(request: &Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            uri: request.uri().clone(),
            headers: request.headers().clone(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The raw request path, as rules see it.
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
