use crate::handler::{error_response, ArcHandler, Handler, Request, ResponseWriter};
use crate::matcher::RouteMatcher;

use std::sync::Arc;

use http::StatusCode;

/// Dispatches each request to the first matcher that accepts it.
///
/// Matchers are evaluated strictly in the order given to [`new`](Self::new);
/// the first match terminates the scan, so later overlapping patterns are
/// intentionally unreachable. When nothing matches, the not-found handler
/// runs instead.
///
/// A router is read-only once built (the not-found handler is the only
/// override) and can be shared freely across threads.
pub struct Router {
    matchers: Vec<RouteMatcher>,
    not_found: ArcHandler,
}

impl Router {
    pub fn new(matchers: Vec<RouteMatcher>) -> Self {
        Self {
            matchers,
            not_found: Arc::new(default_not_found),
        }
    }

    /// Replaces the default plain-text 404 handler.
    pub fn set_not_found(&mut self, handler: impl Handler + 'static) -> &mut Self {
        self.not_found = Arc::new(handler);
        self
    }

    /// Resolves `req` to exactly one handler and invokes it.
    ///
    /// Handler failures are not caught here; they propagate to the host
    /// server.
    pub fn dispatch(&self, req: &Request, rw: &mut ResponseWriter) {
        for matcher in &self.matchers {
            if let Some(handler) = matcher.matches(req) {
                handler.handle(req, rw);
                return;
            }
        }

        tracing::debug!(method = %req.method(), path = req.uri().path(), "no route matched");
        self.not_found.handle(req, rw);
    }
}

impl Handler for Router {
    fn handle(&self, req: &Request, rw: &mut ResponseWriter) {
        self.dispatch(req, rw)
    }
}

fn default_not_found(_: &Request, rw: &mut ResponseWriter) {
    error_response(rw, StatusCode::NOT_FOUND, "404 page not found");
}
