use crate::error::RouterError;
use crate::handler::{ArcHandler, Handler, Request};
use crate::pattern::Pattern;

use std::sync::Arc;

use http::Method;

/// A method + pattern + handler triple.
///
/// Immutable once constructed. [`matches`](Self::matches) is a pure
/// decision: the handler is returned, never invoked.
pub struct RouteMatcher {
    method: Method,
    pattern: Pattern,
    handler: ArcHandler,
}

impl RouteMatcher {
    pub fn new(method: Method, pattern: Pattern, handler: ArcHandler) -> Self {
        Self {
            method,
            pattern,
            handler,
        }
    }

    /// Matches iff the method is equal and the path equals `pattern`
    /// exactly.
    pub fn exact(method: Method, pattern: &str, handler: impl Handler + 'static) -> Self {
        Self::new(method, Pattern::exact(pattern), Arc::new(handler))
    }

    /// Matches iff the method is equal and `pattern` glob-matches the
    /// path. Construction never fails.
    pub fn glob(method: Method, pattern: &str, handler: impl Handler + 'static) -> Self {
        Self::new(method, Pattern::glob(pattern), Arc::new(handler))
    }

    /// Matches iff the method is equal and the path contains a match of
    /// the compiled expression. An invalid pattern is an error here,
    /// never a per-request failure.
    pub fn regex(
        method: Method,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, RouterError> {
        Ok(Self::new(method, Pattern::regex(pattern)?, Arc::new(handler)))
    }

    /// Matches iff the method is equal and the path agrees with `pattern`
    /// segment by segment, where `:name` segments accept any value.
    ///
    /// Placeholder values are not captured; read them positionally with
    /// [`segment`](crate::segment):
    ///
    /// ```
    /// # use linear_router::{Request, ResponseWriter, RouteMatcher};
    /// # use http::Method;
    /// let m = RouteMatcher::variable(
    ///     Method::GET,
    ///     "/products/:productID",
    ///     |req: &Request, rw: &mut ResponseWriter| {
    ///         let id = linear_router::segment(req.uri().path(), 1).unwrap();
    ///         rw.write(id.as_bytes());
    ///     },
    /// );
    /// ```
    pub fn variable(method: Method, pattern: &str, handler: impl Handler + 'static) -> Self {
        Self::new(method, Pattern::variable(pattern), Arc::new(handler))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the handler if `req` matches, `None` otherwise.
    pub fn matches(&self, req: &Request) -> Option<&ArcHandler> {
        if req.method() != self.method {
            return None;
        }
        if self.pattern.matches(req.uri().path()) {
            Some(&self.handler)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for RouteMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatcher")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .finish()
    }
}
