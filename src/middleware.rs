//! Handler-to-handler transformations applied at route registration time.

use crate::handler::{error_response, ArcHandler, Handler, Request, RequestBasicAuth, ResponseWriter};

use std::sync::Arc;

use http::header::WWW_AUTHENTICATE;
use http::{HeaderValue, Method, StatusCode};
use sha2::{Digest, Sha256};

/// A middleware wraps a handler with behavior that runs before or after
/// delegation.
pub type Middleware = Box<dyn Fn(ArcHandler) -> ArcHandler + Send + Sync>;

/// Folds `middleware` over `handler`.
///
/// The first middleware in the slice becomes the outermost wrapper: it
/// executes first and delegates last. `apply(h, &[log, auth])` therefore
/// logs every request, including the ones `auth` rejects.
pub fn apply(handler: ArcHandler, middleware: &[Middleware]) -> ArcHandler {
    middleware.iter().rev().fold(handler, |h, mw| mw(h))
}

/// Observer for the logging middleware.
///
/// Injected rather than ambient so tests and embedders can capture the
/// access records; [`TracingLog`] is the stock implementation.
pub trait AccessLog: Send + Sync {
    fn record(&self, method: &Method, path: &str);
}

/// [`AccessLog`] that emits a `tracing` event per request.
#[derive(Debug, Default)]
pub struct TracingLog;

impl AccessLog for TracingLog {
    fn record(&self, method: &Method, path: &str) {
        tracing::info!(%method, path, "request");
    }
}

/// Records the method and path of every request on `sink`, then
/// delegates unconditionally. Never blocks or fails the request.
pub fn logging(sink: Arc<dyn AccessLog>) -> Middleware {
    Box::new(move |next: ArcHandler| {
        let sink = Arc::clone(&sink);
        Arc::new(move |req: &Request, rw: &mut ResponseWriter| {
            sink.record(req.method(), req.uri().path());
            next.handle(req, rw);
        }) as ArcHandler
    })
}

/// [`logging`] with the stock [`TracingLog`] sink.
pub fn tracing_logging() -> Middleware {
    logging(Arc::new(TracingLog))
}

/// Gates the wrapped handler behind HTTP basic auth.
///
/// A SHA-256 digest of `username + password` is precomputed here;
/// per-request credentials are digested the same way and compared, so the
/// expected plaintext is not retained. On a digest match the wrapped
/// handler runs and the middleware returns immediately. Otherwise a
/// `WWW-Authenticate` challenge and a plain-text 401 are written and the
/// handler is not invoked.
pub fn basic_auth(username: &str, password: &str) -> Middleware {
    let key = credential_digest(username, password);
    Box::new(move |next: ArcHandler| {
        Arc::new(move |req: &Request, rw: &mut ResponseWriter| {
            if let Some((user, pass)) = req.basic_auth() {
                if credential_digest(&user, &pass) == key {
                    next.handle(req, rw);
                    return;
                }
            }

            rw.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Restricted\""),
            );
            error_response(rw, StatusCode::UNAUTHORIZED, "401 Unauthorized");
        }) as ArcHandler
    })
}

fn credential_digest(username: &str, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
