use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use http::{Response, StatusCode};

/// Request type consumed by handlers. The body is fully buffered; only
/// method, path and headers are inspected by this crate.
pub type Request = http::Request<Vec<u8>>;

/// A terminal route target.
///
/// Implemented for any `Fn(&Request, &mut ResponseWriter)` closure, so
/// plain functions can be registered directly.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Request, rw: &mut ResponseWriter);
}

/// Shared handler value, cloned into every matcher compiled from a route
/// table entry.
pub type ArcHandler = Arc<dyn Handler>;

impl Handler for ArcHandler {
    fn handle(&self, req: &Request, rw: &mut ResponseWriter) {
        (**self).handle(req, rw)
    }
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut ResponseWriter) + Send + Sync,
{
    fn handle(&self, req: &Request, rw: &mut ResponseWriter) {
        (self)(req, rw)
    }
}

/// In-memory response sink handed to handlers.
///
/// Defaults to an empty `200 OK`. Handlers and middleware mutate status,
/// headers and body; the host server converts the finished writer into a
/// response with [`ResponseWriter::into_response`].
#[derive(Debug)]
pub struct ResponseWriter {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Appends `bytes` to the response body. Never fails.
    pub fn write(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut res = Response::new(self.body);
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers;
        res
    }
}

/// Writes a plain-text error response, replacing any body written so far.
pub(crate) fn error_response(rw: &mut ResponseWriter, status: StatusCode, msg: &str) {
    rw.set_status(status);
    rw.headers_mut().insert(
        CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    rw.body.clear();
    rw.write(msg.as_bytes());
    rw.write(b"\n");
}

/// Extracts `Authorization: Basic` credentials from a request.
pub trait RequestBasicAuth {
    /// Returns `(username, password)` if the request carries a well-formed
    /// basic auth header, `None` otherwise.
    fn basic_auth(&self) -> Option<(String, String)>;
}

impl<B> RequestBasicAuth for http::Request<B> {
    fn basic_auth(&self) -> Option<(String, String)> {
        let value = self.headers().get(AUTHORIZATION)?.to_str().ok()?;
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let idx = decoded.find(':')?;
        Some((decoded[..idx].to_owned(), decoded[idx + 1..].to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    fn request_with_auth(value: &str) -> Request {
        http::Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, value)
            .body(Vec::new())
            .unwrap()
    }

    #[test]
    fn basic_auth_well_formed() {
        // "admin:pass"
        let req = request_with_auth("Basic YWRtaW46cGFzcw==");
        assert_eq!(
            req.basic_auth(),
            Some(("admin".to_owned(), "pass".to_owned()))
        );
    }

    #[test]
    fn basic_auth_password_with_colon() {
        // "u:p:q" => password keeps everything after the first colon
        let req = request_with_auth("Basic dTpwOnE=");
        assert_eq!(req.basic_auth(), Some(("u".to_owned(), "p:q".to_owned())));
    }

    #[test]
    fn basic_auth_rejects_malformed() {
        for value in &["Basic !!!not-base64!!!", "Bearer abc", "Basic dXNlcg=="] {
            let req = request_with_auth(value);
            assert_eq!(req.basic_auth(), None, "value = {:?}", value);
        }

        let req: Request = http::Request::builder()
            .uri("/")
            .body(Vec::new())
            .unwrap();
        assert_eq!(req.basic_auth(), None);
    }

    #[test]
    fn response_writer_accumulates_body() {
        let mut rw = ResponseWriter::new();
        assert_eq!(rw.status(), StatusCode::OK);
        rw.write(b"hello, ");
        rw.write(b"world");
        rw.set_status(StatusCode::CREATED);

        let res = rw.into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.body(), b"hello, world");
    }
}
