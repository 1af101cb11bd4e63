use crate::handler::ResponseWriter;
use crate::router::Router;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, Request, Response};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

/// Adapts a [`Router`] to a `hyper` service.
///
/// The request body is buffered, the router dispatches synchronously into
/// a [`ResponseWriter`], and the finished writer becomes the hyper
/// response. Cheap to clone; clones share the router.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl RouterService {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

impl From<Router> for RouterService {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response<Body>, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let router = Arc::clone(&self.router);
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = hyper::body::to_bytes(body)
                .await
                .map_err(|e| Box::new(e) as BoxError)?
                .to_vec();
            let req = crate::Request::from_parts(parts, body);

            let mut rw = ResponseWriter::new();
            router.dispatch(&req, &mut rw);
            Ok(rw.into_response().map(Body::from))
        })
    }
}
