//! A first-match-wins HTTP router library.
//!
//! Routes are registered in a [`RouteTable`], optionally wrapped with
//! [`Middleware`], then compiled into an ordered list of [`RouteMatcher`]s
//! using one of four matching strategies (exact, glob, regex, variable
//! segment). A [`Router`] evaluates the matchers in order and dispatches to
//! the first one that matches, or to its not-found handler.
//!
//! ```
//! use linear_router::{ResponseWriter, Request, Router, RouteTable};
//! use linear_router::http::{Method, StatusCode};
//!
//! let mut table = RouteTable::new();
//! table.route(Method::GET, "/products/:id", |req: &Request, rw: &mut ResponseWriter| {
//!     let id = linear_router::segment(req.uri().path(), 1).unwrap();
//!     rw.write(id.as_bytes());
//! });
//!
//! let router = Router::new(table.variable_matchers());
//!
//! let req = http::Request::builder()
//!     .method(Method::GET)
//!     .uri("/products/p123")
//!     .body(Vec::new())
//!     .unwrap();
//! let mut rw = ResponseWriter::new();
//! router.dispatch(&req, &mut rw);
//! assert_eq!(rw.status(), StatusCode::OK);
//! assert_eq!(rw.body(), b"p123");
//! ```

#![forbid(unsafe_code)]

mod error;
mod handler;
mod matcher;
pub mod middleware;
mod pattern;
mod router;
mod segments;
mod table;
mod table_macro;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use self::error::{RouterError, SegmentError};
pub use self::handler::{ArcHandler, Handler, Request, RequestBasicAuth, ResponseWriter};
pub use self::matcher::RouteMatcher;
pub use self::middleware::Middleware;
pub use self::pattern::Pattern;
pub use self::router::Router;
pub use self::segments::{parse_segment, segment, segments};
pub use self::table::RouteTable;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::RouterService;

pub use http;
