use linear_router::http::{Method, StatusCode};
use linear_router::{route_table, Request, ResponseWriter, RouteMatcher, RouteTable, Router};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Vec::new())
        .unwrap()
}

fn counter() -> (Arc<AtomicUsize>, impl Fn(&Request, &mut ResponseWriter) + Send + Sync) {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = {
        let hits = Arc::clone(&hits);
        move |_: &Request, _: &mut ResponseWriter| {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    };
    (hits, h)
}

#[test]
fn first_match_wins() {
    let (a_hits, a) = counter();
    let (b_hits, b) = counter();

    // both matchers accept GET /products/p1
    let router = Router::new(vec![
        RouteMatcher::glob(Method::GET, "/products/*", a),
        RouteMatcher::variable(Method::GET, "/products/:productID", b),
    ]);

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::GET, "/products/p1"), &mut rw);

    assert_eq!(a_hits.load(Ordering::SeqCst), 1);
    assert_eq!(b_hits.load(Ordering::SeqCst), 0);
}

#[test]
fn not_found_runs_exactly_once_when_nothing_matches() {
    let (route_hits, h) = counter();
    let (nf_hits, nf) = counter();

    let mut router = Router::new(vec![RouteMatcher::exact(Method::GET, "/known", h)]);
    router.set_not_found(nf);

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::GET, "/unknown"), &mut rw);

    assert_eq!(route_hits.load(Ordering::SeqCst), 0);
    assert_eq!(nf_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn method_mismatch_falls_through() {
    let (hits, h) = counter();
    let router = Router::new(vec![RouteMatcher::exact(Method::GET, "/products", h)]);

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::POST, "/products"), &mut rw);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(rw.status(), StatusCode::NOT_FOUND);
}

#[test]
fn table_to_variable_matchers_end_to_end() {
    let mut table = RouteTable::new();
    table
        .route(Method::GET, "/products", |_: &Request, rw: &mut ResponseWriter| {
            rw.write(b"list");
        })
        .route(
            Method::GET,
            "/products/:productID",
            |req: &Request, rw: &mut ResponseWriter| {
                let id = linear_router::segment(req.uri().path(), 1).unwrap();
                rw.write(b"get ");
                rw.write(id.as_bytes());
            },
        )
        .route(
            Method::DELETE,
            "/products/:productID",
            |_: &Request, rw: &mut ResponseWriter| {
                rw.write(b"deleted");
            },
        );

    let router = Router::new(table.variable_matchers());

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::GET, "/products"), &mut rw);
    assert_eq!(rw.body(), b"list");

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::GET, "/products/p123"), &mut rw);
    assert_eq!(rw.body(), b"get p123");

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::DELETE, "/products/p123"), &mut rw);
    assert_eq!(rw.body(), b"deleted");

    // segment-count mismatch: not handled by the variable pattern
    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::GET, "/products/p123/reviews"), &mut rw);
    assert_eq!(rw.status(), StatusCode::NOT_FOUND);
}

#[test]
fn route_table_macro_matches_imperative_registration() {
    let table = route_table! {
        GET "/products" => |_: &Request, rw: &mut ResponseWriter| rw.write(b"list"),
        POST "/products" => |_: &Request, rw: &mut ResponseWriter| rw.write(b"created"),
        GET "/products/:productID" => |_: &Request, rw: &mut ResponseWriter| rw.write(b"one"),
    };
    assert_eq!(table.len(), 3);

    let router = Router::new(table.variable_matchers());

    let mut rw = ResponseWriter::new();
    router.dispatch(&request(Method::POST, "/products"), &mut rw);
    assert_eq!(rw.body(), b"created");
}

#[test]
fn router_nests_as_a_handler() {
    let mut inner_table = RouteTable::new();
    inner_table.route(
        Method::GET,
        "/api/v1/status",
        |_: &Request, rw: &mut ResponseWriter| rw.write(b"ok"),
    );
    let inner = Router::new(inner_table.exact_matchers());

    // glob prefix delegates whole subtrees to the inner router
    let outer = Router::new(vec![RouteMatcher::glob(Method::GET, "/api/*", inner)]);

    let mut rw = ResponseWriter::new();
    outer.dispatch(&request(Method::GET, "/api/v1/status"), &mut rw);
    assert_eq!(rw.body(), b"ok");
}

#[test]
fn shared_router_dispatches_concurrently() {
    let (hits, h) = counter();
    let router = Arc::new(Router::new(vec![RouteMatcher::glob(Method::GET, "*", h)]));

    let threads: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let mut rw = ResponseWriter::new();
                router.dispatch(&request(Method::GET, &format!("/t/{}", i)), &mut rw);
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 4);
}
