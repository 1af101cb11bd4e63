/// Builds a [`RouteTable`](crate::RouteTable) from a route list.
///
/// ```
/// use linear_router::{route_table, Request, ResponseWriter};
///
/// fn list(_: &Request, rw: &mut ResponseWriter) {
///     rw.write(b"list");
/// }
///
/// let table = route_table! {
///     GET "/products" => list,
///     POST "/products" => |_: &Request, rw: &mut ResponseWriter| {
///         rw.write(b"created");
///     }
/// };
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! route_table {
    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __table = $crate::RouteTable::new();
        $(route_table!(@entry __table, $method, $pattern, $handler);)+
        __table
    }};

    {@entry $table:expr, GET, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::GET, $pattern, $handler)
    };
    {@entry $table:expr, POST, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::POST, $pattern, $handler)
    };
    {@entry $table:expr, PUT, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::PUT, $pattern, $handler)
    };
    {@entry $table:expr, DELETE, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::DELETE, $pattern, $handler)
    };
    {@entry $table:expr, HEAD, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::HEAD, $pattern, $handler)
    };
    {@entry $table:expr, OPTIONS, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::OPTIONS, $pattern, $handler)
    };
    {@entry $table:expr, CONNECT, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::CONNECT, $pattern, $handler)
    };
    {@entry $table:expr, PATCH, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::PATCH, $pattern, $handler)
    };
    {@entry $table:expr, TRACE, $pattern:expr, $handler:expr} => {
        $table.route($crate::http::Method::TRACE, $pattern, $handler)
    };
}
