use crate::error::SegmentError;

use std::error::Error as StdError;
use std::str::FromStr;

/// Returns all segments in `path`.
///
/// The path is split on `/` and the empty component preceding the leading
/// slash is dropped, so `segments("/") == [""]` and
/// `segments("/a/b") == ["a", "b"]`. A trailing slash yields a trailing
/// empty segment.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').skip(1).collect()
}

/// Returns the path's segment at the specified index.
pub fn segment(path: &str, index: usize) -> Result<&str, SegmentError> {
    path.split('/')
        .skip(1)
        .nth(index)
        .ok_or_else(|| SegmentError::IndexOutOfRange {
            path: path.to_owned(),
            index,
        })
}

/// Parses the path's segment at the specified index.
///
/// The parser's own error is carried as the source of
/// [`SegmentError::Parse`].
///
/// ```
/// # use linear_router::parse_segment;
/// let id: i64 = parse_segment("/products/123", 1).unwrap();
/// assert_eq!(id, 123);
/// ```
pub fn parse_segment<T>(path: &str, index: usize) -> Result<T, SegmentError>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    let s = segment(path, index)?;
    s.parse().map_err(|e| SegmentError::Parse {
        path: path.to_owned(),
        index,
        source: Box::new(e),
    })
}
