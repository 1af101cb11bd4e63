use std::error::Error as StdError;

/// Error returned when building matchers from user-supplied patterns.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The pattern is not a valid regular expression.
    ///
    /// Raised at matcher construction time, never per request.
    #[error("invalid regex pattern {pattern:?}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Error returned by the segment accessors.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("no segment at index {index} in path {path:?}")]
    IndexOutOfRange { path: String, index: usize },

    #[error("invalid segment at index {index} in path {path:?}")]
    Parse {
        path: String,
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
