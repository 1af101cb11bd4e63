use crate::error::RouterError;
use crate::segments::segments;

use regex::Regex;
use smallvec::SmallVec;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';

/// One of the four path matching strategies.
///
/// Each variant decides whether a request path belongs to the family of
/// paths the pattern describes. Method checks live in
/// [`RouteMatcher`](crate::RouteMatcher), not here.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Full string equality, no normalization.
    Exact(String),
    /// `*` matches any run of zero or more characters, including `/`;
    /// every other character matches literally.
    Glob(String),
    /// Matches if the path contains a match of the expression (not
    /// anchored). Compiled once, at construction.
    Regex(Regex),
    /// Segment-wise comparison: segment counts must be equal, and every
    /// pattern segment either starts with `:` (accepts any value) or must
    /// equal the path segment exactly.
    Variable(Vec<String>),
}

impl Pattern {
    pub fn exact(pattern: impl Into<String>) -> Self {
        Self::Exact(pattern.into())
    }

    pub fn glob(pattern: impl Into<String>) -> Self {
        Self::Glob(pattern.into())
    }

    /// Compiles `pattern`; an invalid expression fails here, never per
    /// request.
    pub fn regex(pattern: &str) -> Result<Self, RouterError> {
        let re = Regex::new(pattern).map_err(|source| RouterError::InvalidRegex {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self::Regex(re))
    }

    /// Splits `pattern` into segments once, up front.
    ///
    /// Variable placeholders (`:name`) accept any single segment; the name
    /// is purely descriptive and is not captured. Unlike a glob `*`, a
    /// placeholder can never span more than one segment.
    pub fn variable(pattern: &str) -> Self {
        Self::Variable(segments(pattern).into_iter().map(str::to_owned).collect())
    }

    /// Whether `path` belongs to this pattern's family of paths.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(pattern) => path == pattern,
            Self::Glob(pattern) => glob_match(pattern, path),
            Self::Regex(re) => re.is_match(path),
            Self::Variable(pattern_segments) => {
                let path_segments: SmallVec<[&str; 8]> = path.split(SLASH).skip(1).collect();
                if path_segments.len() != pattern_segments.len() {
                    return false;
                }
                pattern_segments
                    .iter()
                    .zip(path_segments.iter())
                    .all(|(pat, seg)| pat.starts_with(COLON) || pat == seg)
            }
        }
    }
}

/// Ordered-substring glob match: split the pattern on `*`, then require
/// every literal part to occur in order, with the first and last parts
/// anchored unless the pattern starts or ends with `*`.
fn glob_match(pattern: &str, subject: &str) -> bool {
    if !pattern.contains(STAR) {
        return pattern == subject;
    }
    if pattern == "*" {
        return true;
    }

    let parts: SmallVec<[&str; 8]> = pattern.split(STAR).collect();
    let trailing_glob = pattern.ends_with(STAR);
    let last = parts.len() - 1;

    let mut subj = subject;
    for (i, part) in parts[..last].iter().enumerate() {
        match subj.find(part) {
            Some(idx) => {
                if i == 0 && idx != 0 {
                    return false;
                }
                subj = &subj[idx + part.len()..];
            }
            None => return false,
        }
    }

    trailing_glob || subj.ends_with(parts[last])
}
