//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Parse pattern strings into segments (literal, parameter, wildcard)
//! - Match a concrete path, binding parameter values
//! - Rank patterns by specificity
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - No regex to guarantee O(n) matching
//! - A wildcard segment is only valid as the final segment
//! - Empty path segments (trailing or doubled slashes) are ignored

use std::cmp::Ordering;

use thiserror::Error;

/// Error raised when a pattern string cannot be compiled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must start with '/': '{0}'")]
    MissingLeadingSlash(String),

    #[error("empty parameter name in pattern '{0}'")]
    EmptyParamName(String),

    #[error("wildcard segment must be the final segment in pattern '{0}'")]
    WildcardNotLast(String),

    #[error("malformed braces in segment '{segment}' of pattern '{pattern}'")]
    MalformedSegment { pattern: String, segment: String },
}

/// One compiled segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches the segment text exactly.
    Literal(String),
    /// Matches any single segment, binding it to the named parameter.
    Param(String),
    /// Matches the entire remaining path, binding it to the named parameter.
    Wildcard(String),
}

impl Segment {
    /// Specificity weight. Higher wins when two patterns match the same path.
    fn weight(&self) -> u8 {
        match self {
            Segment::Literal(_) => 3,
            Segment::Param(_) => 2,
            Segment::Wildcard(_) => 1,
        }
    }
}

/// Path parameters bound during a match.
///
/// Keyed by the parameter names declared in the pattern, e.g. `testID` in
/// `/test/{testID}`. Wildcard segments bind the remaining path (without a
/// leading slash).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a bound parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn push(&mut self, name: &str, value: String) {
        self.entries.push((name.to_string(), value));
    }
}

/// A compiled path pattern.
///
/// Syntax follows the axum 0.8 convention: literal segments (`/learn`),
/// named parameters (`/test/{testID}`), and a trailing wildcard
/// (`/{*path}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(seg) = segments.last() {
                // Nothing may follow a wildcard.
                if matches!(seg, Segment::Wildcard(_)) {
                    return Err(PatternError::WildcardNotLast(pattern.to_string()));
                }
            }
            segments.push(Self::parse_segment(pattern, part)?);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    fn parse_segment(pattern: &str, part: &str) -> Result<Segment, PatternError> {
        if let Some(inner) = part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            if let Some(name) = inner.strip_prefix('*') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(pattern.to_string()));
                }
                return Ok(Segment::Wildcard(name.to_string()));
            }
            if inner.is_empty() {
                return Err(PatternError::EmptyParamName(pattern.to_string()));
            }
            return Ok(Segment::Param(inner.to_string()));
        }
        if part.contains('{') || part.contains('}') {
            return Err(PatternError::MalformedSegment {
                pattern: pattern.to_string(),
                segment: part.to_string(),
            });
        }
        Ok(Segment::Literal(part.to_string()))
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern ends in a wildcard segment.
    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }

    /// Match a concrete path, binding parameters on success.
    ///
    /// Empty segments in `path` are ignored, so `/learn/` and `/learn`
    /// match the same patterns. Query strings and fragments are not part
    /// of a path and must be stripped by the caller.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = Params::new();

        let mut idx = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    if parts.get(idx) != Some(&expected.as_str()) {
                        return None;
                    }
                    idx += 1;
                }
                Segment::Param(name) => {
                    let value = parts.get(idx)?;
                    params.push(name, (*value).to_string());
                    idx += 1;
                }
                Segment::Wildcard(name) => {
                    // Binds everything left, including the empty remainder.
                    params.push(name, parts[idx..].join("/"));
                    idx = parts.len();
                }
            }
        }

        if idx == parts.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Compare two patterns by specificity.
    ///
    /// `Greater` means `self` is more specific and must be tried first.
    /// Segments are compared left to right (literal > parameter >
    /// wildcard); a pattern that ends is more specific than one that
    /// continues, so `/` outranks `/{*path}`.
    pub(crate) fn cmp_specificity(&self, other: &Self) -> Ordering {
        let mut lhs = self.segments.iter();
        let mut rhs = other.segments.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (Some(a), Some(b)) => match a.weight().cmp(&b.weight()) {
                    Ordering::Equal => continue,
                    ordering => return ordering,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        let pattern = PathPattern::parse("/learn").unwrap();
        assert_eq!(pattern.matches("/learn"), Some(Params::new()));
        assert!(pattern.matches("/learn/extra").is_none());
        assert!(pattern.matches("/Learn").is_none()); // Case sensitive
    }

    #[test]
    fn test_root_match() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/learn").is_none());
    }

    #[test]
    fn test_param_binding() {
        let pattern = PathPattern::parse("/test/{testID}").unwrap();
        let params = pattern.matches("/test/42").unwrap();
        assert_eq!(params.get("testID"), Some("42"));
        assert!(pattern.matches("/test").is_none());
        assert!(pattern.matches("/test/42/extra").is_none());
    }

    #[test]
    fn test_wildcard_binding() {
        let pattern = PathPattern::parse("/{*path}").unwrap();
        let params = pattern.matches("/foo/bar").unwrap();
        assert_eq!(params.get("path"), Some("foo/bar"));
        // Wildcard also matches the bare root with an empty remainder.
        let params = pattern.matches("/").unwrap();
        assert_eq!(params.get("path"), Some(""));
    }

    #[test]
    fn test_empty_segments_ignored() {
        let pattern = PathPattern::parse("/test/{testID}").unwrap();
        let params = pattern.matches("/test/42/").unwrap();
        assert_eq!(params.get("testID"), Some("42"));
        assert!(pattern.matches("//test//42").is_some());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PathPattern::parse("learn"),
            Err(PatternError::MissingLeadingSlash("learn".into()))
        );
        assert_eq!(
            PathPattern::parse("/test/{}"),
            Err(PatternError::EmptyParamName("/test/{}".into()))
        );
        assert_eq!(
            PathPattern::parse("/{*}"),
            Err(PatternError::EmptyParamName("/{*}".into()))
        );
        assert_eq!(
            PathPattern::parse("/{*path}/more"),
            Err(PatternError::WildcardNotLast("/{*path}/more".into()))
        );
        assert!(matches!(
            PathPattern::parse("/test/{open"),
            Err(PatternError::MalformedSegment { .. })
        ));
    }

    #[test]
    fn test_specificity_ordering() {
        let alias = PathPattern::parse("/test/404").unwrap();
        let param = PathPattern::parse("/test/{testID}").unwrap();
        let root = PathPattern::parse("/").unwrap();
        let wildcard = PathPattern::parse("/{*path}").unwrap();

        // Literal beats parameter in the same position.
        assert_eq!(alias.cmp_specificity(&param), Ordering::Greater);
        // Root beats the wildcard fallback.
        assert_eq!(root.cmp_specificity(&wildcard), Ordering::Greater);
        // Wildcard ranks below everything.
        assert_eq!(wildcard.cmp_specificity(&param), Ordering::Less);
    }
}
