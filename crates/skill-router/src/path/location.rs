/// An application location: normalized path, query pairs and hash fragment
use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalize_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Canonical path, always starting with `/`
    pub path: String,
    /// Decoded query pairs in the order they appear
    #[serde(default)]
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`
    #[serde(default)]
    pub hash: Option<String>,
}

impl Location {
    /// Creates a location for a bare path
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path).into_owned(),
            query: Vec::new(),
            hash: None,
        }
    }

    /// Parses `path[?query][#hash]`
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_router::Location;
    ///
    /// let loc = Location::parse("/quiz/42/?step=2#question-3");
    /// assert_eq!(loc.path, "/quiz/42");
    /// assert_eq!(loc.query_value("step"), Some("2"));
    /// assert_eq!(loc.hash.as_deref(), Some("question-3"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: normalize_path(path).into_owned(),
            query,
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        let hash = hash.trim_start_matches('#');
        self.hash = (!hash.is_empty()).then(|| hash.to_string());
        self
    }

    /// First value for a query key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders `path[?query][#hash]` with query pairs percent-encoded
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        urlencoding::encode(k).into_owned()
                    } else {
                        format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
                    }
                })
                .collect::<Vec<_>>()
                .join("&");
            out.push('?');
            out.push_str(&query);
        }

        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }

        out
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query(k), decode_query(v))
        })
        .collect()
}

/// Decodes a query key or value (`+` is a space)
fn decode_query(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}

/// Percent-decodes a path segment, keeping the raw text when it is not valid UTF-8
///
/// `+` is literal in paths.
pub(crate) fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
