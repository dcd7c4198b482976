/// Route module
///
/// Contains the `Route` record plus the pure parsing helpers it is built from.
use serde::Serialize;
use std::collections::BTreeMap;

pub mod parser;
pub mod pattern;

pub use parser::{calculate_priority, parse_pattern, RoutePattern};
pub use pattern::{classify_segment, is_valid_param_name, PatternSegment};

use crate::error::{Result, RouteError};
use crate::path::location::decode;

/// Parameters extracted from (or substituted into) a path
pub type Params = BTreeMap<String, String>;

/// A binding from a path pattern to a view and a unique name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<V> {
    /// Logical name used for programmatic navigation
    pub name: String,
    pub pattern: RoutePattern,
    /// The view rendered when this route matches
    pub view: V,
    /// Matching priority (lower = tried first)
    pub priority: usize,
    /// Arbitrary metadata (page titles, analytics keys, ...)
    pub meta: BTreeMap<String, String>,
}

impl<V> Route<V> {
    /// Creates a route, parsing `path` as a pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_router::Route;
    ///
    /// let route = Route::new("/quiz/:id?", "Quiz", "QuizView").unwrap();
    /// assert_eq!(route.path(), "/quiz/:id?");
    /// assert_eq!(route.pattern.optional_params, vec!["id"]);
    /// ```
    pub fn new(path: &str, name: impl Into<String>, view: V) -> Result<Self> {
        let pattern = parse_pattern(path)?;
        let priority = calculate_priority(&pattern);
        Ok(Route {
            name: name.into(),
            pattern,
            view,
            priority,
            meta: BTreeMap::new(),
        })
    }

    /// Canonical pattern text
    pub fn path(&self) -> &str {
        &self.pattern.source
    }

    /// Sets a metadata key-value pair
    ///
    /// ```
    /// use skill_router::Route;
    ///
    /// let route = Route::new("/courses", "Courses", ())
    ///     .unwrap()
    ///     .with_meta("title", "All courses");
    /// assert_eq!(route.get_meta("title"), Some("All courses"));
    /// assert_eq!(route.get_meta("missing"), None);
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Matches this route against a normalized path
    ///
    /// Optional parameters are tried consuming a segment first, then
    /// skipped, so `/quiz/:id?` matches both `/quiz` and `/quiz/42`.
    /// Parameter values are percent-decoded.
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments = crate::path::segments(path);

        fn match_segments(
            pattern: &[PatternSegment],
            path: &[&str],
            params: Params,
            case_insensitive: bool,
        ) -> Option<Params> {
            let Some((seg, rest)) = pattern.split_first() else {
                return path.is_empty().then_some(params);
            };

            match seg {
                PatternSegment::Optional(name) => {
                    let consumed = path.split_first().and_then(|(value, path_rest)| {
                        let mut with_value = params.clone();
                        with_value.insert(name.clone(), decode(value));
                        match_segments(rest, path_rest, with_value, case_insensitive)
                    });
                    consumed.or_else(|| match_segments(rest, path, params, case_insensitive))
                }
                PatternSegment::Required(name) => {
                    let (value, path_rest) = path.split_first()?;
                    let mut params = params;
                    params.insert(name.clone(), decode(value));
                    match_segments(rest, path_rest, params, case_insensitive)
                }
                PatternSegment::Static(text) => {
                    let (value, path_rest) = path.split_first()?;
                    let matches = if case_insensitive {
                        text.eq_ignore_ascii_case(value)
                    } else {
                        text == value
                    };
                    if !matches {
                        return None;
                    }
                    match_segments(rest, path_rest, params, case_insensitive)
                }
            }
        }

        match_segments(
            &self.pattern.segments,
            &path_segments,
            Params::new(),
            case_insensitive,
        )
    }

    /// Generates a concrete path by substituting parameters
    ///
    /// Missing optional parameters are omitted; a missing required one is
    /// an error. Parameters the pattern does not declare are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_router::{Params, Route};
    ///
    /// let route = Route::new("/quiz/:id?", "Quiz", ()).unwrap();
    /// assert_eq!(route.generate_path(&Params::new()).unwrap(), "/quiz");
    ///
    /// let params = Params::from([("id".to_string(), "42".to_string())]);
    /// assert_eq!(route.generate_path(&params).unwrap(), "/quiz/42");
    /// ```
    pub fn generate_path(&self, params: &Params) -> Result<String> {
        let segments = self
            .pattern
            .segments
            .iter()
            .filter_map(|seg| match seg {
                PatternSegment::Static(text) => Some(Ok(text.clone())),
                PatternSegment::Optional(name) => params
                    .get(name)
                    .filter(|v| !v.is_empty())
                    .map(|v| Ok(urlencoding::encode(v).into_owned())),
                PatternSegment::Required(name) => Some(
                    params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .map(|v| urlencoding::encode(v).into_owned())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name.clone(),
                            param: name.clone(),
                        }),
                ),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("/{}", segments.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> Route<()> {
        Route::new(path, "test", ()).unwrap()
    }

    #[test]
    fn test_root_matches_only_root() {
        let root = route("/");
        assert_eq!(root.matches("/", false), Some(Params::new()));
        assert_eq!(root.matches("/courses", false), None);
    }

    #[test]
    fn test_optional_backtracks_before_static() {
        let r = route("/quiz/:id?/review");
        assert_eq!(r.matches("/quiz/review", false), Some(Params::new()));
        let params = r.matches("/quiz/7/review", false).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
        assert_eq!(r.matches("/quiz/7", false), None);
    }

    #[test]
    fn test_case_insensitive_static() {
        let r = route("/courses");
        assert!(r.matches("/COURSES", false).is_none());
        assert!(r.matches("/COURSES", true).is_some());
    }

    #[test]
    fn test_decodes_param_values() {
        let r = route("/quiz/:id");
        let params = r.matches("/quiz/intro%20to%20rust", false).unwrap();
        assert_eq!(params["id"], "intro to rust");
    }

    #[test]
    fn test_plus_in_param_round_trips() {
        let r = route("/quiz/:id");
        let params = r.matches("/quiz/c++", false).unwrap();
        assert_eq!(params["id"], "c++");

        let generated = r.generate_path(&params).unwrap();
        assert_eq!(generated, "/quiz/c%2B%2B");
        assert_eq!(r.matches(&generated, false), Some(params));
    }

    #[test]
    fn test_generate_encodes_and_requires() {
        let r = route("/quiz/:id");
        let params = Params::from([("id".to_string(), "a b".to_string())]);
        assert_eq!(r.generate_path(&params).unwrap(), "/quiz/a%20b");

        let err = r.generate_path(&Params::new()).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParam {
                route: "test".to_string(),
                param: "id".to_string()
            }
        );
    }

    #[test]
    fn test_generate_root() {
        assert_eq!(route("/").generate_path(&Params::new()).unwrap(), "/");
    }
}
