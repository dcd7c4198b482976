/// Pattern parsing and priority calculation for routes
///
/// Pure functional parsers that transform path patterns like `/quiz/:id?`
/// into typed segments.
use serde::{Deserialize, Serialize};

use super::pattern::{classify_segment, is_valid_param_name, PatternSegment};
use crate::error::{Result, RouteError};

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePattern {
    /// Canonical pattern text, e.g. `/quiz/:id?`
    pub source: String,
    pub segments: Vec<PatternSegment>,
    /// All parameter names in order of appearance
    pub params: Vec<String>,
    /// Subset of `params` that may be omitted
    pub optional_params: Vec<String>,
}

impl RoutePattern {
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of literal segments
    pub fn static_segments(&self) -> usize {
        self.segments.iter().filter(|seg| !seg.is_dynamic()).count()
    }

    pub fn required_params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            PatternSegment::Required(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Internal state accumulator for fold-based parsing
#[derive(Default)]
struct ParseState {
    segments: Vec<PatternSegment>,
    params: Vec<String>,
    optional_params: Vec<String>,
}

impl ParseState {
    fn with_segment(mut self, pattern: &str, segment: PatternSegment) -> Result<Self> {
        if let Some(name) = segment.param_name() {
            if !is_valid_param_name(name) {
                return Err(invalid(pattern, format!("bad parameter name `{}`", name)));
            }
            if self.params.iter().any(|p| p == name) {
                return Err(invalid(pattern, format!("parameter `{}` appears twice", name)));
            }
            self.params.push(name.to_string());
            if matches!(segment, PatternSegment::Optional(_)) {
                self.optional_params.push(name.to_string());
            }
        }
        self.segments.push(segment);
        Ok(self)
    }

    fn finalize(self) -> RoutePattern {
        let source = if self.segments.is_empty() {
            "/".to_string()
        } else {
            self.segments
                .iter()
                .map(|seg| format!("/{}", seg.as_pattern()))
                .collect()
        };

        RoutePattern {
            source,
            segments: self.segments,
            params: self.params,
            optional_params: self.optional_params,
        }
    }
}

fn invalid(pattern: &str, reason: impl Into<String>) -> RouteError {
    RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

/// Parses a route pattern into typed segments (pure function)
///
/// Empty segments are dropped, so `/courses/` and `/courses` parse to the
/// same pattern.
///
/// # Examples
///
/// ```
/// use skill_router::route::parser::parse_pattern;
///
/// let pattern = parse_pattern("/quiz/:id?").unwrap();
/// assert_eq!(pattern.source, "/quiz/:id?");
/// assert_eq!(pattern.params, vec!["id"]);
/// assert_eq!(pattern.optional_params, vec!["id"]);
///
/// assert!(parse_pattern("quiz").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<RoutePattern> {
    if !pattern.starts_with('/') {
        return Err(invalid(pattern, "must start with `/`"));
    }

    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, segment| {
            state.with_segment(pattern, classify_segment(segment))
        })
        .map(ParseState::finalize)
}

/// Calculates route priority for matching order (pure function)
///
/// Lower number = higher priority (matched first).
///
/// 1. **Static routes** → 0
/// 2. **Dynamic routes** → dynamic count + depth, plus 1 when every
///    parameter is required
///
/// # Examples
///
/// ```
/// use skill_router::route::parser::{calculate_priority, parse_pattern};
///
/// assert_eq!(calculate_priority(&parse_pattern("/courses").unwrap()), 0);
/// assert_eq!(calculate_priority(&parse_pattern("/quiz/:id").unwrap()), 4);
/// assert_eq!(calculate_priority(&parse_pattern("/quiz/:id?").unwrap()), 3);
/// ```
pub fn calculate_priority(pattern: &RoutePattern) -> usize {
    if pattern.is_static() {
        return 0;
    }

    let optional_bonus = if pattern.optional_params.is_empty() { 1 } else { 0 };
    pattern.params.len() + pattern.depth() + optional_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = parse_pattern("/").unwrap();
        assert_eq!(pattern.source, "/");
        assert!(pattern.segments.is_empty());
        assert!(pattern.is_static());
    }

    #[test]
    fn test_parse_static() {
        let pattern = parse_pattern("/courses/").unwrap();
        assert_eq!(pattern.source, "/courses");
        assert_eq!(pattern.depth(), 1);
    }

    #[test]
    fn test_parse_required_and_optional() {
        let pattern = parse_pattern("/courses/:course/lessons/:lesson?").unwrap();
        assert_eq!(pattern.params, vec!["course", "lesson"]);
        assert_eq!(pattern.optional_params, vec!["lesson"]);
        assert_eq!(pattern.required_params().collect::<Vec<_>>(), vec!["course"]);
    }

    #[test]
    fn test_rejects_missing_leading_slash() {
        let err = parse_pattern("quiz/:id").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn test_rejects_bad_param_name() {
        assert!(parse_pattern("/quiz/:").is_err());
        assert!(parse_pattern("/quiz/:?").is_err());
        assert!(parse_pattern("/quiz/:1st").is_err());
    }

    #[test]
    fn test_rejects_duplicate_param() {
        let err = parse_pattern("/a/:id/b/:id?").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route pattern `/a/:id/b/:id?`: parameter `id` appears twice"
        );
    }

    #[test]
    fn test_priority_orders_static_first() {
        let fixed = calculate_priority(&parse_pattern("/quiz/new").unwrap());
        let optional = calculate_priority(&parse_pattern("/quiz/:id?").unwrap());
        let required = calculate_priority(&parse_pattern("/quiz/:id").unwrap());
        assert!(fixed < optional);
        assert!(optional < required);
    }

    #[test]
    fn test_static_segments() {
        assert_eq!(parse_pattern("/").unwrap().static_segments(), 0);
        assert_eq!(parse_pattern("/quiz/:id").unwrap().static_segments(), 1);
        assert_eq!(parse_pattern("/:x/:y?").unwrap().static_segments(), 0);
    }
}
