/// Pattern parsing for route segments
///
/// Pure functional parsing of route path patterns (`/quiz/:id?`) into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
use serde::{Deserialize, Serialize};

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use skill_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("courses"), PatternSegment::Static("courses".into()));
/// assert_eq!(classify_segment(":id"), PatternSegment::Required("id".into()));
/// assert_eq!(classify_segment(":id?"), PatternSegment::Optional("id".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PatternSegment {
    /// Optional parameter: `:id?`
    Optional(String),
    /// Required parameter: `:id`
    Required(String),
    /// Static text segment
    Static(String),
}

impl PatternSegment {
    /// Parameter name, if this segment is dynamic
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Optional(name) | PatternSegment::Required(name) => Some(name),
            PatternSegment::Static(_) => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, PatternSegment::Static(_))
    }

    /// Renders the segment back into pattern syntax
    pub fn as_pattern(&self) -> String {
        match self {
            PatternSegment::Optional(name) => format!(":{}?", name),
            PatternSegment::Required(name) => format!(":{}", name),
            PatternSegment::Static(text) => text.clone(),
        }
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional param**: `:name?`
/// 2. **Required param**: `:name`
/// 3. **Static**: Any other text
///
/// Names are not validated here; see [`is_valid_param_name`].
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.strip_prefix(':') {
        Some(param) => match param.strip_suffix('?') {
            Some(name) => PatternSegment::Optional(name.to_string()),
            None => PatternSegment::Required(param.to_string()),
        },
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parameter names are identifiers: `[A-Za-z_][A-Za-z0-9_]*`
///
/// # Examples
///
/// ```
/// use skill_router::route::pattern::is_valid_param_name;
///
/// assert!(is_valid_param_name("id"));
/// assert!(is_valid_param_name("course_id2"));
/// assert!(!is_valid_param_name(""));
/// assert!(!is_valid_param_name("2id"));
/// assert!(!is_valid_param_name("id?"));
/// ```
pub fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
