/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

pub mod location;
pub use location::Location;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use skill_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/quiz/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("courses")); // Missing leading /
/// assert!(!is_valid_path("/courses/")); // Trailing /
/// assert!(!is_valid_path("/quiz//42")); // Double //
/// assert!(!is_valid_path("/quiz\\42")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations),
/// `Cow::Owned` when normalization was needed.
///
/// Handles:
/// - Trailing slashes: `/quiz/` → `/quiz`
/// - Double slashes: `/quiz//42` → `/quiz/42`
/// - Backslashes: `\quiz\42` → `/quiz/42`
/// - Missing leading slash: `courses` → `/courses`
/// - Empty input: `""` → `/`
///
/// # Examples
///
/// ```
/// use skill_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/courses");
/// assert!(matches!(path, Cow::Borrowed("/courses")));
///
/// assert_eq!(normalize_path("/quiz/42/"), "/quiz/42");
/// assert_eq!(normalize_path("\\quiz\\42"), "/quiz/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(format!("/{}", normalized))
}

/// Splits a normalized path into its non-empty segments
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_valid() {
        assert!(is_valid_path("/"));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_collapses_everything() {
        assert_eq!(normalize_path("//quiz///42//"), "/quiz/42");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("scenario"), "/scenario");
    }

    #[test]
    fn test_segments_skip_empty() {
        assert_eq!(segments("/quiz/42"), vec!["quiz", "42"]);
        assert!(segments("/").is_empty());
    }
}
