/// History modes and the in-process navigation stack
///
/// A history mode decides how an application [`Location`] is written into
/// a browser URL (`href`) and read back out of one (`strip`). The
/// [`History`] stack records visited locations and a cursor for
/// back/forward navigation.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::{normalize_path, Location};

/// How application paths are encoded in URLs
///
/// # Examples
///
/// ```
/// use skill_router::{HistoryMode, Location};
///
/// let web = HistoryMode::web("/app/");
/// assert_eq!(web.href(&Location::new("/quiz/42")), "/app/quiz/42");
///
/// let hash = HistoryMode::hash("/");
/// assert_eq!(hash.href(&Location::new("/quiz/42")), "/#/quiz/42");
/// assert_eq!(hash.strip("https://example.com/#/courses").path, "/courses");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "history", rename_all = "lowercase")]
pub enum HistoryMode {
    /// HTML5 history: paths live in the URL path
    Web {
        #[serde(default)]
        base: String,
    },
    /// Paths live in the URL fragment after `#`
    Hash {
        #[serde(default)]
        base: String,
    },
    /// No URL at all; used for tests and non-browser hosts
    Memory {
        #[serde(default)]
        base: String,
    },
}

impl HistoryMode {
    pub fn web(base: &str) -> Self {
        HistoryMode::Web {
            base: normalize_base(base),
        }
    }

    pub fn hash(base: &str) -> Self {
        HistoryMode::Hash {
            base: normalize_base(base),
        }
    }

    pub fn memory(base: &str) -> Self {
        HistoryMode::Memory {
            base: normalize_base(base),
        }
    }

    /// Normalized base: empty for the site root, otherwise `/segment...`
    pub fn base(&self) -> &str {
        match self {
            HistoryMode::Web { base } | HistoryMode::Hash { base } | HistoryMode::Memory { base } => {
                base
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HistoryMode::Web { .. } => "web",
            HistoryMode::Hash { .. } => "hash",
            HistoryMode::Memory { .. } => "memory",
        }
    }

    /// Renders a location as a URL for this mode
    pub fn href(&self, location: &Location) -> String {
        let base = normalize_base(self.base());
        match self {
            HistoryMode::Hash { .. } => format!("{}/#{}", base, location.full_path()),
            HistoryMode::Web { .. } | HistoryMode::Memory { .. } => {
                if location.path == "/" && !base.is_empty() {
                    // `/app` rather than `/app/`
                    format!("{}{}", base, &location.full_path()[1..])
                } else {
                    format!("{}{}", base, location.full_path())
                }
            }
        }
    }

    /// Reads the application location out of a URL or path
    ///
    /// Accepts absolute URLs (`scheme://host/...`). The base is stripped
    /// when present; in hash mode the fragment carries the location.
    pub fn strip(&self, url: &str) -> Location {
        let without_origin = strip_origin(url);
        let base = normalize_base(self.base());

        if let HistoryMode::Hash { .. } = self {
            if let Some((_, fragment)) = without_origin.split_once('#') {
                return Location::parse(fragment);
            }
        }

        Location::parse(strip_base(without_origin, &base))
    }
}

impl Default for HistoryMode {
    fn default() -> Self {
        HistoryMode::web("/")
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        write!(f, "{} (base: {})", self.kind(), if base.is_empty() { "/" } else { base })
    }
}

/// `"/"`, `""` → `""`; `"app/"` → `"/app"`
fn normalize_base(base: &str) -> String {
    let normalized = normalize_path(base);
    if normalized == "/" {
        String::new()
    } else {
        normalized.into_owned()
    }
}

fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => match rest.find(|c: char| c == '/' || c == '?' || c == '#') {
            Some(idx) => &rest[idx..],
            None => "/",
        },
        None => url,
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
        _ => path,
    }
}

/// Navigation stack with a cursor
///
/// ```
/// use skill_router::{History, HistoryMode, Location};
///
/// let mut history = History::new(HistoryMode::memory("/"), Location::new("/"));
/// history.push(Location::new("/courses"));
/// history.push(Location::new("/quiz/1"));
///
/// assert_eq!(history.back().unwrap().path, "/courses");
/// assert_eq!(history.forward().unwrap().path, "/quiz/1");
/// assert!(history.forward().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct History {
    mode: HistoryMode,
    entries: Vec<Location>,
    position: usize,
}

impl History {
    pub fn new(mode: HistoryMode, initial: Location) -> Self {
        Self {
            mode,
            entries: vec![initial],
            position: 0,
        }
    }

    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.position]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Appends a location, discarding any forward entries
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position += 1;
        tracing::debug!(position = self.position, url = %self.mode.href(self.location()), "history push");
    }

    /// Overwrites the current entry
    pub fn replace(&mut self, location: Location) {
        self.entries[self.position] = location;
        tracing::debug!(position = self.position, url = %self.mode.href(self.location()), "history replace");
    }

    /// Moves the cursor by `delta`; out-of-range moves leave it unchanged
    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let target = self
            .position
            .checked_add_signed(delta)
            .filter(|&t| delta != 0 && t < self.entries.len());
        let Some(target) = target else {
            tracing::debug!(delta, position = self.position, "history move ignored");
            return None;
        };
        self.position = target;
        tracing::debug!(delta, position = self.position, "history move");
        Some(self.location())
    }

    pub fn back(&mut self) -> Option<&Location> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Location> {
        self.go(1)
    }
}
