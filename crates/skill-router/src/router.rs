/// The routing engine: a route table bound to a history
use serde::Serialize;

use crate::error::Result;
use crate::history::{History, HistoryMode};
use crate::path::Location;
use crate::route::{Params, Route};
use crate::table::{RouteMatch, RouteTable};

/// Where to navigate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A path, optionally with `?query` and `#hash`
    Path(String),
    /// A named route with parameters
    Named {
        name: String,
        params: Params,
        query: Vec<(String, String)>,
        hash: Option<String>,
    },
}

impl NavigationTarget {
    pub fn path(path: impl Into<String>) -> Self {
        NavigationTarget::Path(path.into())
    }

    /// Named target without parameters
    pub fn named(name: impl Into<String>) -> Self {
        NavigationTarget::Named {
            name: name.into(),
            params: Params::new(),
            query: Vec::new(),
            hash: None,
        }
    }

    /// Adds a route parameter (ignored for path targets)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NavigationTarget::Named { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }
        self
    }

    /// Adds a query pair (ignored for path targets)
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NavigationTarget::Named { query, .. } = &mut self {
            query.push((key.into(), value.into()));
        }
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        NavigationTarget::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        NavigationTarget::Path(path)
    }
}

/// A location together with the route it matched, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<V> {
    pub location: Location,
    pub matched: Option<RouteMatch<V>>,
}

impl<V> Resolved<V> {
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    /// Name of the matched route
    pub fn name(&self) -> Option<&str> {
        self.matched.as_ref().map(RouteMatch::name)
    }

    pub fn view(&self) -> Option<&V> {
        self.matched.as_ref().map(RouteMatch::view)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.matched.as_ref().and_then(|m| m.param(name))
    }
}

/// Client-side router
///
/// Owns the route table for the lifetime of the session, tracks the
/// current route and records navigation in a [`History`].
///
/// # Examples
///
/// ```
/// use skill_router::{HistoryMode, NavigationTarget, Route, RouteTable, Router};
///
/// let table = RouteTable::new(vec![
///     Route::new("/", "Home", "home").unwrap(),
///     Route::new("/quiz/:id?", "Quiz", "quiz").unwrap(),
/// ])
/// .unwrap();
///
/// let mut router = Router::new(table, HistoryMode::memory("/"));
/// assert_eq!(router.current_name(), Some("Home"));
///
/// router.push("/quiz/42").unwrap();
/// assert_eq!(router.current().param("id"), Some("42"));
///
/// router.push(NavigationTarget::named("Quiz")).unwrap();
/// assert_eq!(router.current().location.path, "/quiz");
///
/// router.back();
/// assert_eq!(router.current().param("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct Router<V> {
    table: RouteTable<V>,
    history: History,
    current: Resolved<V>,
}

impl<V: Clone> Router<V> {
    /// Creates a router positioned at `/`
    pub fn new(table: RouteTable<V>, mode: HistoryMode) -> Self {
        Self::with_initial(table, mode, Location::default())
    }

    /// Creates a router positioned at `initial`
    pub fn with_initial(table: RouteTable<V>, mode: HistoryMode, initial: Location) -> Self {
        let current = resolve_location(&table, initial.clone());
        tracing::debug!(
            routes = table.len(),
            history = %mode,
            location = %initial,
            matched = ?current.name(),
            "router initialized"
        );
        Self {
            table,
            history: History::new(mode, initial),
            current,
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn routes(&self) -> &[Route<V>] {
        self.table.routes()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> &HistoryMode {
        self.history.mode()
    }

    pub fn current(&self) -> &Resolved<V> {
        &self.current
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.name()
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.table.has_route(name)
    }

    pub fn get_route_by_name(&self, name: &str) -> Option<&Route<V>> {
        self.table.get(name)
    }

    /// Turns a target into a location without navigating
    pub fn location_for(&self, target: &NavigationTarget) -> Result<Location> {
        match target {
            NavigationTarget::Path(path) => Ok(Location::parse(path)),
            NavigationTarget::Named {
                name,
                params,
                query,
                hash,
            } => {
                let path = self.table.path_for(name, params)?;
                let mut location = Location::new(&path);
                location.query = query.clone();
                location.hash = hash.clone().filter(|h| !h.is_empty());
                Ok(location)
            }
        }
    }

    /// Resolves a target without navigating
    ///
    /// Path targets never fail; they may resolve with no matched route.
    pub fn resolve(&self, target: impl Into<NavigationTarget>) -> Result<Resolved<V>> {
        let location = self.location_for(&target.into())?;
        Ok(resolve_location(&self.table, location))
    }

    /// Resolves a URL in this router's history mode
    pub fn resolve_url(&self, url: &str) -> Resolved<V> {
        resolve_location(&self.table, self.history.mode().strip(url))
    }

    /// Renders the URL of a target in this router's history mode
    pub fn href(&self, target: impl Into<NavigationTarget>) -> Result<String> {
        let location = self.location_for(&target.into())?;
        Ok(self.history.mode().href(&location))
    }

    /// Navigates to a target, adding a history entry
    pub fn push(&mut self, target: impl Into<NavigationTarget>) -> Result<&Resolved<V>> {
        self.navigate(target.into(), false)
    }

    /// Navigates to a target, replacing the current history entry
    pub fn replace(&mut self, target: impl Into<NavigationTarget>) -> Result<&Resolved<V>> {
        self.navigate(target.into(), true)
    }

    fn navigate(&mut self, target: NavigationTarget, replace: bool) -> Result<&Resolved<V>> {
        let resolved = self.resolve(target)?;

        if resolved.location == self.current.location {
            tracing::debug!(location = %resolved.location, "navigation to current location ignored");
            return Ok(&self.current);
        }

        tracing::debug!(
            from = %self.current.location,
            to = %resolved.location,
            route = ?resolved.name(),
            replace,
            "navigating"
        );

        if replace {
            self.history.replace(resolved.location.clone());
        } else {
            self.history.push(resolved.location.clone());
        }
        self.current = resolved;
        Ok(&self.current)
    }

    /// Moves through history; returns `None` when the move is out of range
    pub fn go(&mut self, delta: isize) -> Option<&Resolved<V>> {
        let location = self.history.go(delta)?.clone();
        self.current = resolve_location(&self.table, location);
        Some(&self.current)
    }

    pub fn back(&mut self) -> Option<&Resolved<V>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Resolved<V>> {
        self.go(1)
    }
}

fn resolve_location<V: Clone>(table: &RouteTable<V>, location: Location) -> Resolved<V> {
    let matched = table.match_path(&location.path);
    if matched.is_none() {
        tracing::debug!(path = %location.path, "no route matched");
    }
    Resolved { location, matched }
}
