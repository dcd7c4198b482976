/// Immutable, validated collection of routes
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::error::{Result, RouteError};
use crate::path::normalize_path;
use crate::route::{Params, Route};

/// A route paired with the parameters extracted from a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch<V> {
    pub route: Route<V>,
    pub params: Params,
}

impl<V> RouteMatch<V> {
    pub fn name(&self) -> &str {
        &self.route.name
    }

    pub fn view(&self) -> &V {
        &self.route.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table
///
/// Keeps routes in declaration order for listing, and a priority-sorted
/// index for matching. Names and paths are unique.
///
/// # Examples
///
/// ```
/// use skill_router::{Route, RouteTable};
///
/// let table = RouteTable::new(vec![
///     Route::new("/", "Home", "home").unwrap(),
///     Route::new("/quiz/:id?", "Quiz", "quiz").unwrap(),
/// ])
/// .unwrap();
///
/// let m = table.match_path("/quiz/42").unwrap();
/// assert_eq!(m.name(), "Quiz");
/// assert_eq!(m.param("id"), Some("42"));
/// assert!(table.match_path("/nonexistent").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    /// Indices into `routes`, sorted by priority, then by literal
    /// segment count descending (stable)
    match_order: Vec<usize>,
    by_name: HashMap<String, usize>,
    case_insensitive: bool,
}

impl<V: Clone> RouteTable<V> {
    /// Validates and indexes the routes
    pub fn new(routes: Vec<Route<V>>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(routes.len());
        {
            let mut seen_paths = HashSet::with_capacity(routes.len());
            for (idx, route) in routes.iter().enumerate() {
                if by_name.insert(route.name.clone(), idx).is_some() {
                    return Err(RouteError::DuplicateName(route.name.clone()));
                }
                if !seen_paths.insert(route.path()) {
                    return Err(RouteError::DuplicatePath(route.path().to_string()));
                }
            }
        }

        let mut match_order: Vec<usize> = (0..routes.len()).collect();
        match_order.sort_by_key(|&idx| {
            let route = &routes[idx];
            (route.priority, Reverse(route.pattern.static_segments()))
        });

        Ok(Self {
            routes,
            match_order,
            by_name,
            case_insensitive: false,
        })
    }

    /// Configures case sensitivity of static segments
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Routes in declaration order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Route<V>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// Routes are tried in priority order (static before dynamic); ties
    /// keep declaration order.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<V>> {
        let normalized = normalize_path(path);

        self.match_order.iter().find_map(|&idx| {
            let route = &self.routes[idx];
            tracing::trace!(route = %route.name, pattern = %route.path(), path = %normalized, "trying route");
            route
                .matches(&normalized, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                })
        })
    }

    /// Generates the path of a named route
    ///
    /// ```
    /// use skill_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::new(vec![Route::new("/quiz/:id?", "Quiz", ()).unwrap()]).unwrap();
    /// assert_eq!(table.path_for_params("Quiz", &[("id", "7")]).unwrap(), "/quiz/7");
    /// assert!(table.path_for_params("Missing", &[]).is_err());
    /// ```
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String> {
        self.get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?
            .generate_path(params)
    }

    /// Convenience form of [`RouteTable::path_for`] taking tuples
    pub fn path_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.path_for(name, &params)
    }
}
