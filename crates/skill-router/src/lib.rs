//! # Skill Router
//!
//! A small client-side routing engine for single-page applications:
//! - Static routes (`/courses`)
//! - Dynamic parameters (`/quiz/:id`)
//! - Optional parameters (`/quiz/:id?`)
//! - Named routes and path generation
//! - Web, hash and in-memory history modes
//!
//! ## Path Normalization
//!
//! Handles common user mistakes gracefully:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use skill_router::{HistoryMode, Route, RouteTable, Router};
//!
//! let table = RouteTable::new(vec![
//!     Route::new("/", "Home", "home")?,
//!     Route::new("/quiz/:id?", "Quiz", "quiz")?,
//! ])?;
//!
//! let router = Router::new(table, HistoryMode::web("/"));
//! let resolved = router.resolve("/quiz/42")?;
//! assert_eq!(resolved.name(), Some("Quiz"));
//! assert_eq!(resolved.param("id"), Some("42"));
//! # Ok::<(), skill_router::RouteError>(())
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod history;
pub mod path;
pub mod route;
mod router;
mod table;

pub use error::{Result, RouteError};
pub use history::{History, HistoryMode};
pub use path::{is_valid_path, normalize_path, Location};
pub use route::{Params, PatternSegment, Route, RoutePattern};
pub use router::{NavigationTarget, Resolved, Router};
pub use table::{RouteMatch, RouteTable};
