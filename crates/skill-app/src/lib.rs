//! Skill Building app routing
//!
//! Declares the app's route table and installs it into a
//! [`skill_router::Router`] using the configured history mode.
//!
//! ```
//! use skill_app::{create_router, AppConfig, View};
//!
//! let router = create_router(&AppConfig::default()).unwrap();
//! let quiz = router.resolve("/quiz/42").unwrap();
//! assert_eq!(quiz.view(), Some(&View::Quiz));
//! assert_eq!(quiz.param("id"), Some("42"));
//! ```

pub mod config;
pub mod logging;
pub mod routes;
pub mod views;

pub use config::{AppConfig, HistoryKind};
pub use views::View;

use anyhow::{Context, Result};
use skill_router::Router;

/// Builds the route table and hands it to a new router
pub fn create_router(config: &AppConfig) -> Result<Router<View>> {
    let table = routes::route_table()
        .context("Failed to build route table")?
        .with_case_insensitive(config.router.case_insensitive);

    let router = Router::new(table, config.history_mode());
    tracing::info!(
        routes = router.routes().len(),
        history = %router.mode(),
        "router created"
    );
    Ok(router)
}
