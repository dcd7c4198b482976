// File: src/routes.rs
// Purpose: The application's route table

use skill_router::{Result, Route, RouteTable};

use crate::views::View;

pub const HOME: &str = "Home";
pub const COURSES: &str = "Courses";
pub const QUIZ: &str = "Quiz";
pub const SCENARIO: &str = "Scenario";

/// Declared routes, in order
///
/// | path         | name     | view     |
/// |--------------|----------|----------|
/// | `/`          | Home     | Home     |
/// | `/courses`   | Courses  | Courses  |
/// | `/quiz/:id?` | Quiz     | Quiz     |
/// | `/scenario`  | Scenario | Scenario |
pub fn routes() -> Result<Vec<Route<View>>> {
    Ok(vec![
        Route::new("/", HOME, View::Home)?.with_meta("title", "Skill Building"),
        Route::new("/courses", COURSES, View::Courses)?.with_meta("title", "Courses"),
        Route::new("/quiz/:id?", QUIZ, View::Quiz)?.with_meta("title", "Quiz"),
        Route::new("/scenario", SCENARIO, View::Scenario)?.with_meta("title", "Scenario"),
    ])
}

/// Validated table built from [`routes`]
pub fn route_table() -> Result<RouteTable<View>> {
    RouteTable::new(routes()?)
}
