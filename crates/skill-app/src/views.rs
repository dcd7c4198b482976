// File: src/views.rs
// Purpose: The views the route table can mount

use serde::{Deserialize, Serialize};
use std::fmt;

/// A renderable view of the Skill Building app
///
/// Views are referenced by identity only; their rendering lives in the
/// front-end bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    Courses,
    Quiz,
    Scenario,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Courses, View::Quiz, View::Scenario];

    /// Component name as registered in the front end
    pub fn component(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Courses => "Courses",
            View::Quiz => "Quiz",
            View::Scenario => "Scenario",
        }
    }

    /// Module the component is loaded from
    ///
    /// Pages live under `views/`, embeddable widgets under `components/`.
    pub fn module(&self) -> &'static str {
        match self {
            View::Home => "views/Home",
            View::Courses => "views/Courses",
            View::Quiz => "components/Quiz",
            View::Scenario => "components/Scenario",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modules_are_distinct() {
        let mut modules: Vec<_> = View::ALL.iter().map(View::module).collect();
        modules.sort_unstable();
        modules.dedup();
        assert_eq!(modules.len(), View::ALL.len());
    }

    #[test]
    fn test_serializes_as_component_name() {
        assert_eq!(serde_json::to_string(&View::Quiz).unwrap(), "\"Quiz\"");
        for view in View::ALL {
            assert_eq!(view.to_string(), view.component());
        }
    }
}
