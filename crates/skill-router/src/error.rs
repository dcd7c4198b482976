/// Errors raised while building a route table or resolving a named target
///
/// Unmatched paths are not errors: they resolve to a location with no
/// matched route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
}

pub type Result<T> = std::result::Result<T, RouteError>;
