use std::fmt;

/// Routing error
///
/// The only two failure modes the router surfaces. Everything else —
/// a path that matches no route, a `build_url` call with an unknown
/// route name — is a normal result, not an error (see
/// [`RouteMatch::NotFound`](crate::router::RouteMatch) and the
/// `build_url` passthrough behavior).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A route with this name is already registered
    ///
    /// Raised by registration; the table is left unchanged (the first
    /// registration wins).
    DuplicateRoute {
        /// The colliding route name
        name: String,
    },
    /// A URL was built for a parameterized route without its arguments
    ///
    /// Raised by `build_url` when the route declares path parameters but
    /// the supplied arguments are absent or incomplete. `expected` lists
    /// every declared parameter name in declaration order.
    MissingArgs {
        /// The route being built
        route: String,
        /// Declared parameter names, in declaration order
        expected: Vec<String>,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::DuplicateRoute { name } => {
                write!(f, "route '{}' is already registered", name)
            }
            RouterError::MissingArgs { route, expected } => {
                write!(
                    f,
                    "cannot build URL for route '{}': missing path arguments ({})",
                    route,
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}
