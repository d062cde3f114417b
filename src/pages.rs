//! Page routing.
//!
//! The application has two routes. Each keeps a URL-style path so log lines and
//! the debug page read naturally.
//!
//! # Routes
//!
//! - [`Route::Home`] (`/`): title, illustration and the "Learn your fortune" button
//! - [`Route::Fortune`] (`/fortune`): the question wizard

/// Available routes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Route {
    /// Landing page.
    #[default]
    Home,

    /// Fortune wizard.
    Fortune,
}

impl Route {
    /// Path of this route.
    #[inline]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Fortune => "/fortune",
        }
    }

    /// Resolve a path to a route. Unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Self::Home),
            "/fortune" | "/fortune/" => Some(Self::Fortune),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Home, Route::Fortune] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_trailing_slash() {
        assert_eq!(Route::from_path("/fortune/"), Some(Route::Fortune));
    }

    #[test]
    fn test_route_unknown_path() {
        assert_eq!(Route::from_path("/answers"), None);
    }
}
