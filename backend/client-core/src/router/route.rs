use crate::router::guard::Guard;

pub const DASHBOARD_PATH: &str = "/";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";

/// A page the router can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Signup,
    Login,
    NotFound(String),
}

impl Route {
    /// Match a path against the route table.
    ///
    /// Query strings and fragments are ignored, and so is one trailing slash.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let normalized = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        match normalized {
            DASHBOARD_PATH => Route::Dashboard,
            SIGNUP_PATH => Route::Signup,
            LOGIN_PATH => Route::Login,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => DASHBOARD_PATH,
            Route::Signup => SIGNUP_PATH,
            Route::Login => LOGIN_PATH,
            Route::NotFound(path) => path,
        }
    }

    /// Guard wrapping this route's page, if any.
    pub fn guard(&self) -> Option<Guard> {
        match self {
            Route::Dashboard => Some(Guard::Protected),
            Route::Signup | Route::Login => Some(Guard::RedirectAuthenticated),
            Route::NotFound(_) => None,
        }
    }
}
