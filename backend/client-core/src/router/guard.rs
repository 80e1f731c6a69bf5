use crate::router::route::{DASHBOARD_PATH, LOGIN_PATH};

/// Conditional redirect wrapped around a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Only signed-in users; others go to the login page.
    Protected,
    /// Only signed-out users; others go to the dashboard.
    RedirectAuthenticated,
}

impl Guard {
    /// Target to redirect to (always with replace), or `None` to render.
    pub fn check(&self, is_authenticated: bool) -> Option<&'static str> {
        match (self, is_authenticated) {
            (Guard::Protected, false) => Some(LOGIN_PATH),
            (Guard::RedirectAuthenticated, true) => Some(DASHBOARD_PATH),
            _ => None,
        }
    }
}
