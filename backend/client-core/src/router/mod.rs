//! Path-to-page routing with guard redirects.
//!
//! Three paths map to three pages. `/` is protected; `/signup` and
//! `/login` bounce signed-in users to `/`. A guard redirect always
//! replaces the current history entry.

pub mod guard;
pub mod history;
pub mod route;

pub use guard::Guard;
pub use history::History;
pub use route::{DASHBOARD_PATH, LOGIN_PATH, Route, SIGNUP_PATH};

use crate::error::router::RouterError;

use log::debug;

/// Guards can chain (e.g. `/login` → `/` → `/login` if the flag flips); more
/// hops than this is a loop.
const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect { to: &'static str, replace: bool },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub replace: bool,
}

impl NavigateOptions {
    pub const PUSH: Self = Self { replace: false };
    pub const REPLACE: Self = Self { replace: true };
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    history: History,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what `path` renders for the given auth flag.
    pub fn resolve(path: &str, is_authenticated: bool) -> Resolution {
        let route = Route::from_path(path);
        match route.guard().and_then(|guard| guard.check(is_authenticated)) {
            Some(to) => Resolution::Redirect { to, replace: true },
            None => Resolution::Render(route),
        }
    }

    /// Navigate to `path`, following guard redirects, and return the
    /// route that ends up rendered.
    pub fn navigate(
        &mut self,
        path: &str,
        options: NavigateOptions,
        is_authenticated: bool,
    ) -> Result<Route, RouterError> {
        if !path.starts_with('/') {
            return Err(RouterError::invalid_path(path));
        }

        if options.replace {
            self.history.replace(path);
        } else {
            self.history.push(path);
        }

        self.settle(path, is_authenticated)
    }

    /// Re-run the guards for the current entry, e.g. after the auth flag
    /// changed. An empty history starts at `/`.
    pub fn refresh(&mut self, is_authenticated: bool) -> Result<Route, RouterError> {
        let current = self.current_path().to_string();
        if self.history.current().is_none() {
            self.history.push(current.as_str());
        }
        self.settle(&current, is_authenticated)
    }

    /// Go back one entry and resolve it.
    pub fn back(&mut self, is_authenticated: bool) -> Result<Option<Route>, RouterError> {
        let Some(previous) = self.history.back().map(str::to_string) else {
            return Ok(None);
        };
        self.settle(&previous, is_authenticated).map(Some)
    }

    pub fn current_path(&self) -> &str {
        self.history.current().unwrap_or(DASHBOARD_PATH)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn settle(&mut self, path: &str, is_authenticated: bool) -> Result<Route, RouterError> {
        let mut target = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            match Self::resolve(&target, is_authenticated) {
                Resolution::Render(route) => return Ok(route),
                Resolution::Redirect { to, replace } => {
                    debug!("Guard redirect {target} -> {to}");
                    if replace {
                        self.history.replace(to);
                    } else {
                        self.history.push(to);
                    }
                    target = to.to_string();
                }
            }
        }

        Err(RouterError::redirect_loop(path, MAX_REDIRECTS))
    }
}
