//! Page controllers.
//!
//! A controller owns the page-local state (form fields, transient button
//! flags), calls store methods from its handlers, and builds a plain view
//! model from store snapshots. Rendering the view is the front end's job.

pub mod dashboard;
pub mod login;
pub mod signup;

pub use dashboard::{DashboardPage, DashboardView, KeyPanel};
pub use login::{LoginPage, LoginView};
pub use signup::{SignupPage, SignupView};

use models::ModelError;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How long the copy and rotate buttons stay in their busy state.
pub const TRANSIENT_FLAG_DURATION: Duration = Duration::from_secs(1);

/// Where a handler wants to go next. Page navigation always replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: &'static str,
    pub replace: bool,
}

impl Navigation {
    pub const fn replace(to: &'static str) -> Self {
        Self { to, replace: true }
    }
}

/// A client-side form constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl From<&ModelError> for FieldError {
    fn from(error: &ModelError) -> Self {
        Self {
            field: error.field(),
            message: error.display_message().to_string(),
        }
    }
}

/// Alert banner shown above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub description: String,
}

/// A link to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub to: &'static str,
}

/// Boolean that switches itself back off after [`TRANSIENT_FLAG_DURATION`].
#[derive(Debug, Clone, Default)]
pub struct TransientFlag {
    active: Arc<AtomicBool>,
}

impl TransientFlag {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Raise the flag and schedule its reset. Returns `false` if it was
    /// already raised.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self) -> bool {
        if self.active.swap(true, Ordering::SeqCst) {
            return false;
        }

        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(TRANSIENT_FLAG_DURATION).await;
            active.store(false, Ordering::SeqCst);
        });
        true
    }
}

/// Update a form field by its `name` attribute.
pub(crate) fn set_named_field(
    fields: &mut [(&'static str, &mut String)],
    name: &str,
    value: &str,
) -> bool {
    match fields.iter_mut().find(|(field, _)| *field == name) {
        Some((_, slot)) => {
            **slot = value.to_string();
            true
        }
        None => false,
    }
}
