use crate::pages::{Alert, FieldError, Navigation, PageLink, set_named_field};
use crate::router::{DASHBOARD_PATH, LOGIN_PATH};
use crate::stores::{AuthState, AuthStore};

use models::SignupRequest;

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupView {
    pub title: &'static str,
    pub description: &'static str,
    pub alert: Option<Alert>,
    pub field_error: Option<FieldError>,
    pub name: String,
    pub email: String,
    /// Number of password characters typed; the value itself is not shown.
    pub password_length: usize,
    pub is_loading: bool,
    pub link: PageLink,
}

#[derive(Debug, Clone, Default)]
pub struct SignupPage {
    form: SignupForm,
    field_error: Option<FieldError>,
}

impl SignupPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// Returns `false` for an unknown field name.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let form = &mut self.form;
        set_named_field(
            &mut [
                ("name", &mut form.name),
                ("email", &mut form.email),
                ("password", &mut form.password),
            ],
            name,
            value,
        )
    }

    /// Validate, call signup, and go to the dashboard if it succeeded.
    ///
    /// An invalid form never reaches the store.
    pub async fn submit(&mut self, auth: &AuthStore) -> Option<Navigation> {
        let request = SignupRequest::new(
            self.form.name.as_str(),
            self.form.email.as_str(),
            self.form.password.as_str(),
        );
        if let Err(e) = request.validate() {
            debug!("Signup form rejected: {e}");
            self.field_error = Some(FieldError::from(&e));
            return None;
        }
        self.field_error = None;

        auth.signup(&request.name, &request.email, &request.password)
            .await;

        auth.snapshot()
            .await
            .is_authenticated
            .then_some(Navigation::replace(DASHBOARD_PATH))
    }

    pub fn view(&self, auth: &AuthState) -> SignupView {
        let alert = auth.status.map(|status| Alert {
            title: status.title().to_string(),
            description: auth.message.clone().unwrap_or_default(),
        });

        SignupView {
            title: "Create an account",
            description: "Enter your information to create a new account",
            alert,
            field_error: self.field_error.clone(),
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            password_length: self.form.password.chars().count(),
            is_loading: auth.is_loading,
            link: PageLink {
                prompt: "Already have an account?",
                label: "Log in",
                to: LOGIN_PATH,
            },
        }
    }
}
