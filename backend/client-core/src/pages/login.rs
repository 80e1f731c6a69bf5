use crate::pages::{FieldError, Navigation, PageLink, set_named_field};
use crate::router::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::stores::{AuthState, AuthStore};

use models::LoginRequest;

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login view. Store status and message are not shown on this page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub title: &'static str,
    pub description: &'static str,
    pub field_error: Option<FieldError>,
    pub email: String,
    pub password_length: usize,
    pub is_loading: bool,
    pub link: PageLink,
}

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    form: LoginForm,
    field_error: Option<FieldError>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let form = &mut self.form;
        set_named_field(
            &mut [("email", &mut form.email), ("password", &mut form.password)],
            name,
            value,
        )
    }

    pub async fn submit(&mut self, auth: &AuthStore) -> Option<Navigation> {
        let request = LoginRequest::new(self.form.email.as_str(), self.form.password.as_str());
        if let Err(e) = request.validate() {
            debug!("Login form rejected: {e}");
            self.field_error = Some(FieldError::from(&e));
            return None;
        }
        self.field_error = None;

        auth.login(&request.email, &request.password).await;

        auth.snapshot()
            .await
            .is_authenticated
            .then_some(Navigation::replace(DASHBOARD_PATH))
    }

    pub fn view(&self, auth: &AuthState) -> LoginView {
        LoginView {
            title: "Log in",
            description: "Enter your credentials to access your account",
            field_error: self.field_error.clone(),
            email: self.form.email.clone(),
            password_length: self.form.password.chars().count(),
            is_loading: auth.is_loading,
            link: PageLink {
                prompt: "Don't have an account?",
                label: "Sign up",
                to: SIGNUP_PATH,
            },
        }
    }
}
