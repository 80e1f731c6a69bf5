//! Application shell: boot-time session check, routing and page dispatch.
//!
//! After every action the current path is re-resolved against the auth
//! flag, so guards redirect as soon as signup, login or logout changes it.

use crate::api_client::ApiClient;
use crate::error::CoreError;
use crate::pages::{
    DashboardPage, DashboardView, LoginPage, LoginView, Navigation, SignupPage, SignupView,
};
use crate::router::{NavigateOptions, Route, Router};
use crate::session::SessionFile;
use crate::stores::{AuthStore, UserStore};

use common::RedactedSecret;

use log::{info, warn};

/// A user intent coming from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Update a form field by name (signup and login pages).
    SetField { name: String, value: String },
    Submit,
    Navigate(String),
    Back,
    NewKey,
    RotateKey,
    CopyKey,
    DeleteKey,
    VerifyKey,
    Refresh,
    Logout,
}

/// Side effect the front end has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// Put this text on the clipboard.
    Copy(String),
    /// The action does not apply to the current page.
    Ignored,
}

enum ActivePage {
    Signup(SignupPage),
    Login(LoginPage),
    Dashboard(DashboardPage),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Signup(SignupView),
    Login(LoginView),
    Dashboard(DashboardView),
    NotFound { path: String },
}

pub struct App {
    client: ApiClient,
    auth: AuthStore,
    user: UserStore,
    router: Router,
    session: Option<SessionFile>,
    page: Option<ActivePage>,
}

impl App {
    pub fn new(client: ApiClient, session: Option<SessionFile>) -> Self {
        Self {
            auth: AuthStore::new(client.clone()),
            user: UserStore::new(client.clone()),
            client,
            router: Router::new(),
            session,
            page: None,
        }
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn user(&self) -> &UserStore {
        &self.user
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Restore the saved cookie, run the session check, then route to
    /// `initial_path`.
    pub async fn boot(&mut self, initial_path: &str) -> Result<(), CoreError> {
        if let Some(session) = &self.session {
            match session.load() {
                Ok(Some(token)) => self.client.restore_token_cookie(&token),
                Ok(None) => {}
                // A corrupt session file only costs a fresh login.
                Err(e) => warn!("Ignoring unreadable session: {e}"),
            }
        }

        let token = self.token();
        self.auth.check_auth(token.as_ref()).await;

        self.navigate(initial_path, NavigateOptions::REPLACE).await
    }

    pub async fn navigate(&mut self, path: &str, options: NavigateOptions) -> Result<(), CoreError> {
        let is_authenticated = self.auth.snapshot().await.is_authenticated;
        let route = self.router.navigate(path, options, is_authenticated)?;
        self.show(route).await;
        Ok(())
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<Outcome, CoreError> {
        match action {
            Action::Navigate(path) => {
                self.navigate(&path, NavigateOptions::PUSH).await?;
                return Ok(Outcome::None);
            }
            Action::Back => {
                let is_authenticated = self.auth.snapshot().await.is_authenticated;
                if let Some(route) = self.router.back(is_authenticated)? {
                    self.show(route).await;
                }
                return Ok(Outcome::None);
            }
            _ => {}
        }

        let token = self.token();
        let mut navigation: Option<Navigation> = None;
        let mut outcome = Outcome::None;
        let mut auth_changed = false;

        match (&mut self.page, action) {
            (Some(ActivePage::Signup(page)), Action::SetField { name, value }) => {
                if !page.set_field(&name, &value) {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Login(page)), Action::SetField { name, value }) => {
                if !page.set_field(&name, &value) {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Signup(page)), Action::Submit) => {
                navigation = page.submit(&self.auth).await;
                auth_changed = true;
            }
            (Some(ActivePage::Login(page)), Action::Submit) => {
                navigation = page.submit(&self.auth).await;
                auth_changed = true;
            }
            (Some(ActivePage::Dashboard(page)), Action::NewKey) => {
                if !page.create_key(&self.user, token.as_ref()).await {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Dashboard(page)), Action::RotateKey) => {
                if !page.rotate_key(&self.user, token.as_ref()).await {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Dashboard(page)), Action::DeleteKey) => {
                if !page.delete_key(&self.user, token.as_ref()).await {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Dashboard(page)), Action::VerifyKey) => {
                if !page.verify_key(&self.user).await {
                    outcome = Outcome::Ignored;
                }
            }
            (Some(ActivePage::Dashboard(page)), Action::Refresh) => {
                page.mount(&self.user, token.as_ref()).await;
            }
            (Some(ActivePage::Dashboard(page)), Action::CopyKey) => {
                let state = self.user.snapshot().await;
                outcome = match page.copy_key(&state) {
                    Some(key) => Outcome::Copy(key),
                    None => Outcome::Ignored,
                };
            }
            (Some(ActivePage::Dashboard(page)), Action::Logout) => {
                navigation = Some(page.logout(&self.auth).await);
                auth_changed = true;
            }
            _ => outcome = Outcome::Ignored,
        }

        if auth_changed {
            self.sync_session();
        }

        match navigation {
            Some(navigation) => {
                let options = NavigateOptions {
                    replace: navigation.replace,
                };
                self.navigate(navigation.to, options).await?;
            }
            None => self.rerender().await?,
        }

        Ok(outcome)
    }

    pub async fn view(&self) -> View {
        let auth = self.auth.snapshot().await;
        if auth.is_checking_auth {
            return View::Loading;
        }

        match &self.page {
            None => View::Loading,
            Some(ActivePage::Signup(page)) => View::Signup(page.view(&auth)),
            Some(ActivePage::Login(page)) => View::Login(page.view(&auth)),
            Some(ActivePage::Dashboard(page)) => {
                View::Dashboard(page.view(&self.user.snapshot().await))
            }
            Some(ActivePage::NotFound(path)) => View::NotFound { path: path.clone() },
        }
    }

    /// The `token` cookie, read fresh for each handler.
    fn token(&self) -> Option<RedactedSecret> {
        self.client.token_cookie()
    }

    /// Re-run guards for the current path; switch pages if they redirect.
    async fn rerender(&mut self) -> Result<(), CoreError> {
        let is_authenticated = self.auth.snapshot().await.is_authenticated;
        let route = self.router.refresh(is_authenticated)?;
        if !self.is_showing(&route) {
            self.show(route).await;
        }
        Ok(())
    }

    fn is_showing(&self, route: &Route) -> bool {
        matches!(
            (&self.page, route),
            (Some(ActivePage::Signup(_)), Route::Signup)
                | (Some(ActivePage::Login(_)), Route::Login)
                | (Some(ActivePage::Dashboard(_)), Route::Dashboard)
        ) || matches!((&self.page, route), (Some(ActivePage::NotFound(a)), Route::NotFound(b)) if a == b)
    }

    /// Mount the page for `route`. Pages start with fresh local state.
    async fn show(&mut self, route: Route) {
        info!("Showing {}", route.path());
        let page = match route {
            Route::Signup => ActivePage::Signup(SignupPage::new()),
            Route::Login => ActivePage::Login(LoginPage::new()),
            Route::Dashboard => {
                let page = DashboardPage::new();
                let token = self.token();
                page.mount(&self.user, token.as_ref()).await;
                ActivePage::Dashboard(page)
            }
            Route::NotFound(path) => ActivePage::NotFound(path),
        };
        self.page = Some(page);
    }

    /// Mirror the jar's `token` cookie into the session file.
    fn sync_session(&self) {
        let Some(session) = &self.session else {
            return;
        };

        let result = match self.client.token_cookie() {
            Some(token) => session.save(&token),
            None => session.clear(),
        };

        if let Err(e) = result {
            warn!("Failed to persist session: {e}");
        }
    }
}
