use crate::pages::{Navigation, TransientFlag};
use crate::router::LOGIN_PATH;
use crate::stores::{AuthStore, UserState, UserStore};

use common::RedactedSecret;

use log::debug;

pub const PRODUCT_NAME: &str = "Finoxa API";
pub const DOCS_URL: &str = "https://finoxa-api.apidog.io/";
pub const EMPTY_KEY_TEXT: &str = "You have not generated any API keys yet.";

/// Characters of the key shown before the ellipsis.
pub const KEY_PREVIEW_LENGTH: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPanel {
    Empty {
        text: &'static str,
    },
    Key {
        preview: String,
        is_copying: bool,
        is_generating: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub product_name: &'static str,
    pub docs_url: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    /// "New Key" is disabled while a key exists.
    pub can_create_key: bool,
    pub key: KeyPanel,
    pub is_loading: bool,
    /// Result of the last "Verify" press. Store errors from other actions
    /// are never shown here.
    pub verification: Option<String>,
}

/// `preview` = first [`KEY_PREVIEW_LENGTH`] characters followed by `...`.
pub fn key_preview(api_key: &str) -> String {
    let head: String = api_key.chars().take(KEY_PREVIEW_LENGTH).collect();
    format!("{head}...")
}

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    is_copying: TransientFlag,
    is_generating: TransientFlag,
    verification: Option<String>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the user record when the page is shown.
    pub async fn mount(&self, user: &UserStore, token: Option<&RedactedSecret>) {
        user.get_user(token).await;
    }

    /// "New Key": only available while no key exists.
    ///
    /// Returns `false` when the action does not apply.
    pub async fn create_key(&mut self, user: &UserStore, token: Option<&RedactedSecret>) -> bool {
        if has_key(user).await {
            debug!("New Key ignored: a key already exists");
            return false;
        }
        self.verification = None;
        user.generate_api_key(token).await;
        true
    }

    /// Rotate the existing key. Ignored without a key, or while a rotation
    /// is still showing.
    pub async fn rotate_key(&mut self, user: &UserStore, token: Option<&RedactedSecret>) -> bool {
        if !has_key(user).await {
            debug!("Rotate ignored: no key to rotate");
            return false;
        }
        if !self.is_generating.trigger() {
            debug!("Rotate ignored: already generating");
            return false;
        }
        self.verification = None;
        user.generate_api_key(token).await;
        true
    }

    pub async fn delete_key(&mut self, user: &UserStore, token: Option<&RedactedSecret>) -> bool {
        if !has_key(user).await {
            debug!("Delete ignored: no key to delete");
            return false;
        }
        self.verification = None;
        user.delete_api_key(token).await;
        true
    }

    /// Check the current key and keep the outcome for the view.
    pub async fn verify_key(&mut self, user: &UserStore) -> bool {
        if !has_key(user).await {
            debug!("Verify ignored: no key to verify");
            return false;
        }
        user.verify_api_key().await;
        self.verification = user.snapshot().await.message;
        true
    }

    /// Full key for the clipboard, or `None` if there is no key or a copy
    /// was just made.
    pub fn copy_key(&self, user: &UserState) -> Option<String> {
        let api_key = user.api_key()?.to_string();
        self.is_copying.trigger().then_some(api_key)
    }

    /// Log out and go to the login page.
    pub async fn logout(&self, auth: &AuthStore) -> Navigation {
        auth.logout().await;
        Navigation::replace(LOGIN_PATH)
    }

    pub fn view(&self, user: &UserState) -> DashboardView {
        let key = match user.api_key() {
            Some(api_key) => KeyPanel::Key {
                preview: key_preview(api_key),
                is_copying: self.is_copying.is_active(),
                is_generating: self.is_generating.is_active(),
            },
            None => KeyPanel::Empty {
                text: EMPTY_KEY_TEXT,
            },
        };

        DashboardView {
            product_name: PRODUCT_NAME,
            docs_url: DOCS_URL,
            heading: "API Keys",
            subheading: "Manage your API keys to authenticate with our services.",
            can_create_key: user.api_key().is_none(),
            key,
            is_loading: user.is_loading,
            verification: self.verification.clone(),
        }
    }
}

async fn has_key(user: &UserStore) -> bool {
    user.snapshot().await.api_key().is_some()
}
