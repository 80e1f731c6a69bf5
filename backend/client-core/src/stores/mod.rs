//! Shared application stores.
//!
//! Each store owns its state behind an `Arc<RwLock<_>>` and bumps a watch
//! revision after every mutation so views subscribed to it re-render.
//! Reads clone a snapshot; write guards are never held across `.await`.

pub mod auth_store;
pub mod user_store;

pub use auth_store::{AuthState, AuthStore};
pub use user_store::{UserState, UserStore};

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

/// State cell with change notification.
#[derive(Clone)]
pub(crate) struct StoreCell<S> {
    state: Arc<RwLock<S>>,
    revision: Arc<watch::Sender<u64>>,
}

impl<S: Clone + Default> StoreCell<S> {
    pub(crate) fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(S::default())),
            revision: Arc::new(revision),
        }
    }

    pub(crate) async fn snapshot(&self) -> S {
        self.state.read().await.clone()
    }

    /// Apply `update` under the write lock, then notify subscribers.
    pub(crate) async fn set<F>(&self, update: F)
    where
        F: FnOnce(&mut S),
    {
        {
            let mut state = self.state.write().await;
            update(&mut state);
        }
        self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
