// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session/auth context.
//!
//! [`SessionContext`] owns the logged-in user, the role currently presented,
//! and a loading flag. The persisted copy lives in an injected
//! [`SessionStore`]; role conversion goes through an injected
//! [`WorkerConversion`] so neither disk nor network is hard-wired.

use std::sync::Arc;

use proxhogar_core::{
    ActiveRole, ProxHogarError, Session, SessionStore, WorkerConversion, WorkerConversionRequest,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct SessionState {
    user: Option<Session>,
    active_role: ActiveRole,
    loading: bool,
}

/// Process-wide session state.
pub struct SessionContext {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
    conversion: Arc<dyn WorkerConversion>,
}

impl SessionContext {
    /// Creates an empty context. It reports loading until [`SessionContext::load`] runs.
    pub fn new(store: Arc<dyn SessionStore>, conversion: Arc<dyn WorkerConversion>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                user: None,
                active_role: ActiveRole::Client,
                loading: true,
            }),
            store,
            conversion,
        }
    }

    /// Restores the persisted session, if any.
    ///
    /// A record that fails to parse is removed from the store and treated as
    /// no session. Loading ends whatever the outcome.
    pub async fn load(&self) -> Result<(), ProxHogarError> {
        let result = self.restore().await;
        self.state.write().await.loading = false;
        result
    }

    async fn restore(&self) -> Result<(), ProxHogarError> {
        let Some(record) = self.store.load().await? else {
            debug!("no stored session");
            return Ok(());
        };

        match serde_json::from_str::<Session>(&record) {
            Ok(mut session) => {
                session.normalize();
                let mut state = self.state.write().await;
                state.active_role = ActiveRole::for_session(&session);
                state.user = Some(session);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, location = %self.store.location(), "discarding unreadable session record");
                self.store.clear().await
            }
        }
    }

    /// Starts a session from a login response.
    pub async fn login(&self, mut session: Session) -> Result<(), ProxHogarError> {
        session.normalize();
        self.persist(&session).await?;

        info!(user_id = ?session.user_id, worker = session.is_worker, "logged in");
        let mut state = self.state.write().await;
        state.active_role = ActiveRole::for_session(&session);
        state.user = Some(session);
        Ok(())
    }

    /// Ends the session. In-memory state is cleared even if the store fails.
    pub async fn logout(&self) -> Result<(), ProxHogarError> {
        {
            let mut state = self.state.write().await;
            state.user = None;
            state.active_role = ActiveRole::Client;
        }
        info!("logged out");
        self.store.clear().await
    }

    /// Converts the current client account into a worker account.
    ///
    /// Does nothing when there is no session or it already is a worker. On
    /// failure the session, the role and the store are exactly as before.
    pub async fn switch_to_worker_role(
        &self,
        request: &WorkerConversionRequest,
    ) -> Result<(), ProxHogarError> {
        let user = {
            let state = self.state.read().await;
            match &state.user {
                Some(user) if !user.is_worker => user.clone(),
                _ => return Ok(()),
            }
        };
        let user_id = user.require_user_id()?;

        self.state.write().await.loading = true;
        let result = self.convert(user, user_id, request).await;
        self.state.write().await.loading = false;
        result
    }

    async fn convert(
        &self,
        mut user: Session,
        user_id: i64,
        request: &WorkerConversionRequest,
    ) -> Result<(), ProxHogarError> {
        self.conversion.convert_to_worker(user_id, request).await?;

        user.is_worker = true;
        user.has_changed_to_worker = true;
        self.persist(&user).await?;

        let mut state = self.state.write().await;
        state.user = Some(user);
        state.active_role = ActiveRole::Worker;
        Ok(())
    }

    /// Flips the presented role between client and worker.
    ///
    /// Only worker accounts have two views. Never touches the account flags
    /// or the store. Returns the new role, or `None` if nothing changed.
    pub async fn toggle_role_view(&self) -> Option<ActiveRole> {
        let mut state = self.state.write().await;
        let is_worker = state.user.as_ref().is_some_and(|u| u.is_worker);
        if state.loading || !is_worker {
            return None;
        }
        state.active_role = state.active_role.flipped();
        Some(state.active_role)
    }

    pub async fn user(&self) -> Option<Session> {
        self.state.read().await.user.clone()
    }

    pub async fn active_role(&self) -> ActiveRole {
        self.state.read().await.active_role
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Whether the one-time conversion to worker is still available.
    pub async fn can_convert(&self) -> bool {
        self.state
            .read()
            .await
            .user
            .as_ref()
            .is_some_and(|u| !u.has_changed_to_worker)
    }

    /// The logged-in session, or [`ProxHogarError::NotAuthenticated`].
    pub async fn require_user(&self) -> Result<Session, ProxHogarError> {
        self.user().await.ok_or(ProxHogarError::NotAuthenticated)
    }

    async fn persist(&self, session: &Session) -> Result<(), ProxHogarError> {
        let record = serde_json::to_string(session)
            .map_err(|e| ProxHogarError::Internal(format!("failed to encode session: {e}")))?;
        self.store.save(&record).await
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("store", &self.store.location())
            .finish_non_exhaustive()
    }
}
