// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring of the session, the backend client and the simulated
//! collaborators from the loaded configuration.

use std::sync::Arc;

use proxhogar_api::ApiClient;
use proxhogar_config::ProxHogarConfig;
use proxhogar_core::{ProxHogarError, Session, SessionStore};
use proxhogar_dashboard::{
    ClientDashboard, DescriptionEnhancer, SimulatedBackgroundChecker, SimulatedIdentityVerifier,
    SimulatedPaymentProcessor, SimulatedSensors, Subscriptions, WorkerDashboard,
    WorkerVerification,
};
use proxhogar_session::{FileSessionStore, SessionContext};
use tracing::debug;

use crate::commands::CommandError;
use crate::render::Output;

pub const WORKER_ONLY: &str = "Esta opción es solo para cuentas de trabajador.";

pub struct App {
    pub config: ProxHogarConfig,
    pub api: ApiClient,
    pub session: Arc<SessionContext>,
    pub out: Output,
}

impl App {
    /// Builds the client stack and restores the stored session.
    pub async fn init(config: ProxHogarConfig, out: Output) -> Result<Self, ProxHogarError> {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session.path.clone()));
        let api = ApiClient::from_config(&config.api, store.clone())?;
        let session = Arc::new(SessionContext::new(store, Arc::new(api.clone())));
        session.load().await?;
        debug!(base_url = api.base_url(), "client ready");

        Ok(Self {
            config,
            api,
            session,
            out,
        })
    }

    pub async fn user(&self) -> Result<Session, CommandError> {
        Ok(self.session.require_user().await?)
    }

    /// The logged-in session, if it belongs to a worker account.
    pub async fn worker(&self) -> Result<Session, CommandError> {
        let user = self.user().await?;
        if !user.is_worker {
            return Err(CommandError::new(WORKER_ONLY));
        }
        Ok(user)
    }

    pub fn client_dashboard(&self) -> ClientDashboard {
        ClientDashboard::new(
            self.api.clone(),
            self.session.clone(),
            Arc::new(SimulatedPaymentProcessor::from_config(&self.config.payment)),
        )
    }

    pub fn worker_dashboard(&self) -> WorkerDashboard {
        WorkerDashboard::new(
            self.api.clone(),
            self.session.clone(),
            Arc::new(SimulatedSensors::from_config(&self.config.verification)),
        )
    }

    pub fn verification(&self) -> WorkerVerification {
        let config = &self.config.verification;
        WorkerVerification::new(
            Arc::new(SimulatedIdentityVerifier::from_config(config)),
            Arc::new(SimulatedBackgroundChecker::from_config(config)),
            Arc::new(SimulatedSensors::from_config(config)),
        )
    }

    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new(
            self.api.clone(),
            self.session.clone(),
            Arc::new(SimulatedPaymentProcessor::from_config(&self.config.payment)),
        )
    }

    pub fn enhancer(&self) -> Result<DescriptionEnhancer, ProxHogarError> {
        let completer = proxhogar_completion::from_config(&self.config.completion)?;
        Ok(DescriptionEnhancer::new(completer))
    }
}
