// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Worker dashboard: available requests, offers, and hired jobs.

use std::sync::Arc;

use proxhogar_api::{ApiClient, BiometricCheck, OfferPayload, ServiceRequest, WorkerProfile};
use proxhogar_core::{DeviceSensors, ProxHogarError};
use proxhogar_session::SessionContext;
use serde::Serialize;
use tracing::{debug, info};

use crate::actions::{JobTab, WorkerAction, filter_by, worker_actions};

pub const ENTER_AMOUNT: &str = "Por favor, ingresa un monto.";

/// Used when the biometric check fails without saying why.
pub const BIOMETRIC_FAILED: &str = "La verificación biométrica ha fallado.";

/// What the worker dashboard currently shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkerView {
    /// Open requests any worker may bid on.
    pub available: Vec<ServiceRequest>,
    /// Requests this worker was hired for, in any status.
    pub jobs: Vec<ServiceRequest>,
    pub profile: Option<WorkerProfile>,
}

impl WorkerView {
    pub fn tab(&self, tab: JobTab) -> Vec<&ServiceRequest> {
        filter_by(&self.jobs, |s| tab.includes(s))
    }

    /// Own average rating, one decimal, or `N/A`.
    pub fn rating_display(&self) -> String {
        proxhogar_api::format_rating(self.profile.as_ref().and_then(|p| p.average_rating))
    }
}

pub struct WorkerDashboard {
    api: ApiClient,
    session: Arc<SessionContext>,
    sensors: Arc<dyn DeviceSensors>,
    view: WorkerView,
}

impl WorkerDashboard {
    pub fn new(
        api: ApiClient,
        session: Arc<SessionContext>,
        sensors: Arc<dyn DeviceSensors>,
    ) -> Self {
        Self {
            api,
            session,
            sensors,
            view: WorkerView::default(),
        }
    }

    pub fn view(&self) -> &WorkerView {
        &self.view
    }

    /// Fetches available requests, own jobs and own profile together.
    ///
    /// All three must succeed; otherwise the previous view is kept.
    pub async fn load(&mut self) -> Result<(), ProxHogarError> {
        let user_id = self.user_id().await?;
        let (available, jobs, profile) = futures::try_join!(
            self.api.available_requests(),
            self.api.my_jobs(user_id),
            self.api.worker_profile(user_id)
        )?;
        debug!(
            available = available.len(),
            jobs = jobs.len(),
            "worker dashboard loaded"
        );
        self.view = WorkerView {
            available,
            jobs,
            profile: Some(profile),
        };
        Ok(())
    }

    pub async fn send_offer(
        &mut self,
        request_id: i64,
        amount: f64,
        comment: &str,
    ) -> Result<(), ProxHogarError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(ProxHogarError::Validation(ENTER_AMOUNT.into()));
        }
        let user_id = self.user_id().await?;
        self.api
            .create_offer(
                user_id,
                &OfferPayload {
                    request_id,
                    amount,
                    comment: comment.to_string(),
                },
            )
            .await?;
        info!(request_id, amount, "offer sent");
        self.load().await
    }

    /// Checks in on site with location and selfie, then starts the job.
    ///
    /// The job is only started when the backend confirms the biometric match.
    pub async fn start_job(&mut self, request_id: i64) -> Result<(), ProxHogarError> {
        self.ensure(request_id, WorkerAction::Start)?;
        let user_id = self.user_id().await?;

        let location = self.sensors.current_location().await?;
        let selfie_url = self.sensors.capture_selfie().await?;
        let result = self
            .api
            .verify_biometrics(&BiometricCheck {
                request_id,
                latitude: location.latitude,
                longitude: location.longitude,
                selfie_url,
            })
            .await?;
        if !result.success {
            return Err(ProxHogarError::Verification(
                result
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| BIOMETRIC_FAILED.to_string()),
            ));
        }

        self.api.start_job(request_id, user_id).await?;
        info!(request_id, "job started");
        self.load().await
    }

    pub async fn finish_job(&mut self, request_id: i64) -> Result<(), ProxHogarError> {
        self.ensure(request_id, WorkerAction::Finish)?;
        let user_id = self.user_id().await?;
        self.api.finish_job(request_id, user_id).await?;
        info!(request_id, "job marked finished");
        self.load().await
    }

    fn ensure(&self, request_id: i64, action: WorkerAction) -> Result<(), ProxHogarError> {
        let job = self
            .view
            .jobs
            .iter()
            .find(|j| j.id == request_id)
            .ok_or_else(|| {
                ProxHogarError::Validation(format!("No tienes asignado el trabajo {request_id}."))
            })?;
        if !worker_actions(job.status).contains(&action) {
            return Err(ProxHogarError::Validation(format!(
                "El trabajo {request_id} está en estado «{}» y no permite esta acción.",
                job.status.label()
            )));
        }
        Ok(())
    }

    async fn user_id(&self) -> Result<i64, ProxHogarError> {
        self.session.require_user().await?.require_user_id()
    }
}
