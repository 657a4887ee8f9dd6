// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Worker verification: identity, then background check, then done.
//!
//! The flow only collects and checks data. The one step with lasting effect
//! is submitting the result through
//! [`SessionContext::switch_to_worker_role`](proxhogar_session::SessionContext::switch_to_worker_role).

use std::sync::Arc;

use proxhogar_core::{
    BackgroundChecker, DeviceSensors, IdentityVerifier, ProxHogarError, WorkerConversionRequest,
};
use strum::Display;
use tracing::{debug, warn};

pub const DNI_LENGTH: usize = 8;

pub const ALL_FIELDS_REQUIRED: &str = "Todos los campos son obligatorios.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum VerificationStep {
    #[strum(serialize = "identidad")]
    Identity,
    #[strum(serialize = "antecedentes")]
    Background,
    #[strum(serialize = "completado")]
    Complete,
}

pub struct WorkerVerification {
    identity: Arc<dyn IdentityVerifier>,
    background: Arc<dyn BackgroundChecker>,
    sensors: Arc<dyn DeviceSensors>,
    step: VerificationStep,
    dni: String,
    biography: String,
    photo_url: Option<String>,
    background_passed: bool,
    notice: Option<String>,
}

impl WorkerVerification {
    pub fn new(
        identity: Arc<dyn IdentityVerifier>,
        background: Arc<dyn BackgroundChecker>,
        sensors: Arc<dyn DeviceSensors>,
    ) -> Self {
        Self {
            identity,
            background,
            sensors,
            step: VerificationStep::Identity,
            dni: String::new(),
            biography: String::new(),
            photo_url: None,
            background_passed: true,
            notice: None,
        }
    }

    pub fn step(&self) -> VerificationStep {
        self.step
    }

    pub fn dni(&self) -> &str {
        &self.dni
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Message from the background check to show the applicant, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Keeps only the digits of `input`, at most eight of them.
    pub fn set_dni(&mut self, input: &str) {
        self.dni = sanitize_dni(input);
    }

    pub fn set_biography(&mut self, biography: &str) {
        self.biography = biography.to_string();
    }

    /// Uploads the reference photo and remembers where it went.
    pub async fn upload_photo(&mut self) -> Result<&str, ProxHogarError> {
        let url = self.sensors.upload_reference_photo(&self.dni).await?;
        debug!(%url, "reference photo uploaded");
        Ok(self.photo_url.insert(url).as_str())
    }

    /// Validates the identity fields and runs the identity check.
    ///
    /// Incomplete fields fail before the verifier is consulted.
    pub async fn submit_identity(&mut self) -> Result<(), ProxHogarError> {
        self.expect_step(VerificationStep::Identity)?;
        let complete = self.dni.len() == DNI_LENGTH
            && !self.biography.trim().is_empty()
            && self.photo_url.as_deref().is_some_and(|u| !u.is_empty());
        if !complete {
            return Err(ProxHogarError::Validation(ALL_FIELDS_REQUIRED.into()));
        }

        self.identity.verify_identity(&self.dni).await?;
        self.step = VerificationStep::Background;
        Ok(())
    }

    /// Runs the background check. A failed check is recorded, not fatal.
    pub async fn run_background_check(&mut self) -> Result<(), ProxHogarError> {
        self.expect_step(VerificationStep::Background)?;
        let check = self.background.check_background(&self.dni).await?;
        if !check.passed {
            warn!("background check did not pass, continuing with flag unset");
        }
        self.background_passed = check.passed;
        self.notice = check.note;
        self.step = VerificationStep::Complete;
        Ok(())
    }

    /// The data to submit for role conversion.
    pub fn finish(&self) -> Result<WorkerConversionRequest, ProxHogarError> {
        self.expect_step(VerificationStep::Complete)?;
        Ok(WorkerConversionRequest {
            biography: self.biography.trim().to_string(),
            reference_photo_url: self.photo_url.clone().unwrap_or_default(),
            dni: self.dni.clone(),
            background_check_passed: self.background_passed,
        })
    }

    fn expect_step(&self, expected: VerificationStep) -> Result<(), ProxHogarError> {
        if self.step != expected {
            return Err(ProxHogarError::Internal(format!(
                "verification is at step {}, not {expected}",
                self.step
            )));
        }
        Ok(())
    }
}

pub fn sanitize_dni(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(DNI_LENGTH)
        .collect()
}
