// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verification collaborator traits.
//!
//! Identity, background, and device checks are advisory on the client. The
//! shipped implementations are simulations; real integrations plug in here.

use async_trait::async_trait;

use crate::error::ProxHogarError;
use crate::types::{BackgroundCheck, GeoPoint};

/// Validates an identity document against an external registry.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Returns `Err(ProxHogarError::Verification)` when the DNI is rejected.
    async fn verify_identity(&self, dni: &str) -> Result<(), ProxHogarError>;
}

/// Runs a criminal-record check for a DNI.
#[async_trait]
pub trait BackgroundChecker: Send + Sync {
    async fn check_background(&self, dni: &str) -> Result<BackgroundCheck, ProxHogarError>;
}

/// Camera and location access.
#[async_trait]
pub trait DeviceSensors: Send + Sync {
    /// Current position of the device.
    async fn current_location(&self) -> Result<GeoPoint, ProxHogarError>;

    /// Takes a selfie and returns the URL it was uploaded to.
    async fn capture_selfie(&self) -> Result<String, ProxHogarError>;

    /// Uploads the reference photo for a worker application and returns its URL.
    async fn upload_reference_photo(&self, dni: &str) -> Result<String, ProxHogarError>;
}
