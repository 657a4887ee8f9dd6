// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stand-ins for collaborators that would need real hardware or a payment
//! gateway: identity and background checks with a configurable failure
//! rate, fixed device sensors, and an always-approving payment processor.

use std::time::Duration;

use async_trait::async_trait;
use proxhogar_config::model::{PaymentConfig, VerificationConfig};
use proxhogar_core::{
    BackgroundCheck, BackgroundChecker, DeviceSensors, GeoPoint, IdentityVerifier, PaymentMethod,
    PaymentProcessor, PaymentReceipt, ProxHogarError,
};
use rand::Rng;
use tracing::{debug, info};

/// Shown when the simulated identity check rejects the DNI.
pub const IDENTITY_REJECTED: &str = "DNI no válido en el sistema. Por favor verifica los datos.";

/// Note attached to a failed simulated background check.
pub const BACKGROUND_UNAVAILABLE: &str =
    "No se puede completar la verificación. Contacta a soporte.";

/// Returns true with probability `rate`.
fn roll(rate: f64) -> bool {
    rand::thread_rng().gen_bool(rate.clamp(0.0, 1.0))
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedIdentityVerifier {
    failure_rate: f64,
    delay: Duration,
}

impl SimulatedIdentityVerifier {
    pub fn new(failure_rate: f64, delay: Duration) -> Self {
        Self {
            failure_rate,
            delay,
        }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self::new(
            config.identity_failure_rate,
            Duration::from_millis(config.step_delay_ms),
        )
    }
}

#[async_trait]
impl IdentityVerifier for SimulatedIdentityVerifier {
    async fn verify_identity(&self, dni: &str) -> Result<(), ProxHogarError> {
        pause(self.delay).await;
        if roll(self.failure_rate) {
            debug!(dni, "simulated identity check rejected");
            return Err(ProxHogarError::Verification(IDENTITY_REJECTED.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedBackgroundChecker {
    failure_rate: f64,
    delay: Duration,
}

impl SimulatedBackgroundChecker {
    pub fn new(failure_rate: f64, delay: Duration) -> Self {
        Self {
            failure_rate,
            delay,
        }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self::new(
            config.background_failure_rate,
            Duration::from_millis(config.step_delay_ms),
        )
    }
}

#[async_trait]
impl BackgroundChecker for SimulatedBackgroundChecker {
    async fn check_background(&self, dni: &str) -> Result<BackgroundCheck, ProxHogarError> {
        pause(self.delay).await;
        if roll(self.failure_rate) {
            debug!(dni, "simulated background check failed");
            return Ok(BackgroundCheck {
                passed: false,
                note: Some(BACKGROUND_UNAVAILABLE.to_string()),
            });
        }
        Ok(BackgroundCheck {
            passed: true,
            note: None,
        })
    }
}

/// Sensors that always report the configured position and selfie.
#[derive(Debug, Clone)]
pub struct SimulatedSensors {
    location: GeoPoint,
    selfie_url: String,
    delay: Duration,
}

impl SimulatedSensors {
    pub fn new(location: GeoPoint, selfie_url: String, delay: Duration) -> Self {
        Self {
            location,
            selfie_url,
            delay,
        }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self::new(
            GeoPoint {
                latitude: config.latitude,
                longitude: config.longitude,
            },
            config.selfie_url.clone(),
            Duration::from_millis(config.step_delay_ms),
        )
    }

    /// Avatar URL a reference photo for `dni` is "uploaded" to. A blank DNI
    /// gets a random seed.
    pub fn reference_photo_url(dni: &str) -> String {
        let dni = dni.trim();
        if dni.is_empty() {
            format!("https://i.pravatar.cc/150?u={}", rand::random::<u32>())
        } else {
            format!("https://i.pravatar.cc/150?u={dni}")
        }
    }
}

#[async_trait]
impl DeviceSensors for SimulatedSensors {
    async fn current_location(&self) -> Result<GeoPoint, ProxHogarError> {
        pause(self.delay).await;
        Ok(self.location)
    }

    async fn capture_selfie(&self) -> Result<String, ProxHogarError> {
        Ok(self.selfie_url.clone())
    }

    async fn upload_reference_photo(&self, dni: &str) -> Result<String, ProxHogarError> {
        pause(self.delay).await;
        Ok(Self::reference_photo_url(dni))
    }
}

/// Approves every payment after a fixed processing delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPaymentProcessor {
    delay: Duration,
}

impl SimulatedPaymentProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(Duration::from_millis(config.processing_delay_ms))
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedPaymentProcessor {
    async fn process(
        &self,
        amount: f64,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt, ProxHogarError> {
        pause(self.delay).await;
        info!(amount, %method, "payment processed");
        Ok(PaymentReceipt { amount, method })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn certain_identity_failure_rejects() {
        let verifier = SimulatedIdentityVerifier::new(1.0, Duration::ZERO);
        let err = verifier.verify_identity("12345678").await.unwrap_err();
        assert_eq!(err.to_string(), IDENTITY_REJECTED);
    }

    #[tokio::test]
    async fn zero_failure_rate_always_passes() {
        let verifier = SimulatedIdentityVerifier::new(0.0, Duration::ZERO);
        let checker = SimulatedBackgroundChecker::new(0.0, Duration::ZERO);
        for _ in 0..20 {
            verifier.verify_identity("12345678").await.unwrap();
            assert!(checker.check_background("12345678").await.unwrap().passed);
        }
    }

    #[tokio::test]
    async fn failed_background_check_carries_a_note() {
        let checker = SimulatedBackgroundChecker::new(1.0, Duration::ZERO);
        let check = checker.check_background("12345678").await.unwrap();
        assert!(!check.passed);
        assert_eq!(check.note.as_deref(), Some(BACKGROUND_UNAVAILABLE));
    }

    #[tokio::test]
    async fn sensors_report_configured_values() {
        let sensors = SimulatedSensors::from_config(&VerificationConfig {
            step_delay_ms: 0,
            ..VerificationConfig::default()
        });
        let here = sensors.current_location().await.unwrap();
        assert_eq!(here.latitude, -8.11);
        assert_eq!(here.longitude, -79.03);
        assert_eq!(
            sensors.upload_reference_photo("87654321").await.unwrap(),
            "https://i.pravatar.cc/150?u=87654321"
        );
    }

    #[test]
    fn blank_dni_gets_a_random_photo_seed() {
        let url = SimulatedSensors::reference_photo_url("");
        let seed = url.strip_prefix("https://i.pravatar.cc/150?u=").unwrap();
        assert!(!seed.is_empty());
        assert!(seed.parse::<u32>().is_ok());
    }

    #[tokio::test]
    async fn payment_echoes_amount_and_method() {
        let processor = SimulatedPaymentProcessor::default();
        let receipt = processor.process(120.5, PaymentMethod::Yape).await.unwrap();
        assert_eq!(receipt.amount, 120.5);
        assert_eq!(receipt.method, PaymentMethod::Yape);
    }
}
