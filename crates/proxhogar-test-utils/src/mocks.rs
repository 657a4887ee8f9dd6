// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted collaborators for deterministic tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use proxhogar_core::{
    BackgroundCheck, BackgroundChecker, DeviceSensors, GeoPoint, IdentityVerifier, PaymentMethod,
    PaymentProcessor, PaymentReceipt, ProxHogarError, TextCompleter,
};

/// A text completer that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue; `None` entries fail the call.
/// When the queue is empty a default "mock completion" text is returned.
pub struct MockCompleter {
    responses: Arc<Mutex<VecDeque<Option<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompleter {
    pub fn new() -> Self {
        Self::from_queue(VecDeque::new())
    }

    pub fn with_responses(responses: Vec<String>) -> Self {
        Self::from_queue(responses.into_iter().map(Some).collect())
    }

    /// A completer whose every call fails.
    pub fn failing() -> Self {
        Self::from_queue(std::iter::repeat_n(None, 64).collect())
    }

    fn from_queue(queue: VecDeque<Option<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(queue)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, in order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for MockCompleter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextCompleter for MockCompleter {
    fn name(&self) -> &str {
        "mock-completer"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProxHogarError> {
        self.prompts.lock().await.push(prompt.to_string());
        match self.responses.lock().await.pop_front() {
            Some(Some(text)) => Ok(text),
            Some(None) => Err(ProxHogarError::Completion("mock failure".into())),
            None => Ok("mock completion".to_string()),
        }
    }
}

/// A payment processor that approves and records every charge, or
/// declines all of them.
#[derive(Default)]
pub struct RecordingPayments {
    charges: Mutex<Vec<PaymentReceipt>>,
    decline: bool,
}

impl RecordingPayments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    pub async fn charges(&self) -> Vec<PaymentReceipt> {
        self.charges.lock().await.clone()
    }
}

#[async_trait]
impl PaymentProcessor for RecordingPayments {
    async fn process(
        &self,
        amount: f64,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt, ProxHogarError> {
        if self.decline {
            return Err(ProxHogarError::Validation("Pago rechazado".into()));
        }
        let receipt = PaymentReceipt { amount, method };
        self.charges.lock().await.push(receipt.clone());
        Ok(receipt)
    }
}

/// Sensors with fixed readings and no latency.
pub struct FixedSensors {
    pub location: GeoPoint,
    pub selfie_url: String,
}

impl Default for FixedSensors {
    fn default() -> Self {
        Self {
            location: GeoPoint {
                latitude: -8.11,
                longitude: -79.03,
            },
            selfie_url: "https://example.com/selfie.jpg".to_string(),
        }
    }
}

#[async_trait]
impl DeviceSensors for FixedSensors {
    async fn current_location(&self) -> Result<GeoPoint, ProxHogarError> {
        Ok(self.location)
    }

    async fn capture_selfie(&self) -> Result<String, ProxHogarError> {
        Ok(self.selfie_url.clone())
    }

    async fn upload_reference_photo(&self, dni: &str) -> Result<String, ProxHogarError> {
        Ok(format!("https://example.com/ref/{dni}.jpg"))
    }
}

/// Identity verifier that always accepts or always rejects, counting calls.
#[derive(Default)]
pub struct ScriptedIdentityVerifier {
    reject: bool,
    calls: AtomicUsize,
}

impl ScriptedIdentityVerifier {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for ScriptedIdentityVerifier {
    async fn verify_identity(&self, _dni: &str) -> Result<(), ProxHogarError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            return Err(ProxHogarError::Verification("DNI rechazado".into()));
        }
        Ok(())
    }
}

/// Background checker with a fixed outcome.
pub struct ScriptedBackgroundChecker {
    outcome: BackgroundCheck,
}

impl ScriptedBackgroundChecker {
    pub fn passing() -> Self {
        Self {
            outcome: BackgroundCheck {
                passed: true,
                note: None,
            },
        }
    }

    pub fn failing(note: &str) -> Self {
        Self {
            outcome: BackgroundCheck {
                passed: false,
                note: Some(note.to_string()),
            },
        }
    }
}

#[async_trait]
impl BackgroundChecker for ScriptedBackgroundChecker {
    async fn check_background(&self, _dni: &str) -> Result<BackgroundCheck, ProxHogarError> {
        Ok(self.outcome.clone())
    }
}
