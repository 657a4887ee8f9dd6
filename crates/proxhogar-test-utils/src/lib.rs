// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for ProxHogar integration tests.
//!
//! Provides JSON fixtures in the backend's wire format, scripted
//! collaborators, and a harness wiring a wiremock backend to a real
//! [`ApiClient`](proxhogar_api::ApiClient) and session context.
//!
//! # Components
//!
//! - [`fixtures`] - Session, request, offer, worker and plan JSON builders
//! - [`MockCompleter`] - Text completer with queued responses
//! - [`RecordingPayments`] - Payment processor that records every charge
//! - [`FixedSensors`] - Device sensors with fixed readings
//! - [`TestHarness`] - Backend mock plus client and session wiring

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mocks::{
    FixedSensors, MockCompleter, RecordingPayments, ScriptedBackgroundChecker,
    ScriptedIdentityVerifier,
};
