// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard view-state and lifecycle flows for the ProxHogar client.
//!
//! Each dashboard owns a snapshot of what the user sees and refreshes it
//! from the backend after every successful mutation. Collaborators that
//! would need hardware or a payment gateway are injected as traits; the
//! [`simulated`] module provides the stand-ins used by the CLI.

pub mod actions;
pub mod client;
pub mod enhancer;
pub mod payment;
pub mod profile;
pub mod simulated;
pub mod subscription;
pub mod verification;
pub mod worker;

pub use actions::{ClientAction, ClientTab, JobTab, WorkerAction, client_actions, worker_actions};
pub use client::{ClientDashboard, ClientView, PendingReview, RequestForm};
pub use enhancer::{COMPLETION_UNAVAILABLE, DescriptionEnhancer};
pub use payment::checkout;
pub use profile::{ProfileView, load_profile, reviews_for_offer};
pub use simulated::{
    SimulatedBackgroundChecker, SimulatedIdentityVerifier, SimulatedPaymentProcessor,
    SimulatedSensors,
};
pub use subscription::Subscriptions;
pub use verification::{VerificationStep, WorkerVerification};
pub use worker::{WorkerDashboard, WorkerView};
