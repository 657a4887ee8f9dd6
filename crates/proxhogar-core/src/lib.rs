// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ProxHogar client.
//!
//! This crate provides the error type, the domain types shared by every
//! other crate (session record, roles, request statuses), and the
//! collaborator traits behind which persistence, the backend, completion,
//! device sensors, and payments are injected.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ProxHogarError;
pub use types::{
    ActiveRole, BackgroundCheck, GeoPoint, PaymentMethod, PaymentReceipt, RequestStatus, Session,
    WorkerConversionRequest,
};

pub use traits::{
    BackgroundChecker, DeviceSensors, IdentityVerifier, PaymentProcessor, SessionStore,
    TextCompleter, WorkerConversion,
};
