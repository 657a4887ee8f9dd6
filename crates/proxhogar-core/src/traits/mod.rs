// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits.
//!
//! Every seam where the client talks to something it does not own (local
//! persistence, the backend, the completion service, device sensors, payment
//! processing) is a trait, so tests and the CLI can swap implementations.
//! All traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod completion;
pub mod conversion;
pub mod payment;
pub mod store;
pub mod verification;

pub use completion::TextCompleter;
pub use conversion::WorkerConversion;
pub use payment::PaymentProcessor;
pub use store::SessionStore;
pub use verification::{BackgroundChecker, DeviceSensors, IdentityVerifier};
