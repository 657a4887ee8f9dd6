// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST client for the ProxHogar backend.
//!
//! [`ApiClient::api_call`] is the single gateway every request goes through;
//! the typed methods in [`endpoints`] wrap it per backend route and decode
//! into the wire types in [`types`].

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{ApiClient, UNKNOWN_ERROR_MESSAGE, error_message};
pub use reqwest::Method;
pub use types::{
    BiometricCheck, BiometricResult, Category, Offer, OfferPayload, Registration, RequestPayload,
    Review, ReviewPayload, ServiceRequest, SubscribePayload, SubscriptionPlan, UserSummary,
    WorkerProfile, format_rating,
};
