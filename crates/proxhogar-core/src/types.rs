// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the ProxHogar crates.
//!
//! Field names on the wire follow the backend's JSON (Spanish, camelCase);
//! the Rust names describe what the field holds.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

use crate::error::ProxHogarError;

/// Deserializes an explicit JSON `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing field behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The logged-in user's session record, as returned by `/auth/login` and
/// persisted by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on every authenticated call.
    pub token: String,

    /// Backend user id. Older cached records may lack it.
    #[serde(rename = "usuarioId", default)]
    pub user_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(rename = "nombreCompleto", default, deserialize_with = "null_as_default")]
    pub full_name: String,

    /// Whether the user holds the worker capability.
    #[serde(rename = "esTrabajador", default, deserialize_with = "null_as_default")]
    pub is_worker: bool,

    /// One-way marker: set once the user is (or became) a worker.
    #[serde(rename = "hasChangedToWorker", default, deserialize_with = "null_as_default")]
    pub has_changed_to_worker: bool,

    /// Any other fields the backend returned, kept for round-tripping.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    /// Apply the one-way conversion rule: a worker is always marked as
    /// converted, and a converted session is never unmarked.
    pub fn normalize(&mut self) {
        if self.is_worker {
            self.has_changed_to_worker = true;
        }
    }

    /// Returns the user id or [`ProxHogarError::NotAuthenticated`].
    pub fn require_user_id(&self) -> Result<i64, ProxHogarError> {
        self.user_id.ok_or(ProxHogarError::NotAuthenticated)
    }

    /// First word of the full name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or("Usuario")
    }
}

/// Which facet of a dual-role user is being presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ActiveRole {
    #[default]
    #[serde(rename = "CLIENTE")]
    #[strum(serialize = "CLIENTE")]
    Client,
    #[serde(rename = "TRABAJADOR")]
    #[strum(serialize = "TRABAJADOR")]
    Worker,
}

impl ActiveRole {
    /// The role a freshly loaded session starts in.
    pub fn for_session(session: &Session) -> Self {
        if session.is_worker {
            ActiveRole::Worker
        } else {
            ActiveRole::Client
        }
    }

    /// The other role.
    pub fn flipped(self) -> Self {
        match self {
            ActiveRole::Client => ActiveRole::Worker,
            ActiveRole::Worker => ActiveRole::Client,
        }
    }
}

/// Lifecycle status of a service request (solicitud).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum RequestStatus {
    /// Published, no offers yet. The client may still edit or delete it.
    #[serde(rename = "PENDIENTE")]
    #[strum(serialize = "PENDIENTE")]
    Pending,
    /// Receiving offers from workers.
    #[serde(rename = "OFERTANDO")]
    #[strum(serialize = "OFERTANDO")]
    Bidding,
    /// An offer was accepted; the hired worker has not started yet.
    #[serde(rename = "ACEPTADO")]
    #[strum(serialize = "ACEPTADO")]
    Accepted,
    #[serde(rename = "EN_PROCESO")]
    #[strum(serialize = "EN_PROCESO")]
    InProgress,
    /// The worker marked the job done; awaiting client payment.
    #[serde(rename = "FINALIZADO_POR_TRABAJADOR")]
    #[strum(serialize = "FINALIZADO_POR_TRABAJADOR")]
    WorkerFinished,
    #[serde(rename = "FINALIZADA")]
    #[strum(serialize = "FINALIZADA")]
    Finalized,
    #[serde(rename = "CANCELADA")]
    #[strum(serialize = "CANCELADA")]
    Cancelled,
}

impl RequestStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [RequestStatus; 7] = [
        RequestStatus::Pending,
        RequestStatus::Bidding,
        RequestStatus::Accepted,
        RequestStatus::InProgress,
        RequestStatus::WorkerFinished,
        RequestStatus::Finalized,
        RequestStatus::Cancelled,
    ];

    /// True for statuses that end the lifecycle.
    pub fn is_closed(self) -> bool {
        matches!(self, RequestStatus::Finalized | RequestStatus::Cancelled)
    }

    /// Human-readable label in the application's display language.
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pendiente",
            RequestStatus::Bidding => "Ofertando",
            RequestStatus::Accepted => "Aceptado",
            RequestStatus::InProgress => "En proceso",
            RequestStatus::WorkerFinished => "Finalizado por trabajador",
            RequestStatus::Finalized => "Finalizada",
            RequestStatus::Cancelled => "Cancelada",
        }
    }
}

/// Data submitted to the role-conversion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerConversionRequest {
    #[serde(rename = "biografia")]
    pub biography: String,
    #[serde(rename = "fotoBiometricaReferenciaUrl")]
    pub reference_photo_url: String,
    pub dni: String,
    #[serde(rename = "antecedentesPenalesVerificados")]
    pub background_check_passed: bool,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Yape,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Card, PaymentMethod::Yape, PaymentMethod::Transfer];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Tarjeta de Crédito/Débito",
            PaymentMethod::Yape => "Yape",
            PaymentMethod::Transfer => "Transferencia Bancaria",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Visa, Mastercard, American Express",
            PaymentMethod::Yape => "Pago por teléfono",
            PaymentMethod::Transfer => "Transferencia a cuenta bancaria",
        }
    }
}

/// Confirmation of a processed payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub amount: f64,
    pub method: PaymentMethod,
}

/// Outcome of a background check. A failed check is still a result,
/// not an error: it is recorded and the flow continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundCheck {
    pub passed: bool,
    pub note: Option<String>,
}
