// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the ProxHogar REST API.
//!
//! Field names follow the backend's JSON (Spanish, camelCase) through serde
//! renames. Optional fields default so partial payloads still decode.

use proxhogar_core::types::null_as_default;
use proxhogar_core::{ActiveRole, RequestStatus};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// A service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "urlIcono", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Public account details embedded in other records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(rename = "nombreCompleto", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A worker's public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: i64,
    #[serde(rename = "usuario")]
    pub user: UserSummary,
    #[serde(rename = "biografia", default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(
        rename = "calificacionPromedio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_rating: Option<f64>,
    #[serde(rename = "verificado", default, deserialize_with = "null_as_default")]
    pub verified: bool,
}

impl WorkerProfile {
    /// Average rating with one decimal, or `N/A` when unrated.
    pub fn rating_display(&self) -> String {
        format_rating(self.average_rating)
    }
}

/// Formats an optional rating the way profiles and offers display it.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "N/A".to_string(),
    }
}

/// A client-posted service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: i64,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "direccion", default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "precioSugerido", default)]
    pub suggested_price: Option<f64>,
    #[serde(rename = "estado")]
    pub status: RequestStatus,
    #[serde(rename = "categoriaId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "latitud", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub client: Option<UserSummary>,
    #[serde(
        rename = "trabajadorElegido",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chosen_worker: Option<WorkerProfile>,
}

/// Body of create and update request calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    #[serde(rename = "categoriaId")]
    pub category_id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precioSugerido")]
    pub suggested_price: f64,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
}

/// Origin tag sent with every request created from this client.
pub const REQUEST_REFERENCE: &str = "Web";

/// A worker's bid on a service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    #[serde(rename = "solicitudId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    #[serde(rename = "montoOfrecido")]
    pub amount: f64,
    #[serde(rename = "comentario", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "trabajador")]
    pub worker: WorkerProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferPayload {
    #[serde(rename = "solicitudId")]
    pub request_id: i64,
    #[serde(rename = "montoOfrecido")]
    pub amount: f64,
    #[serde(rename = "comentario")]
    pub comment: String,
}

/// A review left for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(rename = "calificacion")]
    pub rating: u8,
    #[serde(rename = "comentario", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "autor", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewPayload {
    #[serde(rename = "solicitudId")]
    pub request_id: i64,
    #[serde(rename = "usuarioCalificadoId")]
    pub rated_user_id: i64,
    #[serde(rename = "estrellas")]
    pub stars: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
}

/// A subscription plan offered to one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    /// Pipe-separated feature list as sent by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: String,
    #[serde(rename = "recomendado", default, deserialize_with = "null_as_default")]
    pub recommended: bool,
    #[serde(rename = "periodo", default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rol: Option<ActiveRole>,
}

impl SubscriptionPlan {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .split('|')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscribePayload {
    #[serde(rename = "planId")]
    pub plan_id: i64,
    #[serde(rename = "meses")]
    pub months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiometricCheck {
    #[serde(rename = "solicitudId")]
    pub request_id: i64,
    #[serde(rename = "latitudActual")]
    pub latitude: f64,
    #[serde(rename = "longitudActual")]
    pub longitude: f64,
    #[serde(rename = "fotoSelfieUrl")]
    pub selfie_url: String,
}

/// Outcome of a biometric check-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BiometricResult {
    #[serde(rename = "exito", default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

/// Account registration form.
///
/// Serialized by hand in [`crate::ApiClient::register`] so the password only
/// leaves its [`SecretString`] at the moment the body is built.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: SecretString,
    pub full_name: String,
    pub phone: String,
}

/// Push token sent by clients without a messaging registration.
pub const WEB_FCM_TOKEN: &str = "web_client";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_request_decodes_backend_shape() {
        let req: ServiceRequest = serde_json::from_value(json!({
            "id": 7,
            "descripcion": "Fuga en el baño",
            "direccion": "Av. España 123",
            "precioSugerido": 80.0,
            "estado": "FINALIZADO_POR_TRABAJADOR",
            "categoriaId": 2,
            "trabajadorElegido": {
                "id": 3,
                "usuario": {"id": 11, "nombreCompleto": "Luis Paredes"},
                "calificacionPromedio": 4.56
            }
        }))
        .unwrap();

        assert_eq!(req.status, RequestStatus::WorkerFinished);
        assert_eq!(req.category_id, Some(2));
        let worker = req.chosen_worker.unwrap();
        assert_eq!(worker.user.id, 11);
        assert_eq!(worker.rating_display(), "4.6");
        assert!(!worker.verified);
    }

    #[test]
    fn unrated_worker_shows_na() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(0.0)), "0.0");
        assert_eq!(format_rating(Some(5.0)), "5.0");
    }

    #[test]
    fn request_payload_uses_wire_names() {
        let payload = RequestPayload {
            category_id: 1,
            description: "Pintar sala".into(),
            suggested_price: 150.0,
            address: "Jr. Pizarro 400".into(),
            reference: REQUEST_REFERENCE.into(),
            latitude: -8.11,
            longitude: -79.03,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["categoriaId"], 1);
        assert_eq!(value["precioSugerido"], 150.0);
        assert_eq!(value["referencia"], "Web");
        assert_eq!(value["longitud"], -79.03);
    }

    #[test]
    fn plan_features_split_on_pipe() {
        let plan: SubscriptionPlan = serde_json::from_value(json!({
            "id": 1,
            "nombre": "Pro",
            "precio": 19.9,
            "features": "Ofertas ilimitadas| Insignia verificada |",
            "recomendado": true
        }))
        .unwrap();
        assert_eq!(
            plan.feature_list(),
            vec!["Ofertas ilimitadas", "Insignia verificada"]
        );
        assert!(!plan.is_free());
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let requests: Vec<ServiceRequest> = serde_json::from_value(json!([{
            "id": 3,
            "descripcion": null,
            "direccion": null,
            "estado": "OFERTANDO",
            "cliente": {"id": 9, "nombreCompleto": null},
            "trabajadorElegido": {
                "id": 1009,
                "usuario": {"id": 9, "nombreCompleto": null},
                "verificado": null
            }
        }]))
        .unwrap();
        let request = &requests[0];
        assert!(request.description.is_empty());
        assert!(request.address.is_empty());
        assert_eq!(request.client.as_ref().map(|c| c.full_name.as_str()), Some(""));
        let worker = request.chosen_worker.as_ref().unwrap();
        assert!(worker.user.full_name.is_empty());
        assert!(!worker.verified);

        let plan: SubscriptionPlan = serde_json::from_value(json!({
            "id": 2, "nombre": "Básico", "precio": 0, "features": null, "recomendado": null
        }))
        .unwrap();
        assert!(plan.feature_list().is_empty());
        assert!(!plan.recommended);

        let result: BiometricResult =
            serde_json::from_value(json!({"exito": null, "mensaje": null})).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn biometric_result_defaults_to_failure() {
        let result: BiometricResult = serde_json::from_value(json!({})).unwrap();
        assert!(!result.success);
        assert!(result.message.is_none());
    }
}
