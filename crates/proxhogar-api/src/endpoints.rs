// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed wrappers over [`ApiClient::api_call`], one per backend endpoint.

use async_trait::async_trait;
use proxhogar_core::{ActiveRole, ProxHogarError, Session, WorkerConversion, WorkerConversionRequest};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::client::ApiClient;
use crate::types::{
    BiometricCheck, BiometricResult, Category, Offer, OfferPayload, Registration, RequestPayload,
    Review, ReviewPayload, ServiceRequest, SubscribePayload, SubscriptionPlan, WEB_FCM_TOKEN,
    WorkerProfile,
};

fn to_body<T: Serialize>(payload: &T) -> Result<Value, ProxHogarError> {
    serde_json::to_value(payload).map_err(|e| ProxHogarError::Internal(format!(
        "failed to encode request body: {e}"
    )))
}

impl ApiClient {
    // --- auth ---

    pub async fn register(&self, form: &Registration) -> Result<(), ProxHogarError> {
        let body = json!({
            "email": form.email,
            "password": form.password.expose_secret(),
            "nombreCompleto": form.full_name,
            "telefono": form.phone,
            "fcmToken": WEB_FCM_TOKEN,
        });
        self.api_call("/auth/registro", Method::POST, Some(&body))
            .await?;
        info!(email = %form.email, "account registered");
        Ok(())
    }

    /// Exchanges credentials for a session record.
    pub async fn login(
        &self,
        email: &str,
        password: &secrecy::SecretString,
    ) -> Result<Session, ProxHogarError> {
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });
        self.call("/auth/login", Method::POST, Some(&body)).await
    }

    // --- catalog ---

    pub async fn categories(&self) -> Result<Vec<Category>, ProxHogarError> {
        self.call("/categorias", Method::GET, None).await
    }

    // --- service requests (client side) ---

    pub async fn my_requests(&self, client_id: i64) -> Result<Vec<ServiceRequest>, ProxHogarError> {
        self.call(
            &format!("/solicitudes/mis-pedidos?clienteId={client_id}"),
            Method::GET,
            None,
        )
        .await
    }

    pub async fn create_request(
        &self,
        client_id: i64,
        payload: &RequestPayload,
    ) -> Result<Value, ProxHogarError> {
        self.api_call(
            &format!("/solicitudes?clienteId={client_id}"),
            Method::POST,
            Some(&to_body(payload)?),
        )
        .await
    }

    pub async fn update_request(
        &self,
        request_id: i64,
        client_id: i64,
        payload: &RequestPayload,
    ) -> Result<Value, ProxHogarError> {
        self.api_call(
            &format!("/solicitudes/{request_id}?clienteId={client_id}"),
            Method::PUT,
            Some(&to_body(payload)?),
        )
        .await
    }

    pub async fn delete_request(
        &self,
        request_id: i64,
        client_id: i64,
    ) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/solicitudes/{request_id}?clienteId={client_id}"),
            Method::DELETE,
            None,
        )
        .await?;
        Ok(())
    }

    /// Client confirms completion after paying.
    pub async fn finalize_request(
        &self,
        request_id: i64,
        client_id: i64,
    ) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/solicitudes/{request_id}/finalizar?clienteId={client_id}"),
            Method::PUT,
            None,
        )
        .await?;
        Ok(())
    }

    // --- jobs (worker side) ---

    pub async fn available_requests(&self) -> Result<Vec<ServiceRequest>, ProxHogarError> {
        self.call("/solicitudes/disponibles", Method::GET, None)
            .await
    }

    pub async fn my_jobs(&self, user_id: i64) -> Result<Vec<ServiceRequest>, ProxHogarError> {
        self.call(
            &format!("/solicitudes/mis-trabajos?usuarioId={user_id}"),
            Method::GET,
            None,
        )
        .await
    }

    pub async fn start_job(&self, request_id: i64, user_id: i64) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/solicitudes/{request_id}/iniciar?trabajadorUsuarioId={user_id}"),
            Method::PUT,
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn finish_job(&self, request_id: i64, user_id: i64) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/solicitudes/{request_id}/trabajador-finalizar?trabajadorUsuarioId={user_id}"),
            Method::PUT,
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn verify_biometrics(
        &self,
        check: &BiometricCheck,
    ) -> Result<BiometricResult, ProxHogarError> {
        self.call(
            "/biometria/verificar",
            Method::POST,
            Some(&to_body(check)?),
        )
        .await
    }

    // --- offers ---

    pub async fn create_offer(
        &self,
        user_id: i64,
        payload: &OfferPayload,
    ) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/ofertas?trabajadorUsuarioId={user_id}"),
            Method::POST,
            Some(&to_body(payload)?),
        )
        .await?;
        Ok(())
    }

    pub async fn offers_for_request(&self, request_id: i64) -> Result<Vec<Offer>, ProxHogarError> {
        self.call(
            &format!("/ofertas/solicitud/{request_id}"),
            Method::GET,
            None,
        )
        .await
    }

    pub async fn accept_offer(&self, offer_id: i64) -> Result<(), ProxHogarError> {
        self.api_call(&format!("/ofertas/{offer_id}/aceptar"), Method::PUT, None)
            .await?;
        Ok(())
    }

    // --- reviews ---

    pub async fn create_review(&self, payload: &ReviewPayload) -> Result<(), ProxHogarError> {
        self.api_call("/resenas", Method::POST, Some(&to_body(payload)?))
            .await?;
        Ok(())
    }

    pub async fn reviews_for_user(&self, user_id: i64) -> Result<Vec<Review>, ProxHogarError> {
        self.call(&format!("/resenas/usuario/{user_id}"), Method::GET, None)
            .await
    }

    // --- subscriptions ---

    pub async fn plans(&self, role: ActiveRole) -> Result<Vec<SubscriptionPlan>, ProxHogarError> {
        self.call(
            &format!("/suscripciones/planes?rol={role}"),
            Method::GET,
            None,
        )
        .await
    }

    pub async fn subscribe(
        &self,
        user_id: i64,
        payload: &SubscribePayload,
    ) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/suscripciones/suscribir?usuarioId={user_id}"),
            Method::POST,
            Some(&to_body(payload)?),
        )
        .await?;
        Ok(())
    }

    // --- workers ---

    pub async fn worker_profile(&self, user_id: i64) -> Result<WorkerProfile, ProxHogarError> {
        self.call(
            &format!("/trabajadores/usuario/{user_id}"),
            Method::GET,
            None,
        )
        .await
    }
}

#[async_trait]
impl WorkerConversion for ApiClient {
    async fn convert_to_worker(
        &self,
        user_id: i64,
        request: &WorkerConversionRequest,
    ) -> Result<(), ProxHogarError> {
        self.api_call(
            &format!("/usuarios/convertir?usuarioId={user_id}"),
            Method::POST,
            Some(&to_body(request)?),
        )
        .await?;
        info!(user_id, "account converted to worker");
        Ok(())
    }
}
