// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client dashboard: own requests, offers, payment and review.
//!
//! Lists are never patched locally. Every successful mutation re-fetches
//! them; a failed call leaves the view exactly as it was.

use std::sync::Arc;

use proxhogar_api::{
    ApiClient, Category, Offer, RequestPayload, ReviewPayload, ServiceRequest,
    types::REQUEST_REFERENCE,
};
use proxhogar_core::{PaymentMethod, PaymentProcessor, ProxHogarError, RequestStatus};
use proxhogar_session::SessionContext;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::actions::{ClientAction, ClientTab, client_actions, filter_by};
use crate::payment::checkout;

pub const DEFAULT_CATEGORY_ID: i64 = 1;
pub const DEFAULT_LATITUDE: f64 = -8.11;
pub const DEFAULT_LONGITUDE: f64 = -79.03;

/// Name used for a hired worker whose account has no name.
pub const DEFAULT_WORKER_NAME: &str = "Trabajador";

pub const SELECT_RATING: &str = "Selecciona una calificación";

/// The create/edit request form as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestForm {
    pub category_id: i64,
    pub description: String,
    /// Raw price input; parsed on submit.
    pub price: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY_ID,
            description: String::new(),
            price: String::new(),
            address: String::new(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl RequestForm {
    /// Prefills the form for editing an existing request.
    pub fn from_request(request: &ServiceRequest) -> Self {
        Self {
            category_id: request.category_id.unwrap_or(DEFAULT_CATEGORY_ID),
            description: request.description.clone(),
            price: request
                .suggested_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            address: request.address.clone(),
            latitude: request.latitude.unwrap_or(DEFAULT_LATITUDE),
            longitude: request.longitude.unwrap_or(DEFAULT_LONGITUDE),
        }
    }

    /// Validates the form and builds the request body.
    pub fn to_payload(&self) -> Result<RequestPayload, ProxHogarError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ProxHogarError::Validation(
                "La descripción es obligatoria.".into(),
            ));
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(ProxHogarError::Validation(
                "La dirección es obligatoria.".into(),
            ));
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| {
                ProxHogarError::Validation("Ingresa un precio sugerido válido.".into())
            })?;

        Ok(RequestPayload {
            category_id: self.category_id,
            description: description.to_string(),
            suggested_price: price,
            address: address.to_string(),
            reference: REQUEST_REFERENCE.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

/// A review the client still owes the worker of a finished request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingReview {
    pub request_id: i64,
    pub worker_user_id: i64,
    pub worker_name: String,
}

impl PendingReview {
    fn for_request(request: &ServiceRequest) -> Option<Self> {
        let worker = request.chosen_worker.as_ref()?;
        let name = worker.user.full_name.trim();
        Some(Self {
            request_id: request.id,
            worker_user_id: worker.user.id,
            worker_name: if name.is_empty() {
                DEFAULT_WORKER_NAME.to_string()
            } else {
                name.to_string()
            },
        })
    }
}

/// What the client dashboard currently shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientView {
    pub categories: Vec<Category>,
    pub requests: Vec<ServiceRequest>,
    pub pending_review: Option<PendingReview>,
}

impl ClientView {
    pub fn tab(&self, tab: ClientTab) -> Vec<&ServiceRequest> {
        filter_by(&self.requests, |s| tab.includes(s))
    }

    pub fn find(&self, request_id: i64) -> Option<&ServiceRequest> {
        self.requests.iter().find(|r| r.id == request_id)
    }
}

pub struct ClientDashboard {
    api: ApiClient,
    session: Arc<SessionContext>,
    payments: Arc<dyn PaymentProcessor>,
    view: ClientView,
}

impl ClientDashboard {
    pub fn new(
        api: ApiClient,
        session: Arc<SessionContext>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            api,
            session,
            payments,
            view: ClientView::default(),
        }
    }

    pub fn view(&self) -> &ClientView {
        &self.view
    }

    /// Fetches categories and the client's requests.
    ///
    /// A session without a user id is stale: it is logged out and the call
    /// fails with [`ProxHogarError::NotAuthenticated`].
    pub async fn load(&mut self) -> Result<(), ProxHogarError> {
        let Some(client_id) = self.session.user().await.and_then(|u| u.user_id) else {
            warn!("session has no user id, logging out");
            self.session.logout().await?;
            return Err(ProxHogarError::NotAuthenticated);
        };

        let (categories, requests) =
            futures::try_join!(self.api.categories(), self.api.my_requests(client_id))?;
        debug!(
            categories = categories.len(),
            requests = requests.len(),
            "client dashboard loaded"
        );
        self.view.categories = categories;
        self.view.requests = requests;
        Ok(())
    }

    pub async fn create_request(&mut self, form: &RequestForm) -> Result<(), ProxHogarError> {
        let payload = form.to_payload()?;
        let client_id = self.client_id().await?;
        self.api.create_request(client_id, &payload).await?;
        info!(client_id, "request created");
        self.load().await
    }

    pub async fn update_request(
        &mut self,
        request_id: i64,
        form: &RequestForm,
    ) -> Result<(), ProxHogarError> {
        self.ensure(request_id, ClientAction::Edit)?;
        let payload = form.to_payload()?;
        let client_id = self.client_id().await?;
        self.api
            .update_request(request_id, client_id, &payload)
            .await?;
        info!(request_id, "request updated");
        self.load().await
    }

    pub async fn delete_request(&mut self, request_id: i64) -> Result<(), ProxHogarError> {
        self.ensure(request_id, ClientAction::Delete)?;
        let client_id = self.client_id().await?;
        self.api.delete_request(request_id, client_id).await?;
        info!(request_id, "request deleted");
        self.load().await
    }

    /// Offers received by a request that is taking bids.
    pub async fn offers(&self, request_id: i64) -> Result<Vec<Offer>, ProxHogarError> {
        self.ensure(request_id, ClientAction::ViewOffers)?;
        self.api.offers_for_request(request_id).await
    }

    pub async fn accept_offer(&mut self, offer_id: i64) -> Result<(), ProxHogarError> {
        self.api.accept_offer(offer_id).await?;
        info!(offer_id, "offer accepted");
        self.load().await
    }

    /// Pays for a request the worker has finished, then finalizes it.
    ///
    /// Returns the review now owed to the hired worker. When the worker is
    /// unknown there is nothing to review and the lists are reloaded instead.
    pub async fn pay_and_finalize(
        &mut self,
        request_id: i64,
        method: Option<PaymentMethod>,
    ) -> Result<Option<PendingReview>, ProxHogarError> {
        let request = self.ensure(request_id, ClientAction::Pay)?.clone();
        let client_id = self.client_id().await?;

        let amount = request.suggested_price.unwrap_or_default();
        checkout(self.payments.as_ref(), amount, method).await?;
        self.api.finalize_request(request_id, client_id).await?;
        info!(request_id, amount, "request paid and finalized");

        match PendingReview::for_request(&request) {
            Some(review) => {
                self.view.pending_review = Some(review.clone());
                Ok(Some(review))
            }
            None => {
                self.load().await?;
                Ok(None)
            }
        }
    }

    /// Opens a review for an already finalized request.
    pub fn start_review(&mut self, request_id: i64) -> Result<PendingReview, ProxHogarError> {
        let request = self.request(request_id)?;
        if request.status != RequestStatus::Finalized {
            return Err(ProxHogarError::Validation(
                "Solo puedes calificar solicitudes finalizadas.".into(),
            ));
        }
        let review = PendingReview::for_request(request).ok_or_else(|| {
            ProxHogarError::Validation("La solicitud no tiene un trabajador asignado.".into())
        })?;
        self.view.pending_review = Some(review.clone());
        Ok(review)
    }

    /// Sends the pending review. `rating` must be 1 to 5.
    pub async fn submit_review(&mut self, rating: u8, comment: &str) -> Result<(), ProxHogarError> {
        let review = self.view.pending_review.clone().ok_or_else(|| {
            ProxHogarError::Validation("No hay ninguna calificación pendiente.".into())
        })?;
        if rating == 0 {
            return Err(ProxHogarError::Validation(SELECT_RATING.into()));
        }
        if rating > 5 {
            return Err(ProxHogarError::Validation(
                "La calificación debe estar entre 1 y 5.".into(),
            ));
        }

        self.api
            .create_review(&ReviewPayload {
                request_id: review.request_id,
                rated_user_id: review.worker_user_id,
                stars: rating,
                comment: comment.to_string(),
            })
            .await?;
        info!(request_id = review.request_id, rating, "review submitted");

        self.view.pending_review = None;
        self.load().await
    }

    /// Drops the pending review without sending it.
    pub fn dismiss_review(&mut self) {
        self.view.pending_review = None;
    }

    fn request(&self, request_id: i64) -> Result<&ServiceRequest, ProxHogarError> {
        self.view.find(request_id).ok_or_else(|| {
            ProxHogarError::Validation(format!("No se encontró la solicitud {request_id}."))
        })
    }

    fn ensure(
        &self,
        request_id: i64,
        action: ClientAction,
    ) -> Result<&ServiceRequest, ProxHogarError> {
        let request = self.request(request_id)?;
        if !client_actions(request.status).contains(&action) {
            return Err(ProxHogarError::Validation(format!(
                "La solicitud {request_id} está en estado «{}» y no permite esta acción.",
                request.status.label()
            )));
        }
        Ok(request)
    }

    async fn client_id(&self) -> Result<i64, ProxHogarError> {
        self.session.require_user().await?.require_user_id()
    }
}
