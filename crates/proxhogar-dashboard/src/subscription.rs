// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subscription plans for the active role.

use std::sync::Arc;

use proxhogar_api::{ApiClient, SubscribePayload, SubscriptionPlan};
use proxhogar_core::{PaymentMethod, PaymentProcessor, PaymentReceipt, ProxHogarError};
use proxhogar_session::SessionContext;
use tracing::info;

use crate::payment::checkout;

/// Every subscription is bought one month at a time.
pub const SUBSCRIPTION_MONTHS: u32 = 1;

pub const SUBSCRIPTION_ACTIVATED: &str = "¡Suscripción activada con éxito!";

pub struct Subscriptions {
    api: ApiClient,
    session: Arc<SessionContext>,
    payments: Arc<dyn PaymentProcessor>,
}

impl Subscriptions {
    pub fn new(
        api: ApiClient,
        session: Arc<SessionContext>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            api,
            session,
            payments,
        }
    }

    /// Plans offered to the role currently presented.
    pub async fn plans(&self) -> Result<Vec<SubscriptionPlan>, ProxHogarError> {
        let role = self.session.active_role().await;
        self.api.plans(role).await
    }

    /// Subscribes the user to `plan`.
    ///
    /// Free plans skip checkout and `method` is ignored. Paid plans are
    /// charged first; nothing is sent to the backend if payment fails.
    pub async fn subscribe(
        &self,
        plan: &SubscriptionPlan,
        method: Option<PaymentMethod>,
    ) -> Result<Option<PaymentReceipt>, ProxHogarError> {
        let user_id = self.session.require_user().await?.require_user_id()?;

        let receipt = if plan.is_free() {
            None
        } else {
            Some(checkout(self.payments.as_ref(), plan.price, method).await?)
        };

        self.api
            .subscribe(
                user_id,
                &SubscribePayload {
                    plan_id: plan.id,
                    months: SUBSCRIPTION_MONTHS,
                },
            )
            .await?;
        info!(plan_id = plan.id, paid = receipt.is_some(), "subscription activated");
        Ok(receipt)
    }
}
