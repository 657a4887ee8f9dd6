// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkout shared by request payment and paid subscriptions.

use proxhogar_core::{PaymentMethod, PaymentProcessor, PaymentReceipt, ProxHogarError};
use tracing::debug;

pub const SELECT_PAYMENT_METHOD: &str = "Selecciona un método de pago";

/// Charges `amount` through `processor` once a method has been picked.
pub async fn checkout(
    processor: &dyn PaymentProcessor,
    amount: f64,
    method: Option<PaymentMethod>,
) -> Result<PaymentReceipt, ProxHogarError> {
    let method =
        method.ok_or_else(|| ProxHogarError::Validation(SELECT_PAYMENT_METHOD.to_string()))?;
    debug!(amount, %method, "starting checkout");
    processor.process(amount, method).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedPaymentProcessor;

    #[tokio::test]
    async fn missing_method_is_rejected() {
        let err = checkout(&SimulatedPaymentProcessor::default(), 10.0, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SELECT_PAYMENT_METHOD);
    }

    #[tokio::test]
    async fn chosen_method_is_charged() {
        let receipt = checkout(
            &SimulatedPaymentProcessor::default(),
            10.0,
            Some(PaymentMethod::Card),
        )
        .await
        .unwrap();
        assert_eq!(receipt.method, PaymentMethod::Card);
    }
}
