// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment processing trait.

use async_trait::async_trait;

use crate::error::ProxHogarError;
use crate::types::{PaymentMethod, PaymentReceipt};

/// Charges the client before a request is finalized or a plan activated.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(
        &self,
        amount: f64,
        method: PaymentMethod,
    ) -> Result<PaymentReceipt, ProxHogarError>;
}
