// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-conversion trait.

use async_trait::async_trait;

use crate::error::ProxHogarError;
use crate::types::WorkerConversionRequest;

/// Performs the one-time client-to-worker conversion on the backend.
#[async_trait]
pub trait WorkerConversion: Send + Sync {
    async fn convert_to_worker(
        &self,
        user_id: i64,
        request: &WorkerConversionRequest,
    ) -> Result<(), ProxHogarError>;
}
