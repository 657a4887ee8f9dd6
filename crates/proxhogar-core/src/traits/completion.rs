// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-completion trait used by the description enhancer.

use async_trait::async_trait;

use crate::error::ProxHogarError;

/// Rewrites free text given a prompt.
#[async_trait]
pub trait TextCompleter: Send + Sync {
    /// Short identifier for logs ("gemini", "stub").
    fn name(&self) -> &str;

    /// Returns the completion text for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, ProxHogarError>;
}
