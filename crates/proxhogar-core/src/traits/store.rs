// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session persistence trait.

use async_trait::async_trait;

use crate::error::ProxHogarError;

/// Persists the single serialized session record.
///
/// The store deals in raw strings: parsing and normalization belong to the
/// session context, and a corrupt record must be observable as-is so it can
/// be cleared.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored record, or `None` when nothing is stored.
    async fn load(&self) -> Result<Option<String>, ProxHogarError>;

    /// Replaces the stored record.
    async fn save(&self, record: &str) -> Result<(), ProxHogarError>;

    /// Removes the stored record. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), ProxHogarError>;

    /// Where the record lives, for diagnostics.
    fn location(&self) -> String;
}
