// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewrites a short request description through a text-completion service.

use std::sync::Arc;

use proxhogar_core::TextCompleter;
use tracing::{debug, warn};

/// Returned in place of a suggestion when the service call fails.
pub const COMPLETION_UNAVAILABLE: &str = "Error al conectar con IA.";

pub struct DescriptionEnhancer {
    completer: Arc<dyn TextCompleter>,
}

impl DescriptionEnhancer {
    pub fn new(completer: Arc<dyn TextCompleter>) -> Self {
        Self { completer }
    }

    pub fn prompt(description: &str) -> String {
        format!(
            "Mejora esta descripción corta para una solicitud de trabajo en casa \
             (sé conciso, profesional y claro): \"{description}\""
        )
    }

    /// Suggests a better wording for `description`.
    ///
    /// A blank description comes back unchanged without calling the service.
    /// Service failures are logged and replaced by [`COMPLETION_UNAVAILABLE`].
    pub async fn enhance(&self, description: &str) -> String {
        if description.trim().is_empty() {
            return description.to_string();
        }
        debug!(completer = self.completer.name(), "enhancing description");
        match self.completer.complete(&Self::prompt(description)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "text completion failed");
                COMPLETION_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_quotes_the_description() {
        assert_eq!(
            DescriptionEnhancer::prompt("arreglar caño"),
            "Mejora esta descripción corta para una solicitud de trabajo en casa \
             (sé conciso, profesional y claro): \"arreglar caño\""
        );
    }
}
