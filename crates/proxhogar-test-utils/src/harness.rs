// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end dashboard tests.
//!
//! `TestHarness` starts a wiremock backend and wires an [`ApiClient`] and a
//! loaded [`SessionContext`] to it over an in-memory session store.

use std::sync::Arc;

use proxhogar_api::ApiClient;
use proxhogar_core::ProxHogarError;
use proxhogar_session::{MemorySessionStore, SessionContext};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    session: Option<Value>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            session: Some(fixtures::session_json(42, false, false)),
        }
    }

    /// Start with `record` stored as the session.
    pub fn with_session(mut self, record: Value) -> Self {
        self.session = Some(record);
        self
    }

    /// Start logged in as a worker account.
    pub fn as_worker(self, user_id: i64) -> Self {
        self.with_session(fixtures::session_json(user_id, true, true))
    }

    /// Start with no stored session.
    pub fn anonymous(mut self) -> Self {
        self.session = None;
        self
    }

    /// Build the harness and load the session from the store.
    pub async fn build(self) -> Result<TestHarness, ProxHogarError> {
        let server = MockServer::start().await;
        let store = Arc::new(match self.session {
            Some(record) => MemorySessionStore::with_record(record.to_string()),
            None => MemorySessionStore::default(),
        });

        let api = ApiClient::new(server.uri(), None, store.clone())?;
        let session = Arc::new(SessionContext::new(store.clone(), Arc::new(api.clone())));
        session.load().await?;

        Ok(TestHarness {
            server,
            store,
            api,
            session,
        })
    }
}

/// A mock backend plus a client and session context pointing at it.
pub struct TestHarness {
    pub server: MockServer,
    pub store: Arc<MemorySessionStore>,
    pub api: ApiClient,
    pub session: Arc<SessionContext>,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Answers `verb` on `route` (path only, query ignored) with `body`.
    pub async fn respond(&self, verb: &str, route: &str, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers `verb` on `route` with an empty 204.
    pub async fn respond_empty(&self, verb: &str, route: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Answers `verb` on `route` with `status` and a `{"message": ..}` body.
    pub async fn fail(&self, verb: &str, route: &str, status: u16, message: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(serde_json::json!({ "message": message })),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of received requests matching `verb` and `route`.
    pub async fn hits(&self, verb: &str, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == verb && r.url.path() == route)
            .count()
    }

    /// The stored session record, parsed.
    pub fn stored_session(&self) -> Option<Value> {
        self.store
            .snapshot()
            .and_then(|s| serde_json::from_str(&s).ok())
    }
}
