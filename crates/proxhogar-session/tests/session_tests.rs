// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the session context.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use proptest::prelude::*;
use proxhogar_core::{
    ActiveRole, ProxHogarError, Session, SessionStore, WorkerConversion, WorkerConversionRequest,
};
use proxhogar_session::{FileSessionStore, MemorySessionStore, SessionContext};
use serde_json::{Value, json};

/// Conversion backend that counts calls and optionally fails.
#[derive(Default)]
struct CountingConversion {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl CountingConversion {
    fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkerConversion for CountingConversion {
    async fn convert_to_worker(
        &self,
        _user_id: i64,
        _request: &WorkerConversionRequest,
    ) -> Result<(), ProxHogarError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(ProxHogarError::Network {
                message: message.clone(),
                source: None,
            }),
            None => Ok(()),
        }
    }
}

fn session(is_worker: bool, changed: bool) -> Session {
    serde_json::from_value(json!({
        "token": "tok-123",
        "usuarioId": 42,
        "email": "ana@proxhogar.com",
        "nombreCompleto": "Ana Torres",
        "esTrabajador": is_worker,
        "hasChangedToWorker": changed
    }))
    .unwrap()
}

fn conversion_request() -> WorkerConversionRequest {
    WorkerConversionRequest {
        biography: "Gasfitero con experiencia".into(),
        reference_photo_url: "https://i.pravatar.cc/150?u=12345678".into(),
        dni: "12345678".into(),
        background_check_passed: true,
    }
}

fn context_with(
    store: Arc<MemorySessionStore>,
    conversion: Arc<CountingConversion>,
) -> SessionContext {
    SessionContext::new(store, conversion)
}

fn stored_json(store: &MemorySessionStore) -> Value {
    serde_json::from_str(&store.snapshot().expect("record stored")).unwrap()
}

#[tokio::test]
async fn login_as_unconverted_worker_persists_the_conversion_flag() {
    let store = Arc::new(MemorySessionStore::default());
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));

    ctx.login(session(true, false)).await.unwrap();

    let persisted = stored_json(&store);
    assert_eq!(persisted["hasChangedToWorker"], json!(true));
    assert_eq!(persisted["esTrabajador"], json!(true));
    assert_eq!(ctx.active_role().await, ActiveRole::Worker);
    assert_eq!(ctx.active_role().await.to_string(), "TRABAJADOR");
}

#[tokio::test]
async fn login_as_client_starts_in_client_view() {
    let store = Arc::new(MemorySessionStore::default());
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));

    ctx.login(session(false, false)).await.unwrap();

    assert_eq!(ctx.active_role().await, ActiveRole::Client);
    assert!(ctx.can_convert().await);
    assert_eq!(stored_json(&store)["hasChangedToWorker"], json!(false));
}

#[tokio::test]
async fn load_normalizes_in_memory_without_rewriting_the_store() {
    let raw = serde_json::to_string(&json!({
        "token": "tok-123",
        "usuarioId": 42,
        "esTrabajador": true,
        "hasChangedToWorker": false
    }))
    .unwrap();
    let store = Arc::new(MemorySessionStore::with_record(raw.clone()));
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));

    assert!(ctx.is_loading().await);
    ctx.load().await.unwrap();

    assert!(!ctx.is_loading().await);
    let user = ctx.user().await.unwrap();
    assert!(user.has_changed_to_worker);
    assert_eq!(ctx.active_role().await, ActiveRole::Worker);
    assert_eq!(store.snapshot().as_deref(), Some(raw.as_str()));
}

#[tokio::test]
async fn corrupt_record_is_cleared_and_loading_ends() {
    let store = Arc::new(MemorySessionStore::with_record("{\"token\": tru"));
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));

    ctx.load().await.unwrap();

    assert!(!ctx.is_loading().await);
    assert!(ctx.user().await.is_none());
    assert_eq!(store.snapshot(), None);
}

#[tokio::test]
async fn empty_store_loads_to_no_session() {
    let ctx = context_with(
        Arc::new(MemorySessionStore::default()),
        Arc::new(CountingConversion::default()),
    );
    ctx.load().await.unwrap();
    assert!(!ctx.is_loading().await);
    assert!(ctx.user().await.is_none());
    assert_eq!(ctx.active_role().await, ActiveRole::Client);
}

#[tokio::test]
async fn logout_clears_the_persisted_entry() {
    let store = Arc::new(MemorySessionStore::default());
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));
    ctx.login(session(true, true)).await.unwrap();

    ctx.logout().await.unwrap();

    assert!(ctx.user().await.is_none());
    assert_eq!(ctx.active_role().await, ActiveRole::Client);
    assert_eq!(store.load().await.unwrap(), None);

    let fresh = context_with(store, Arc::new(CountingConversion::default()));
    fresh.load().await.unwrap();
    assert!(fresh.user().await.is_none());
}

#[tokio::test]
async fn switching_an_existing_worker_is_a_no_op() {
    let store = Arc::new(MemorySessionStore::default());
    let conversion = Arc::new(CountingConversion::default());
    let ctx = context_with(store.clone(), conversion.clone());
    ctx.login(session(true, true)).await.unwrap();
    let before = store.snapshot();

    ctx.switch_to_worker_role(&conversion_request()).await.unwrap();

    assert_eq!(conversion.calls(), 0);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn switching_without_a_session_is_a_no_op() {
    let conversion = Arc::new(CountingConversion::default());
    let ctx = context_with(Arc::new(MemorySessionStore::default()), conversion.clone());
    ctx.load().await.unwrap();

    ctx.switch_to_worker_role(&conversion_request()).await.unwrap();

    assert_eq!(conversion.calls(), 0);
    assert!(ctx.user().await.is_none());
}

#[tokio::test]
async fn failed_conversion_leaves_everything_untouched() {
    let store = Arc::new(MemorySessionStore::default());
    let conversion = Arc::new(CountingConversion::failing("connection reset"));
    let ctx = context_with(store.clone(), conversion.clone());
    ctx.login(session(false, false)).await.unwrap();
    let before = store.snapshot();

    let err = ctx
        .switch_to_worker_role(&conversion_request())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("connection reset"));
    assert_eq!(conversion.calls(), 1);
    assert_eq!(store.snapshot(), before);
    let user = ctx.user().await.unwrap();
    assert!(!user.is_worker);
    assert!(!user.has_changed_to_worker);
    assert_eq!(ctx.active_role().await, ActiveRole::Client);
    assert!(!ctx.is_loading().await);
}

#[tokio::test]
async fn successful_conversion_marks_and_persists_the_worker() {
    let store = Arc::new(MemorySessionStore::default());
    let conversion = Arc::new(CountingConversion::default());
    let ctx = context_with(store.clone(), conversion.clone());
    ctx.login(session(false, false)).await.unwrap();

    ctx.switch_to_worker_role(&conversion_request()).await.unwrap();

    assert_eq!(conversion.calls(), 1);
    assert_eq!(ctx.active_role().await, ActiveRole::Worker);
    assert!(!ctx.can_convert().await);
    let persisted = stored_json(&store);
    assert_eq!(persisted["esTrabajador"], json!(true));
    assert_eq!(persisted["hasChangedToWorker"], json!(true));
    assert_eq!(persisted["token"], json!("tok-123"));
}

#[tokio::test]
async fn toggle_only_applies_to_loaded_workers() {
    let store = Arc::new(MemorySessionStore::default());
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));

    // Still loading.
    assert_eq!(ctx.toggle_role_view().await, None);
    ctx.load().await.unwrap();

    ctx.login(session(false, false)).await.unwrap();
    assert_eq!(ctx.toggle_role_view().await, None);

    ctx.login(session(true, true)).await.unwrap();
    let before = store.snapshot();
    assert_eq!(ctx.toggle_role_view().await, Some(ActiveRole::Client));
    assert_eq!(ctx.toggle_role_view().await, Some(ActiveRole::Worker));

    let user = ctx.user().await.unwrap();
    assert!(user.is_worker && user.has_changed_to_worker);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn extra_login_fields_survive_the_store() {
    let store = Arc::new(MemorySessionStore::default());
    let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));
    let mut user = session(false, false);
    user.extra.insert("telefono".into(), json!("999888777"));

    ctx.login(user).await.unwrap();

    assert_eq!(stored_json(&store)["telefono"], json!("999888777"));
}

#[tokio::test]
async fn file_backed_session_survives_a_new_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proxhogar").join("session.json");

    let first = SessionContext::new(
        Arc::new(FileSessionStore::new(&path)),
        Arc::new(CountingConversion::default()),
    );
    first.login(session(true, false)).await.unwrap();

    let second = SessionContext::new(
        Arc::new(FileSessionStore::new(&path)),
        Arc::new(CountingConversion::default()),
    );
    second.load().await.unwrap();
    let user = second.user().await.unwrap();
    assert_eq!(user.token, "tok-123");
    assert!(user.has_changed_to_worker);
}

#[tokio::test]
async fn non_utf8_session_file_is_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, [0xff, 0xfe, b'{', 0x80]).unwrap();

    let ctx = SessionContext::new(
        Arc::new(FileSessionStore::new(&path)),
        Arc::new(CountingConversion::default()),
    );
    ctx.load().await.unwrap();

    assert!(!ctx.is_loading().await);
    assert!(ctx.user().await.is_none());
    assert!(!path.exists());

    ctx.login(session(false, false)).await.unwrap();
    assert!(path.exists());
}

proptest! {
    #[test]
    fn conversion_flag_never_resets(
        is_worker in any::<bool>(),
        changed in any::<bool>(),
        rounds in 1usize..4,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let store = Arc::new(MemorySessionStore::default());
            let ctx = context_with(store.clone(), Arc::new(CountingConversion::default()));
            ctx.login(session(is_worker, changed)).await.unwrap();
            let expected = is_worker || changed;

            for _ in 0..rounds {
                let reloaded = context_with(store.clone(), Arc::new(CountingConversion::default()));
                reloaded.load().await.unwrap();
                let user = reloaded.user().await.unwrap();
                prop_assert_eq!(user.has_changed_to_worker, expected);

                ctx.login(user).await.unwrap();
                prop_assert_eq!(stored_json(&store)["hasChangedToWorker"].as_bool(), Some(expected));
            }
            Ok(())
        })?;
    }
}
