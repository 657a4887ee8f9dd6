// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client dashboard flows against a wiremock backend.

use std::sync::Arc;

use proxhogar_core::{PaymentMethod, ProxHogarError, RequestStatus};
use proxhogar_dashboard::client::SELECT_RATING;
use proxhogar_dashboard::payment::SELECT_PAYMENT_METHOD;
use proxhogar_dashboard::{ClientDashboard, ClientTab, RequestForm};
use proxhogar_test_utils::fixtures::{categories_json, hired_request_json, request_json};
use proxhogar_test_utils::{RecordingPayments, TestHarness};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const MY_REQUESTS: &str = "/solicitudes/mis-pedidos";

async fn harness_with_requests(requests: serde_json::Value) -> TestHarness {
    let h = TestHarness::builder().build().await.unwrap();
    h.respond("GET", "/categorias", categories_json()).await;
    Mock::given(method("GET"))
        .and(path(MY_REQUESTS))
        .and(query_param("clienteId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(requests))
        .mount(&h.server)
        .await;
    h
}

async fn loaded_dashboard(
    h: &TestHarness,
    payments: Arc<RecordingPayments>,
) -> ClientDashboard {
    let mut dashboard = ClientDashboard::new(h.api.clone(), h.session.clone(), payments);
    dashboard.load().await.unwrap();
    dashboard
}

#[tokio::test]
async fn load_fetches_categories_and_requests() {
    let h = harness_with_requests(json!([
        request_json(1, "PENDIENTE"),
        request_json(2, "FINALIZADA"),
        request_json(3, "OFERTANDO"),
    ]))
    .await;
    let dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    let view = dashboard.view();
    assert_eq!(view.categories.len(), 2);
    assert_eq!(view.requests.len(), 3);

    let active: Vec<i64> = view.tab(ClientTab::Active).iter().map(|r| r.id).collect();
    assert_eq!(active, vec![1, 3]);
    let history: Vec<i64> = view.tab(ClientTab::History).iter().map(|r| r.id).collect();
    assert_eq!(history, vec![2]);
}

#[tokio::test]
async fn load_without_user_id_logs_out() {
    let mut record = proxhogar_test_utils::fixtures::session_json(42, false, false);
    record.as_object_mut().unwrap().remove("usuarioId");
    let h = TestHarness::builder().with_session(record).build().await.unwrap();

    let mut dashboard = ClientDashboard::new(
        h.api.clone(),
        h.session.clone(),
        Arc::new(RecordingPayments::new()),
    );
    let err = dashboard.load().await.unwrap_err();
    assert!(matches!(err, ProxHogarError::NotAuthenticated));
    assert!(h.session.user().await.is_none());
    assert!(h.store.snapshot().is_none());
    assert_eq!(h.hits("GET", "/categorias").await, 0);
}

#[tokio::test]
async fn create_request_posts_payload_then_reloads() {
    let h = harness_with_requests(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/solicitudes"))
        .and(query_param("clienteId", "42"))
        .and(body_json(json!({
            "categoriaId": 1,
            "descripcion": "Cambiar caño de la cocina",
            "precioSugerido": 60.0,
            "direccion": "Jr. Pizarro 450",
            "referencia": "Web",
            "latitud": -8.11,
            "longitud": -79.03,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_json(10, "PENDIENTE")))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;
    let form = RequestForm {
        description: "Cambiar caño de la cocina".into(),
        price: "60".into(),
        address: "Jr. Pizarro 450".into(),
        ..RequestForm::default()
    };
    dashboard.create_request(&form).await.unwrap();
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 2);
}

#[tokio::test]
async fn invalid_form_fails_before_any_call() {
    let h = harness_with_requests(json!([])).await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    let err = dashboard
        .create_request(&RequestForm::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProxHogarError::Validation(_)));
    assert_eq!(h.hits("POST", "/solicitudes").await, 0);
}

#[tokio::test]
async fn failed_delete_leaves_lists_unchanged() {
    let h = harness_with_requests(json!([request_json(5, "PENDIENTE")])).await;
    h.fail("DELETE", "/solicitudes/5", 500, "Error al eliminar").await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    let err = dashboard.delete_request(5).await.unwrap_err();
    assert_eq!(err.to_string(), "Error al eliminar");
    assert_eq!(err.status(), Some(500));
    assert_eq!(dashboard.view().requests.len(), 1);
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 1);
}

#[tokio::test]
async fn actions_outside_the_status_table_are_refused() {
    let h = harness_with_requests(json!([request_json(6, "OFERTANDO")])).await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    assert!(dashboard.delete_request(6).await.is_err());
    assert!(dashboard.pay_and_finalize(6, Some(PaymentMethod::Card)).await.is_err());
    assert!(dashboard.delete_request(999).await.is_err());
    assert_eq!(h.hits("DELETE", "/solicitudes/6").await, 0);
}

#[tokio::test]
async fn offers_are_listed_for_bidding_requests() {
    let h = harness_with_requests(json!([request_json(6, "OFERTANDO")])).await;
    h.respond(
        "GET",
        "/ofertas/solicitud/6",
        json!([proxhogar_test_utils::fixtures::offer_json(1, 6, 70.0, 77)]),
    )
    .await;
    h.respond_empty("PUT", "/ofertas/1/aceptar").await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    let offers = dashboard.offers(6).await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].worker.user.id, 77);

    dashboard.accept_offer(offers[0].id).await.unwrap();
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 2);
}

#[tokio::test]
async fn paying_opens_a_review_for_the_hired_worker() {
    let h = harness_with_requests(json!([hired_request_json(
        7,
        "FINALIZADO_POR_TRABAJADOR",
        77,
        "Luis Ramos"
    )]))
    .await;
    h.respond_empty("PUT", "/solicitudes/7/finalizar").await;
    let payments = Arc::new(RecordingPayments::new());
    let mut dashboard = loaded_dashboard(&h, payments.clone()).await;

    let review = dashboard
        .pay_and_finalize(7, Some(PaymentMethod::Yape))
        .await
        .unwrap()
        .expect("worker is known");
    assert_eq!(review.worker_user_id, 77);
    assert_eq!(review.worker_name, "Luis Ramos");

    let charges = payments.charges().await;
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].amount, 80.0);
    assert_eq!(charges[0].method, PaymentMethod::Yape);
    assert_eq!(dashboard.view().pending_review.as_ref(), Some(&review));
    // The review is shown first; lists are reloaded once it is sent.
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 1);
}

#[tokio::test]
async fn paying_without_a_method_charges_nothing() {
    let h = harness_with_requests(json!([request_json(8, "FINALIZADO_POR_TRABAJADOR")])).await;
    let payments = Arc::new(RecordingPayments::new());
    let mut dashboard = loaded_dashboard(&h, payments.clone()).await;

    let err = dashboard.pay_and_finalize(8, None).await.unwrap_err();
    assert_eq!(err.to_string(), SELECT_PAYMENT_METHOD);
    assert!(payments.charges().await.is_empty());
    assert_eq!(h.hits("PUT", "/solicitudes/8/finalizar").await, 0);
}

#[tokio::test]
async fn paying_with_unknown_worker_reloads_instead() {
    let h = harness_with_requests(json!([request_json(8, "FINALIZADO_POR_TRABAJADOR")])).await;
    h.respond_empty("PUT", "/solicitudes/8/finalizar").await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    let review = dashboard
        .pay_and_finalize(8, Some(PaymentMethod::Card))
        .await
        .unwrap();
    assert!(review.is_none());
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 2);
}

#[tokio::test]
async fn declined_payment_does_not_finalize() {
    let h = harness_with_requests(json!([request_json(8, "FINALIZADO_POR_TRABAJADOR")])).await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::declining())).await;

    assert!(
        dashboard
            .pay_and_finalize(8, Some(PaymentMethod::Card))
            .await
            .is_err()
    );
    assert_eq!(h.hits("PUT", "/solicitudes/8/finalizar").await, 0);
    assert_eq!(dashboard.view().requests[0].status, RequestStatus::WorkerFinished);
}

#[tokio::test]
async fn review_requires_a_rating_then_posts_and_reloads() {
    let h = harness_with_requests(json!([hired_request_json(
        7,
        "FINALIZADA",
        77,
        "Luis Ramos"
    )]))
    .await;
    Mock::given(method("POST"))
        .and(path("/resenas"))
        .and(body_json(json!({
            "solicitudId": 7,
            "usuarioCalificadoId": 77,
            "estrellas": 5,
            "comentario": "Excelente",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&h.server)
        .await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    dashboard.start_review(7).unwrap();

    let err = dashboard.submit_review(0, "Excelente").await.unwrap_err();
    assert_eq!(err.to_string(), SELECT_RATING);
    assert!(dashboard.view().pending_review.is_some());

    dashboard.submit_review(5, "Excelente").await.unwrap();
    assert!(dashboard.view().pending_review.is_none());
    assert_eq!(h.hits("GET", MY_REQUESTS).await, 2);
}

#[tokio::test]
async fn only_finalized_requests_can_be_reviewed() {
    let h = harness_with_requests(json!([hired_request_json(7, "EN_PROCESO", 77, "Luis")])).await;
    let mut dashboard = loaded_dashboard(&h, Arc::new(RecordingPayments::new())).await;

    assert!(dashboard.start_review(7).is_err());
    assert!(dashboard.submit_review(5, "").await.is_err());
}
