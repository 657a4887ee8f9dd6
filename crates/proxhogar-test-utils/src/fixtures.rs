// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON fixtures shaped like backend responses.

use serde_json::{Value, json};

pub const TOKEN: &str = "tok-test";

/// A login response / stored session record.
pub fn session_json(user_id: i64, is_worker: bool, has_changed_to_worker: bool) -> Value {
    json!({
        "token": TOKEN,
        "usuarioId": user_id,
        "email": format!("user{user_id}@proxhogar.com"),
        "nombreCompleto": "Ana Torres",
        "esTrabajador": is_worker,
        "hasChangedToWorker": has_changed_to_worker,
    })
}

pub fn worker_json(user_id: i64, name: &str) -> Value {
    json!({
        "id": user_id + 1000,
        "usuario": { "id": user_id, "nombreCompleto": name },
        "biografia": "Gasfitero con experiencia",
        "calificacionPromedio": 4.5,
        "verificado": true,
    })
}

/// A service request in `status` with a suggested price of 80.
pub fn request_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "descripcion": format!("Solicitud {id}"),
        "direccion": "Av. España 123",
        "precioSugerido": 80.0,
        "estado": status,
        "categoriaId": 1,
    })
}

/// A request with a hired worker.
pub fn hired_request_json(id: i64, status: &str, worker_user_id: i64, worker_name: &str) -> Value {
    let mut request = request_json(id, status);
    request["trabajadorElegido"] = worker_json(worker_user_id, worker_name);
    request
}

pub fn offer_json(id: i64, request_id: i64, amount: f64, worker_user_id: i64) -> Value {
    json!({
        "id": id,
        "solicitudId": request_id,
        "montoOfrecido": amount,
        "comentario": "Puedo ir hoy",
        "trabajador": worker_json(worker_user_id, "Luis Ramos"),
    })
}

pub fn plan_json(id: i64, price: f64, role: &str) -> Value {
    json!({
        "id": id,
        "nombre": format!("Plan {id}"),
        "precio": price,
        "features": "Soporte prioritario|Sin comisiones",
        "recomendado": false,
        "periodo": "mes",
        "rol": role,
    })
}

pub fn categories_json() -> Value {
    json!([
        { "id": 1, "nombre": "Gasfitería" },
        { "id": 2, "nombre": "Electricidad" },
    ])
}
