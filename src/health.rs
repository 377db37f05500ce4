use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::shared::store::{collections, DocumentStore};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the document store is reachable
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<DocumentStore>>) -> impl Responder {
    let store_status = match store.count(collections::PROFILE) {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            store: store_status,
        })
    }
}
