//! Health check endpoints for service monitoring.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "OK" while the process is serving
    pub status: &'static str,

    /// Name of the answering service
    pub service: &'static str,
}

/// User service health check.
///
/// Does not touch storage.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "OK", "service": "user-service" }
/// ```
pub async fn user_service_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: "user-service",
    })
}

/// Transaction service health check.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "OK", "service": "transaction-service" }
/// ```
pub async fn transaction_service_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: "transaction-service",
    })
}
