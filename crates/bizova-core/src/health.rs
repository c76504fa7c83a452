use axum::http::StatusCode;

/// `GET /healthz`: liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: readiness. Services with external dependencies route their
/// own handler here instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
