use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use bizova_auth_types::cookie::access_token_from_headers;
use bizova_auth_types::token::SessionClaims;
use bizova_core::error::AppError;
use bizova_domain::id::UserId;

use crate::domain::repository::SessionGate;
use crate::state::AppState;

/// Authenticated caller, resolved from the `bizova_access_token` cookie.
///
/// Handlers that need a signed-in user take this as an argument; a missing,
/// expired or forged token rejects the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct Session {
    pub claims: SessionClaims,
}

impl Session {
    pub fn user_id(&self) -> UserId {
        UserId(self.claims.user_id)
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = access_token_from_headers(&parts.headers)
            .and_then(|token| state.gate.validate_session(&token))
            .map(|claims| Session { claims });

        async move { session.ok_or(AppError::Unauthorized) }
    }
}
