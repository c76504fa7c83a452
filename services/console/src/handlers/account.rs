use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::{Account, Business};
use crate::error::ConsoleError;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::account::GetAccountUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub business: BusinessResponse,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Business> for BusinessResponse {
    fn from(b: Business) -> Self {
        Self {
            id: b.id.0,
            name: b.name,
            email: b.email,
            phone: b.phone,
            location: b.location,
            created_at: b.created_at,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(Account { profile, business }: Account) -> Self {
        Self {
            id: profile.id.0,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            email: profile.email,
            business: business.into(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── GET /me ──────────────────────────────────────────────────────────────────

pub async fn get_me(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ConsoleError> {
    let usecase = GetAccountUseCase {
        profiles: state.profile_repo(),
    };
    let account = usecase.execute(session.user_id()).await?;
    Ok(Json(account.into()))
}
