use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizova_domain::content::AppointmentStatus;
use bizova_domain::pagination::PageRequest;

use crate::domain::types::Appointment;
use crate::error::ConsoleError;
use crate::handlers::status_filter;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::appointment::{
    GetAppointmentUseCase, GetAppointmentsUseCase, SetAppointmentStatusUseCase,
};

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: Option<String>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            client_name: a.client_name,
            client_email: a.client_email,
            scheduled_at: a.scheduled_at,
            status: a.status,
            notes: a.notes,
            created_at: a.created_at,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AppointmentListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

// ── GET /dashboard/appointments ──────────────────────────────────────────────

pub async fn get_appointments(
    session: Session,
    State(state): State<AppState>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, ConsoleError> {
    let status = status_filter(query.status.as_deref(), AppointmentStatus::parse)?;
    let page = PageRequest::from_query(query.per_page, query.page);

    let usecase = GetAppointmentsUseCase {
        profiles: state.profile_repo(),
        repo: state.appointment_repo(),
    };
    let items = usecase.execute(session.user_id(), status, page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /dashboard/appointments/{id} ─────────────────────────────────────────

pub async fn get_appointment(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, ConsoleError> {
    let usecase = GetAppointmentUseCase {
        profiles: state.profile_repo(),
        repo: state.appointment_repo(),
    };
    let appointment = usecase.execute(session.user_id(), id).await?;
    Ok(Json(appointment.into()))
}

// ── PATCH /dashboard/appointments/{id} ───────────────────────────────────────

pub async fn set_appointment_status(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetStatusRequest>,
) -> Result<StatusCode, ConsoleError> {
    let status = AppointmentStatus::parse(&body.status).ok_or(ConsoleError::InvalidStatus)?;
    let usecase = SetAppointmentStatusUseCase {
        profiles: state.profile_repo(),
        repo: state.appointment_repo(),
    };
    usecase.execute(session.user_id(), id, status).await?;
    Ok(StatusCode::NO_CONTENT)
}
