use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizova_domain::content::{NotificationKind, ReadFilter};
use bizova_domain::pagination::PageRequest;

use crate::domain::types::Notification;
use crate::error::ConsoleError;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::notification::{
    DeleteNotificationUseCase, GetNotificationUseCase, GetNotificationsUseCase,
    MarkAllNotificationsReadUseCase, MarkNotificationReadUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            kind: n.kind,
            title: n.title,
            description: n.description,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct NotificationListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    /// `all`, `unread` or `read`; anything else lists everything.
    pub filter: Option<String>,
}

// ── GET /dashboard/notifications ─────────────────────────────────────────────

pub async fn get_notifications(
    session: Session,
    State(state): State<AppState>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Vec<NotificationResponse>>, ConsoleError> {
    let filter = query
        .filter
        .as_deref()
        .and_then(ReadFilter::from_kebab_case)
        .unwrap_or_default();
    let page = PageRequest::from_query(query.per_page, query.page);

    let usecase = GetNotificationsUseCase {
        profiles: state.profile_repo(),
        repo: state.notification_repo(),
    };
    let items = usecase.execute(session.user_id(), filter, page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /dashboard/notifications/{id} ────────────────────────────────────────

pub async fn get_notification(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationResponse>, ConsoleError> {
    let usecase = GetNotificationUseCase {
        profiles: state.profile_repo(),
        repo: state.notification_repo(),
    };
    let notification = usecase.execute(session.user_id(), id).await?;
    Ok(Json(notification.into()))
}

// ── PATCH /dashboard/notifications/{id}/read ─────────────────────────────────

pub async fn mark_notification_read(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ConsoleError> {
    let usecase = MarkNotificationReadUseCase {
        profiles: state.profile_repo(),
        repo: state.notification_repo(),
    };
    usecase.execute(session.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /dashboard/notifications/read-all ───────────────────────────────────

pub async fn mark_all_notifications_read(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<MarkAllReadResponse>, ConsoleError> {
    let usecase = MarkAllNotificationsReadUseCase {
        profiles: state.profile_repo(),
        repo: state.notification_repo(),
    };
    let updated = usecase.execute(session.user_id()).await?;
    Ok(Json(MarkAllReadResponse { updated }))
}

// ── DELETE /dashboard/notifications/{id} ─────────────────────────────────────

pub async fn delete_notification(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ConsoleError> {
    let usecase = DeleteNotificationUseCase {
        profiles: state.profile_repo(),
        repo: state.notification_repo(),
    };
    usecase.execute(session.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
