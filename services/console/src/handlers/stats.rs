use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ConsoleError;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::stats::GetDashboardStatsUseCase;

#[derive(Serialize)]
pub struct DashboardStatsResponse {
    pub blog_posts: u64,
    pub appointments: u64,
    pub unread_notifications: u64,
    pub published_projects: u64,
}

// ── GET /dashboard/stats ─────────────────────────────────────────────────────

pub async fn get_stats(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, ConsoleError> {
    let usecase = GetDashboardStatsUseCase {
        profiles: state.profile_repo(),
        blog_posts: state.blog_post_repo(),
        appointments: state.appointment_repo(),
        notifications: state.notification_repo(),
        portfolio: state.portfolio_repo(),
    };
    let stats = usecase.execute(session.user_id()).await?;
    Ok(Json(DashboardStatsResponse {
        blog_posts: stats.blog_posts,
        appointments: stats.appointments,
        unread_notifications: stats.unread_notifications,
        published_projects: stats.published_projects,
    }))
}
