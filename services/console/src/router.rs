use axum::{
    Router,
    routing::{get, patch, post},
};

use bizova_core::health::healthz;
use bizova_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::get_me,
    appointment::{get_appointment, get_appointments, set_appointment_status},
    auth::{check_personal_details, complete_onboarding, get_session, logout, sign_up},
    blog::{create_blog_post, delete_blog_post, get_blog_post, get_blog_posts},
    health::readyz,
    notification::{
        delete_notification, get_notification, get_notifications, mark_all_notifications_read,
        mark_notification_read,
    },
    portfolio::{get_portfolio_item, get_portfolio_items},
    stats::get_stats,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Sign-up and session
        .route("/auth/sign-up/personal", post(check_personal_details))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/onboarding", post(complete_onboarding))
        .route("/auth/session", get(get_session))
        .route("/auth/logout", post(logout))
        // Account
        .route("/me", get(get_me))
        // Dashboard
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/notifications", get(get_notifications))
        .route(
            "/dashboard/notifications/read-all",
            post(mark_all_notifications_read),
        )
        .route(
            "/dashboard/notifications/{id}",
            get(get_notification).delete(delete_notification),
        )
        .route(
            "/dashboard/notifications/{id}/read",
            patch(mark_notification_read),
        )
        .route("/dashboard/blog", get(get_blog_posts).post(create_blog_post))
        .route(
            "/dashboard/blog/{id}",
            get(get_blog_post).delete(delete_blog_post),
        )
        .route("/dashboard/appointments", get(get_appointments))
        .route(
            "/dashboard/appointments/{id}",
            get(get_appointment).patch(set_appointment_status),
        )
        .route("/dashboard/portfolio", get(get_portfolio_items))
        .route("/dashboard/portfolio/{id}", get(get_portfolio_item))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
