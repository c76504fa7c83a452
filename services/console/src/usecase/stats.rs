use bizova_domain::id::UserId;

use crate::domain::repository::{
    AppointmentRepository, BlogPostRepository, NotificationRepository, PortfolioRepository,
    ProfileRepository,
};
use crate::domain::types::DashboardStats;
use crate::error::ConsoleError;
use crate::usecase::account::resolve_business;

// ── GetDashboardStats ────────────────────────────────────────────────────────

pub struct GetDashboardStatsUseCase<P, B, A, N, F>
where
    P: ProfileRepository,
    B: BlogPostRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
    F: PortfolioRepository,
{
    pub profiles: P,
    pub blog_posts: B,
    pub appointments: A,
    pub notifications: N,
    pub portfolio: F,
}

impl<P, B, A, N, F> GetDashboardStatsUseCase<P, B, A, N, F>
where
    P: ProfileRepository,
    B: BlogPostRepository,
    A: AppointmentRepository,
    N: NotificationRepository,
    F: PortfolioRepository,
{
    pub async fn execute(&self, user_id: UserId) -> Result<DashboardStats, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        let (blog_posts, appointments, unread_notifications, published_projects) = tokio::try_join!(
            self.blog_posts.count(business_id),
            self.appointments.count(business_id),
            self.notifications.count_unread(business_id),
            self.portfolio.count_published(business_id),
        )?;
        Ok(DashboardStats {
            blog_posts,
            appointments,
            unread_notifications,
            published_projects,
        })
    }
}
