use uuid::Uuid;

use bizova_domain::content::ReadFilter;
use bizova_domain::id::UserId;
use bizova_domain::pagination::PageRequest;

use crate::domain::repository::{NotificationRepository, ProfileRepository};
use crate::domain::types::Notification;
use crate::error::ConsoleError;
use crate::usecase::account::resolve_business;

// ── GetNotifications ─────────────────────────────────────────────────────────

pub struct GetNotificationsUseCase<P: ProfileRepository, N: NotificationRepository> {
    pub profiles: P,
    pub repo: N,
}

impl<P: ProfileRepository, N: NotificationRepository> GetNotificationsUseCase<P, N> {
    pub async fn execute(
        &self,
        user_id: UserId,
        filter: ReadFilter,
        page: PageRequest,
    ) -> Result<Vec<Notification>, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo.list(business_id, filter, page.clamped()).await
    }
}

// ── GetNotification ──────────────────────────────────────────────────────────

pub struct GetNotificationUseCase<P: ProfileRepository, N: NotificationRepository> {
    pub profiles: P,
    pub repo: N,
}

impl<P: ProfileRepository, N: NotificationRepository> GetNotificationUseCase<P, N> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<Notification, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo
            .find(business_id, id)
            .await?
            .ok_or(ConsoleError::NotificationNotFound)
    }
}

// ── MarkNotificationRead ─────────────────────────────────────────────────────

pub struct MarkNotificationReadUseCase<P: ProfileRepository, N: NotificationRepository> {
    pub profiles: P,
    pub repo: N,
}

impl<P: ProfileRepository, N: NotificationRepository> MarkNotificationReadUseCase<P, N> {
    /// Idempotent: marking an already-read notification succeeds.
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<(), ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        if !self.repo.mark_read(business_id, id).await? {
            return Err(ConsoleError::NotificationNotFound);
        }
        Ok(())
    }
}

// ── MarkAllNotificationsRead ─────────────────────────────────────────────────

pub struct MarkAllNotificationsReadUseCase<P: ProfileRepository, N: NotificationRepository> {
    pub profiles: P,
    pub repo: N,
}

impl<P: ProfileRepository, N: NotificationRepository> MarkAllNotificationsReadUseCase<P, N> {
    /// Returns how many notifications changed from unread to read.
    pub async fn execute(&self, user_id: UserId) -> Result<u64, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo.mark_all_read(business_id).await
    }
}

// ── DeleteNotification ───────────────────────────────────────────────────────

pub struct DeleteNotificationUseCase<P: ProfileRepository, N: NotificationRepository> {
    pub profiles: P,
    pub repo: N,
}

impl<P: ProfileRepository, N: NotificationRepository> DeleteNotificationUseCase<P, N> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<(), ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        if !self.repo.delete(business_id, id).await? {
            return Err(ConsoleError::NotificationNotFound);
        }
        Ok(())
    }
}
