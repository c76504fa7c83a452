#![allow(async_fn_in_trait)]

use uuid::Uuid;

use bizova_auth_types::token::SessionClaims;
use bizova_domain::account::BusinessFields;
use bizova_domain::content::{AppointmentStatus, PublishStatus, ReadFilter};
use bizova_domain::id::{BusinessId, UserId};
use bizova_domain::pagination::PageRequest;

use crate::domain::types::{
    Account, Appointment, BlogPost, Business, CreatedIdentity, Notification, NewProfile,
    PortfolioItem, Profile, RevalidateScope,
};
use crate::error::{ConsoleError, GateError};

/// Port for the external authentication backend that owns identities and sessions.
pub trait SessionGate: Send + Sync {
    /// Register an identity. `Ok(None)` means the gate accepted the request
    /// but returned no usable identity.
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<Option<CreatedIdentity>, GateError>;

    /// Remove an identity. Used only to undo a sign-up that failed later on.
    async fn delete_identity(&self, id: UserId) -> Result<(), GateError>;

    /// Invalidate the session the access token belongs to.
    async fn end_session(&self, access_token: &str) -> Result<(), GateError>;

    /// Claims of a live session, `None` when the token is absent, expired or forged.
    fn validate_session(&self, access_token: &str) -> Option<SessionClaims>;
}

/// Fire-and-forget signal that cached views are stale.
pub trait RevalidationPort: Send + Sync {
    fn revalidate(&self, scope: RevalidateScope);
}

pub trait BusinessRepository: Send + Sync {
    /// Insert a business; the store assigns the id.
    async fn create(&self, fields: &BusinessFields) -> Result<Business, ConsoleError>;

    /// Delete a business. Returns `true` if a row was deleted.
    async fn delete(&self, id: BusinessId) -> Result<bool, ConsoleError>;
}

pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ConsoleError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<Profile>, ConsoleError>;

    /// Profile joined with its business.
    async fn find_account(&self, id: UserId) -> Result<Option<Account>, ConsoleError>;
}

/// Dashboard notifications, always scoped to one business.
pub trait NotificationRepository: Send + Sync {
    async fn list(
        &self,
        business_id: BusinessId,
        filter: ReadFilter,
        page: PageRequest,
    ) -> Result<Vec<Notification>, ConsoleError>;

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Notification>, ConsoleError>;

    /// Returns `true` if the notification exists (already read counts).
    async fn mark_read(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError>;

    /// Returns the number of notifications that flipped to read.
    async fn mark_all_read(&self, business_id: BusinessId) -> Result<u64, ConsoleError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError>;

    async fn count_unread(&self, business_id: BusinessId) -> Result<u64, ConsoleError>;
}

pub trait BlogPostRepository: Send + Sync {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, ConsoleError>;

    async fn find(&self, business_id: BusinessId, id: Uuid)
    -> Result<Option<BlogPost>, ConsoleError>;

    async fn create(&self, post: &BlogPost) -> Result<(), ConsoleError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError>;

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError>;
}

pub trait AppointmentRepository: Send + Sync {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Appointment>, ConsoleError>;

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Appointment>, ConsoleError>;

    async fn update_status(
        &self,
        business_id: BusinessId,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), ConsoleError>;

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError>;
}

pub trait PortfolioRepository: Send + Sync {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<PortfolioItem>, ConsoleError>;

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<PortfolioItem>, ConsoleError>;

    async fn count_published(&self, business_id: BusinessId) -> Result<u64, ConsoleError>;
}
