use chrono::{DateTime, Utc};
use uuid::Uuid;

use bizova_domain::content::{AppointmentStatus, NotificationKind, PublishStatus};
use bizova_domain::id::{BusinessId, UserId};

/// Identity handle returned by the gate after sign-up.
#[derive(Debug, Clone)]
pub struct CreatedIdentity {
    pub id: UserId,
    pub email: String,
    /// Present when the gate signs the user in straight away (no email
    /// confirmation pending).
    pub session: Option<IssuedSession>,
}

/// Token pair issued by the gate.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub business_id: BusinessId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile row to insert; timestamps are set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub business_id: BusinessId,
}

/// Profile joined with the business it belongs to.
#[derive(Debug, Clone)]
pub struct Account {
    pub profile: Profile,
    pub business: Business,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub author_id: UserId,
    pub title: String,
    pub body: String,
    pub status: PublishStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub client_name: String,
    pub client_email: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub title: String,
    pub description: Option<String>,
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
}

/// Headline numbers on the dashboard home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub blog_posts: u64,
    pub appointments: u64,
    pub unread_notifications: u64,
    pub published_projects: u64,
}

/// Cache scope the presentation layer should treat as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevalidateScope {
    pub path: &'static str,
    pub kind: RevalidateKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevalidateKind {
    Page,
    Layout,
}

impl RevalidateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Layout => "layout",
        }
    }
}

impl RevalidateScope {
    /// Every view under the root layout.
    pub const ROOT_LAYOUT: Self = Self {
        path: "/",
        kind: RevalidateKind::Layout,
    };
}
