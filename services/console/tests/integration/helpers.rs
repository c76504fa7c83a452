use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use bizova_auth_types::token::{SessionClaims, validate_access_token};
use bizova_console::domain::repository::{
    AppointmentRepository, BlogPostRepository, BusinessRepository, NotificationRepository,
    PortfolioRepository, ProfileRepository, RevalidationPort, SessionGate,
};
use bizova_console::domain::types::{
    Account, Appointment, BlogPost, Business, CreatedIdentity, IssuedSession, NewProfile,
    Notification, PortfolioItem, Profile, RevalidateScope,
};
use bizova_console::error::{ConsoleError, GateError};
use bizova_domain::account::{BusinessFields, SignUpFields};
use bizova_domain::content::{AppointmentStatus, NotificationKind, PublishStatus, ReadFilter};
use bizova_domain::id::{BusinessId, UserId};
use bizova_domain::pagination::PageRequest;

pub use bizova_testing::auth::TEST_JWT_SECRET;

pub const SITE_URL: &str = "http://localhost:3000";

/// The sign-up used throughout: only required fields, no business contact.
pub fn acme_sign_up() -> SignUpFields {
    SignUpFields {
        email: "j@x.com".into(),
        password: "secret1".into(),
        first_name: "J".into(),
        last_name: "D".into(),
        business_name: "Acme".into(),
        ..Default::default()
    }
}

fn store_error(message: &str) -> ConsoleError {
    ConsoleError::Internal(anyhow::anyhow!(message.to_owned()).context("store write"))
}

// ── MockGate ─────────────────────────────────────────────────────────────────

/// What the gate does with a sign-up request.
#[derive(Clone)]
pub enum SignUpOutcome {
    /// Identity created; `signed_in` controls whether a session comes back.
    Created { signed_in: bool },
    /// Accepted but no identity in the response.
    NoIdentity,
    Rejected(String),
    Unreachable,
}

pub struct MockGate {
    pub outcome: SignUpOutcome,
    /// Live identities. Compensation removes entries.
    pub identities: Arc<Mutex<Vec<UserId>>>,
    pub redirects: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    pub end_session_error: Option<String>,
    pub fail_delete: bool,
}

impl MockGate {
    pub fn new(outcome: SignUpOutcome) -> Self {
        Self {
            outcome,
            identities: Arc::new(Mutex::new(vec![])),
            redirects: Arc::new(Mutex::new(vec![])),
            calls: Arc::new(Mutex::new(vec![])),
            end_session_error: None,
            fail_delete: false,
        }
    }

    pub fn accepting() -> Self {
        Self::new(SignUpOutcome::Created { signed_in: false })
    }

    pub fn identities_handle(&self) -> Arc<Mutex<Vec<UserId>>> {
        Arc::clone(&self.identities)
    }

    pub fn redirects_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.redirects)
    }

    pub fn calls_handle(&self) -> Arc<Mutex<Vec<&'static str>>> {
        Arc::clone(&self.calls)
    }
}

impl SessionGate for MockGate {
    async fn create_identity(
        &self,
        email: &str,
        _password: &str,
        redirect_to: &str,
    ) -> Result<Option<CreatedIdentity>, GateError> {
        self.calls.lock().unwrap().push("create_identity");
        self.redirects.lock().unwrap().push(redirect_to.to_owned());
        match &self.outcome {
            SignUpOutcome::Created { signed_in } => {
                let id = UserId(Uuid::new_v4());
                self.identities.lock().unwrap().push(id);
                Ok(Some(CreatedIdentity {
                    id,
                    email: email.to_owned(),
                    session: signed_in.then(|| IssuedSession {
                        access_token: "access".into(),
                        refresh_token: "refresh".into(),
                        expires_in: 3600,
                    }),
                }))
            }
            SignUpOutcome::NoIdentity => Ok(None),
            SignUpOutcome::Rejected(message) => Err(GateError::Rejected {
                status: 422,
                message: message.clone(),
            }),
            SignUpOutcome::Unreachable => Err(GateError::Transport(anyhow::anyhow!(
                "connection refused"
            ))),
        }
    }

    async fn delete_identity(&self, id: UserId) -> Result<(), GateError> {
        self.calls.lock().unwrap().push("delete_identity");
        if self.fail_delete {
            return Err(GateError::Rejected {
                status: 500,
                message: "admin api unavailable".into(),
            });
        }
        self.identities.lock().unwrap().retain(|i| *i != id);
        Ok(())
    }

    async fn end_session(&self, _access_token: &str) -> Result<(), GateError> {
        self.calls.lock().unwrap().push("end_session");
        match &self.end_session_error {
            Some(message) => Err(GateError::Rejected {
                status: 401,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn validate_session(&self, access_token: &str) -> Option<SessionClaims> {
        validate_access_token(access_token, TEST_JWT_SECRET).ok()
    }
}

// ── MockBusinessRepo ─────────────────────────────────────────────────────────

pub struct MockBusinessRepo {
    pub rows: Arc<Mutex<Vec<Business>>>,
    pub fail_create: Option<String>,
}

impl MockBusinessRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            fail_create: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_create: Some(message.to_owned()),
            ..Self::empty()
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Business>>> {
        Arc::clone(&self.rows)
    }
}

impl BusinessRepository for MockBusinessRepo {
    async fn create(&self, fields: &BusinessFields) -> Result<Business, ConsoleError> {
        if let Some(message) = &self.fail_create {
            return Err(store_error(message));
        }
        let business = Business {
            id: BusinessId(Uuid::now_v7()),
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            location: fields.location.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(business.clone());
        Ok(business)
    }

    async fn delete(&self, id: BusinessId) -> Result<bool, ConsoleError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok(rows.len() < before)
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub rows: Arc<Mutex<Vec<Profile>>>,
    /// Businesses visible to `find_account`.
    pub businesses: Arc<Mutex<Vec<Business>>>,
    pub fail_create: Option<String>,
    /// Insert collides with a row written after `find_by_id` looked.
    pub conflict_on_create: bool,
}

impl MockProfileRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            businesses: Arc::new(Mutex::new(vec![])),
            fail_create: None,
            conflict_on_create: false,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_create: Some(message.to_owned()),
            ..Self::empty()
        }
    }

    pub fn conflicting() -> Self {
        Self {
            conflict_on_create: true,
            ..Self::empty()
        }
    }

    /// Profile and business rows for an already onboarded user.
    pub fn with_account(user_id: UserId, business_id: BusinessId) -> Self {
        let repo = Self::empty();
        repo.rows.lock().unwrap().push(test_profile(user_id, business_id));
        repo.businesses
            .lock()
            .unwrap()
            .push(test_business(business_id));
        repo
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Profile>>> {
        Arc::clone(&self.rows)
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ConsoleError> {
        if let Some(message) = &self.fail_create {
            return Err(store_error(message));
        }
        if self.conflict_on_create {
            return Err(ConsoleError::AlreadyOnboarded);
        }
        let now = Utc::now();
        let row = Profile {
            id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            business_id: profile.business_id,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<Profile>, ConsoleError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_account(&self, id: UserId) -> Result<Option<Account>, ConsoleError> {
        let Some(profile) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let business = self
            .businesses
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == profile.business_id)
            .cloned()
            .ok_or_else(|| ConsoleError::Internal(anyhow::anyhow!("dangling business")))?;
        Ok(Some(Account { profile, business }))
    }
}

pub fn test_profile(user_id: UserId, business_id: BusinessId) -> Profile {
    let now = Utc::now();
    Profile {
        id: user_id,
        first_name: "J".into(),
        last_name: "D".into(),
        phone: None,
        email: "j@x.com".into(),
        business_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_business(business_id: BusinessId) -> Business {
    Business {
        id: business_id,
        name: "Acme".into(),
        email: Some("j@x.com".into()),
        phone: None,
        location: None,
        created_at: Utc::now(),
    }
}

// ── MockRevalidator ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockRevalidator {
    pub signals: Arc<Mutex<Vec<RevalidateScope>>>,
}

impl MockRevalidator {
    pub fn signals_handle(&self) -> Arc<Mutex<Vec<RevalidateScope>>> {
        Arc::clone(&self.signals)
    }
}

impl RevalidationPort for MockRevalidator {
    fn revalidate(&self, scope: RevalidateScope) {
        self.signals.lock().unwrap().push(scope);
    }
}

// ── MockNotificationRepo ─────────────────────────────────────────────────────

pub struct MockNotificationRepo {
    pub rows: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationRepo {
    pub fn new(rows: Vec<Notification>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Notification>>> {
        Arc::clone(&self.rows)
    }
}

fn page_of<T: Clone>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

impl NotificationRepository for MockNotificationRepo {
    async fn list(
        &self,
        business_id: BusinessId,
        filter: ReadFilter,
        page: PageRequest,
    ) -> Result<Vec<Notification>, ConsoleError> {
        let mut items: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.business_id == business_id)
            .filter(|n| filter.is_read().is_none_or(|r| n.is_read == r))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page_of(items, page))
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Notification>, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.business_id == business_id && n.id == id)
            .cloned())
    }

    async fn mark_read(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|n| n.business_id == business_id && n.id == id)
        {
            Some(n) => {
                n.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let mut updated = 0;
        for n in self.rows.lock().unwrap().iter_mut() {
            if n.business_id == business_id && !n.is_read {
                n.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| !(n.business_id == business_id && n.id == id));
        Ok(rows.len() < before)
    }

    async fn count_unread(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.business_id == business_id && !n.is_read)
            .count() as u64)
    }
}

/// Notification created `minutes_ago` minutes in the past.
pub fn test_notification(business_id: BusinessId, is_read: bool, minutes_ago: i64) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        business_id,
        kind: NotificationKind::Appointment,
        title: "New appointment".into(),
        description: "Sarah booked a consultation".into(),
        is_read,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

// ── MockBlogPostRepo ─────────────────────────────────────────────────────────

pub struct MockBlogPostRepo {
    pub rows: Arc<Mutex<Vec<BlogPost>>>,
}

impl MockBlogPostRepo {
    pub fn new(rows: Vec<BlogPost>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<BlogPost>>> {
        Arc::clone(&self.rows)
    }
}

impl BlogPostRepository for MockBlogPostRepo {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, ConsoleError> {
        let items: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.business_id == business_id)
            .filter(|p| status.is_none_or(|s| p.status == s))
            .cloned()
            .collect();
        Ok(page_of(items, page))
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<BlogPost>, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.business_id == business_id && p.id == id)
            .cloned())
    }

    async fn create(&self, post: &BlogPost) -> Result<(), ConsoleError> {
        self.rows.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| !(p.business_id == business_id && p.id == id));
        Ok(rows.len() < before)
    }

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.business_id == business_id)
            .count() as u64)
    }
}

pub fn test_blog_post(business_id: BusinessId, author_id: UserId, status: PublishStatus) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: Uuid::new_v4(),
        business_id,
        author_id,
        title: "Spring opening hours".into(),
        body: "We are open longer.".into(),
        status,
        published_at: (status == PublishStatus::Published).then_some(now),
        created_at: now,
        updated_at: now,
    }
}

// ── MockAppointmentRepo ──────────────────────────────────────────────────────

pub struct MockAppointmentRepo {
    pub rows: Arc<Mutex<Vec<Appointment>>>,
}

impl MockAppointmentRepo {
    pub fn new(rows: Vec<Appointment>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Appointment>>> {
        Arc::clone(&self.rows)
    }
}

impl AppointmentRepository for MockAppointmentRepo {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Appointment>, ConsoleError> {
        let items: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.business_id == business_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        Ok(page_of(items, page))
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Appointment>, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.business_id == business_id && a.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        business_id: BusinessId,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), ConsoleError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.business_id == business_id && a.id == id)
            .ok_or(ConsoleError::AppointmentNotFound)?;
        row.status = status;
        Ok(())
    }

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.business_id == business_id)
            .count() as u64)
    }
}

pub fn test_appointment(business_id: BusinessId, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        business_id,
        client_name: "Sarah".into(),
        client_email: Some("sarah@example.com".into()),
        scheduled_at: Utc::now() + Duration::days(2),
        status,
        notes: None,
        created_at: Utc::now(),
    }
}

// ── MockPortfolioRepo ────────────────────────────────────────────────────────

pub struct MockPortfolioRepo {
    pub rows: Vec<PortfolioItem>,
}

impl MockPortfolioRepo {
    pub fn new(rows: Vec<PortfolioItem>) -> Self {
        Self { rows }
    }
}

impl PortfolioRepository for MockPortfolioRepo {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<PortfolioItem>, ConsoleError> {
        let items: Vec<_> = self
            .rows
            .iter()
            .filter(|i| i.business_id == business_id)
            .filter(|i| status.is_none_or(|s| i.status == s))
            .cloned()
            .collect();
        Ok(page_of(items, page))
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<PortfolioItem>, ConsoleError> {
        Ok(self
            .rows
            .iter()
            .find(|i| i.business_id == business_id && i.id == id)
            .cloned())
    }

    async fn count_published(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        Ok(self
            .rows
            .iter()
            .filter(|i| i.business_id == business_id && i.status == PublishStatus::Published)
            .count() as u64)
    }
}

pub fn test_portfolio_item(business_id: BusinessId, status: PublishStatus) -> PortfolioItem {
    PortfolioItem {
        id: Uuid::new_v4(),
        business_id,
        title: "Kitchen remodel".into(),
        description: None,
        status,
        created_at: Utc::now(),
    }
}
