use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use bizova_console_schema::{
    appointments, blog_posts, businesses, notifications, portfolio_items, profiles,
};
use bizova_domain::account::BusinessFields;
use bizova_domain::content::{AppointmentStatus, NotificationKind, PublishStatus, ReadFilter};
use bizova_domain::id::{BusinessId, UserId};
use bizova_domain::pagination::PageRequest;

use crate::domain::repository::{
    AppointmentRepository, BlogPostRepository, BusinessRepository, NotificationRepository,
    PortfolioRepository, ProfileRepository,
};
use crate::domain::types::{
    Account, Appointment, BlogPost, Business, NewProfile, Notification, PortfolioItem, Profile,
};
use crate::error::ConsoleError;

// ── Business repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBusinessRepository {
    pub db: DatabaseConnection,
}

impl BusinessRepository for DbBusinessRepository {
    async fn create(&self, fields: &BusinessFields) -> Result<Business, ConsoleError> {
        let model = businesses::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(fields.name.clone()),
            email: Set(fields.email.clone()),
            phone: Set(fields.phone.clone()),
            location: Set(fields.location.clone()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create business")?;
        Ok(business_from_model(model))
    }

    async fn delete(&self, id: BusinessId) -> Result<bool, ConsoleError> {
        let result = businesses::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete business")?;
        Ok(result.rows_affected > 0)
    }
}

fn business_from_model(model: businesses::Model) -> Business {
    Business {
        id: BusinessId(model.id),
        name: model.name,
        email: model.email,
        phone: model.phone,
        location: model.location,
        created_at: model.created_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ConsoleError> {
        let now = Utc::now();
        let model = profiles::ActiveModel {
            id: Set(profile.id.0),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            phone: Set(profile.phone.clone()),
            email: Set(profile.email.clone()),
            business_id: Set(profile.business_id.0),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // Profile id is the identity id: a duplicate means someone else got there first.
            Some(SqlErr::UniqueConstraintViolation(_)) => ConsoleError::AlreadyOnboarded,
            _ => ConsoleError::Internal(anyhow::Error::new(e).context("create profile")),
        })?;
        Ok(profile_from_model(model))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<Profile>, ConsoleError> {
        let model = profiles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model))
    }

    async fn find_account(&self, id: UserId) -> Result<Option<Account>, ConsoleError> {
        let row = profiles::Entity::find_by_id(id.0)
            .find_also_related(businesses::Entity)
            .one(&self.db)
            .await
            .context("find profile with business")?;
        match row {
            Some((profile, Some(business))) => Ok(Some(Account {
                profile: profile_from_model(profile),
                business: business_from_model(business),
            })),
            // The foreign key forbids a profile without its business.
            Some((profile, None)) => Err(anyhow::anyhow!(
                "profile {} references missing business {}",
                profile.id,
                profile.business_id
            )
            .into()),
            None => Ok(None),
        }
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: UserId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        email: model.email,
        business_id: BusinessId(model.business_id),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn list(
        &self,
        business_id: BusinessId,
        filter: ReadFilter,
        page: PageRequest,
    ) -> Result<Vec<Notification>, ConsoleError> {
        let mut query = notifications::Entity::find()
            .filter(notifications::Column::BusinessId.eq(business_id.0));
        if let Some(is_read) = filter.is_read() {
            query = query.filter(notifications::Column::IsRead.eq(is_read));
        }
        let models = query
            .order_by_desc(notifications::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list notifications")?;
        let items = models
            .into_iter()
            .map(notification_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Notification>, ConsoleError> {
        let model = notifications::Entity::find_by_id(id)
            .filter(notifications::Column::BusinessId.eq(business_id.0))
            .one(&self.db)
            .await
            .context("find notification")?;
        Ok(model.map(notification_from_model).transpose()?)
    }

    async fn mark_read(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        // Postgres counts matched rows, so an already-read notification still reports 1.
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(notifications::Column::Id.eq(id))
            .filter(notifications::Column::BusinessId.eq(business_id.0))
            .exec(&self.db)
            .await
            .context("mark notification read")?;
        Ok(result.rows_affected > 0)
    }

    async fn mark_all_read(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(notifications::Column::BusinessId.eq(business_id.0))
            .filter(notifications::Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .context("mark all notifications read")?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        let result = notifications::Entity::delete_many()
            .filter(notifications::Column::Id.eq(id))
            .filter(notifications::Column::BusinessId.eq(business_id.0))
            .exec(&self.db)
            .await
            .context("delete notification")?;
        Ok(result.rows_affected > 0)
    }

    async fn count_unread(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let count = notifications::Entity::find()
            .filter(notifications::Column::BusinessId.eq(business_id.0))
            .filter(notifications::Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .context("count unread notifications")?;
        Ok(count)
    }
}

fn notification_from_model(model: notifications::Model) -> anyhow::Result<Notification> {
    let kind = NotificationKind::parse(&model.kind)
        .with_context(|| format!("unknown notification kind {:?}", model.kind))?;
    Ok(Notification {
        id: model.id,
        business_id: BusinessId(model.business_id),
        kind,
        title: model.title,
        description: model.description,
        is_read: model.is_read,
        created_at: model.created_at,
    })
}

// ── Blog post repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBlogPostRepository {
    pub db: DatabaseConnection,
}

impl BlogPostRepository for DbBlogPostRepository {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, ConsoleError> {
        let mut query =
            blog_posts::Entity::find().filter(blog_posts::Column::BusinessId.eq(business_id.0));
        if let Some(status) = status {
            query = query.filter(blog_posts::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(blog_posts::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list blog posts")?;
        let posts = models
            .into_iter()
            .map(blog_post_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(posts)
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<BlogPost>, ConsoleError> {
        let model = blog_posts::Entity::find_by_id(id)
            .filter(blog_posts::Column::BusinessId.eq(business_id.0))
            .one(&self.db)
            .await
            .context("find blog post")?;
        Ok(model.map(blog_post_from_model).transpose()?)
    }

    async fn create(&self, post: &BlogPost) -> Result<(), ConsoleError> {
        blog_posts::ActiveModel {
            id: Set(post.id),
            business_id: Set(post.business_id.0),
            author_id: Set(post.author_id.0),
            title: Set(post.title.clone()),
            body: Set(post.body.clone()),
            status: Set(post.status.as_str().to_owned()),
            published_at: Set(post.published_at),
            created_at: Set(post.created_at),
            updated_at: Set(post.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create blog post")?;
        Ok(())
    }

    async fn delete(&self, business_id: BusinessId, id: Uuid) -> Result<bool, ConsoleError> {
        let result = blog_posts::Entity::delete_many()
            .filter(blog_posts::Column::Id.eq(id))
            .filter(blog_posts::Column::BusinessId.eq(business_id.0))
            .exec(&self.db)
            .await
            .context("delete blog post")?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let count = blog_posts::Entity::find()
            .filter(blog_posts::Column::BusinessId.eq(business_id.0))
            .count(&self.db)
            .await
            .context("count blog posts")?;
        Ok(count)
    }
}

fn blog_post_from_model(model: blog_posts::Model) -> anyhow::Result<BlogPost> {
    let status = PublishStatus::parse(&model.status)
        .with_context(|| format!("unknown blog post status {:?}", model.status))?;
    Ok(BlogPost {
        id: model.id,
        business_id: BusinessId(model.business_id),
        author_id: UserId(model.author_id),
        title: model.title,
        body: model.body,
        status,
        published_at: model.published_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Appointment repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAppointmentRepository {
    pub db: DatabaseConnection,
}

impl AppointmentRepository for DbAppointmentRepository {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Appointment>, ConsoleError> {
        let mut query = appointments::Entity::find()
            .filter(appointments::Column::BusinessId.eq(business_id.0));
        if let Some(status) = status {
            query = query.filter(appointments::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_asc(appointments::Column::ScheduledAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list appointments")?;
        let items = models
            .into_iter()
            .map(appointment_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<Appointment>, ConsoleError> {
        let model = appointments::Entity::find_by_id(id)
            .filter(appointments::Column::BusinessId.eq(business_id.0))
            .one(&self.db)
            .await
            .context("find appointment")?;
        Ok(model.map(appointment_from_model).transpose()?)
    }

    async fn update_status(
        &self,
        business_id: BusinessId,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), ConsoleError> {
        let result = appointments::Entity::update_many()
            .col_expr(appointments::Column::Status, Expr::value(status.as_str()))
            .filter(appointments::Column::Id.eq(id))
            .filter(appointments::Column::BusinessId.eq(business_id.0))
            .exec(&self.db)
            .await
            .context("update appointment status")?;
        if result.rows_affected == 0 {
            return Err(ConsoleError::AppointmentNotFound);
        }
        Ok(())
    }

    async fn count(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let count = appointments::Entity::find()
            .filter(appointments::Column::BusinessId.eq(business_id.0))
            .count(&self.db)
            .await
            .context("count appointments")?;
        Ok(count)
    }
}

fn appointment_from_model(model: appointments::Model) -> anyhow::Result<Appointment> {
    let status = AppointmentStatus::parse(&model.status)
        .with_context(|| format!("unknown appointment status {:?}", model.status))?;
    Ok(Appointment {
        id: model.id,
        business_id: BusinessId(model.business_id),
        client_name: model.client_name,
        client_email: model.client_email,
        scheduled_at: model.scheduled_at,
        status,
        notes: model.notes,
        created_at: model.created_at,
    })
}

// ── Portfolio repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPortfolioRepository {
    pub db: DatabaseConnection,
}

impl PortfolioRepository for DbPortfolioRepository {
    async fn list(
        &self,
        business_id: BusinessId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<PortfolioItem>, ConsoleError> {
        let mut query = portfolio_items::Entity::find()
            .filter(portfolio_items::Column::BusinessId.eq(business_id.0));
        if let Some(status) = status {
            query = query.filter(portfolio_items::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(portfolio_items::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list portfolio items")?;
        let items = models
            .into_iter()
            .map(portfolio_item_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn find(
        &self,
        business_id: BusinessId,
        id: Uuid,
    ) -> Result<Option<PortfolioItem>, ConsoleError> {
        let model = portfolio_items::Entity::find_by_id(id)
            .filter(portfolio_items::Column::BusinessId.eq(business_id.0))
            .one(&self.db)
            .await
            .context("find portfolio item")?;
        Ok(model.map(portfolio_item_from_model).transpose()?)
    }

    async fn count_published(&self, business_id: BusinessId) -> Result<u64, ConsoleError> {
        let count = portfolio_items::Entity::find()
            .filter(portfolio_items::Column::BusinessId.eq(business_id.0))
            .filter(portfolio_items::Column::Status.eq(PublishStatus::Published.as_str()))
            .count(&self.db)
            .await
            .context("count published portfolio items")?;
        Ok(count)
    }
}

fn portfolio_item_from_model(model: portfolio_items::Model) -> anyhow::Result<PortfolioItem> {
    let status = PublishStatus::parse(&model.status)
        .with_context(|| format!("unknown portfolio status {:?}", model.status))?;
    Ok(PortfolioItem {
        id: model.id,
        business_id: BusinessId(model.business_id),
        title: model.title,
        description: model.description,
        status,
        created_at: model.created_at,
    })
}
