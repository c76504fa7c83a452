use chrono::Utc;
use uuid::Uuid;

use bizova_domain::content::PublishStatus;
use bizova_domain::id::UserId;
use bizova_domain::pagination::PageRequest;

use crate::domain::repository::{BlogPostRepository, ProfileRepository};
use crate::domain::types::BlogPost;
use crate::error::ConsoleError;
use crate::usecase::account::resolve_business;

// ── GetBlogPosts ─────────────────────────────────────────────────────────────

pub struct GetBlogPostsUseCase<P: ProfileRepository, R: BlogPostRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: BlogPostRepository> GetBlogPostsUseCase<P, R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<BlogPost>, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo.list(business_id, status, page.clamped()).await
    }
}

// ── GetBlogPost ──────────────────────────────────────────────────────────────

pub struct GetBlogPostUseCase<P: ProfileRepository, R: BlogPostRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: BlogPostRepository> GetBlogPostUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<BlogPost, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo
            .find(business_id, id)
            .await?
            .ok_or(ConsoleError::BlogPostNotFound)
    }
}

// ── CreateBlogPost ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateBlogPostInput {
    pub title: String,
    pub body: String,
    pub publish: bool,
}

pub struct CreateBlogPostUseCase<P: ProfileRepository, R: BlogPostRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: BlogPostRepository> CreateBlogPostUseCase<P, R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        input: CreateBlogPostInput,
    ) -> Result<BlogPost, ConsoleError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ConsoleError::MissingData);
        }
        let business_id = resolve_business(&self.profiles, user_id).await?;

        let now = Utc::now();
        let (status, published_at) = if input.publish {
            (PublishStatus::Published, Some(now))
        } else {
            (PublishStatus::Draft, None)
        };
        let post = BlogPost {
            id: Uuid::now_v7(),
            business_id,
            author_id: user_id,
            title: title.to_owned(),
            body: input.body,
            status,
            published_at,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&post).await?;
        Ok(post)
    }
}

// ── DeleteBlogPost ───────────────────────────────────────────────────────────

pub struct DeleteBlogPostUseCase<P: ProfileRepository, R: BlogPostRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: BlogPostRepository> DeleteBlogPostUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<(), ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        if !self.repo.delete(business_id, id).await? {
            return Err(ConsoleError::BlogPostNotFound);
        }
        Ok(())
    }
}
