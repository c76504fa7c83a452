use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizova_domain::content::PublishStatus;
use bizova_domain::pagination::PageRequest;

use crate::domain::types::BlogPost;
use crate::error::ConsoleError;
use crate::handlers::status_filter;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::blog::{
    CreateBlogPostInput, CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogPostUseCase,
    GetBlogPostsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub status: PublishStatus,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms_opt")]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(p: BlogPost) -> Self {
        Self {
            id: p.id,
            author_id: p.author_id.0,
            title: p.title,
            body: p.body,
            status: p.status,
            published_at: p.published_at,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct BlogListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub publish: bool,
}

// ── GET /dashboard/blog ──────────────────────────────────────────────────────

pub async fn get_blog_posts(
    session: Session,
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<BlogPostResponse>>, ConsoleError> {
    let status = status_filter(query.status.as_deref(), PublishStatus::parse)?;
    let page = PageRequest::from_query(query.per_page, query.page);

    let usecase = GetBlogPostsUseCase {
        profiles: state.profile_repo(),
        repo: state.blog_post_repo(),
    };
    let posts = usecase.execute(session.user_id(), status, page).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

// ── GET /dashboard/blog/{id} ─────────────────────────────────────────────────

pub async fn get_blog_post(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPostResponse>, ConsoleError> {
    let usecase = GetBlogPostUseCase {
        profiles: state.profile_repo(),
        repo: state.blog_post_repo(),
    };
    let post = usecase.execute(session.user_id(), id).await?;
    Ok(Json(post.into()))
}

// ── POST /dashboard/blog ─────────────────────────────────────────────────────

pub async fn create_blog_post(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<BlogPostResponse>), ConsoleError> {
    let usecase = CreateBlogPostUseCase {
        profiles: state.profile_repo(),
        repo: state.blog_post_repo(),
    };
    let post = usecase
        .execute(
            session.user_id(),
            CreateBlogPostInput {
                title: body.title,
                body: body.body,
                publish: body.publish,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

// ── DELETE /dashboard/blog/{id} ──────────────────────────────────────────────

pub async fn delete_blog_post(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ConsoleError> {
    let usecase = DeleteBlogPostUseCase {
        profiles: state.profile_repo(),
        repo: state.blog_post_repo(),
    };
    usecase.execute(session.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
