use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizova_domain::content::PublishStatus;
use bizova_domain::pagination::PageRequest;

use crate::domain::types::PortfolioItem;
use crate::error::ConsoleError;
use crate::handlers::status_filter;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::portfolio::{GetPortfolioItemUseCase, GetPortfolioItemsUseCase};

#[derive(Serialize)]
pub struct PortfolioItemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: PublishStatus,
    #[serde(serialize_with = "bizova_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PortfolioItem> for PortfolioItemResponse {
    fn from(i: PortfolioItem) -> Self {
        Self {
            id: i.id,
            title: i.title,
            description: i.description,
            status: i.status,
            created_at: i.created_at,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PortfolioListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<String>,
}

pub async fn get_portfolio_items(
    session: Session,
    State(state): State<AppState>,
    Query(query): Query<PortfolioListQuery>,
) -> Result<Json<Vec<PortfolioItemResponse>>, ConsoleError> {
    let status = status_filter(query.status.as_deref(), PublishStatus::parse)?;
    let page = PageRequest::from_query(query.per_page, query.page);

    let usecase = GetPortfolioItemsUseCase {
        profiles: state.profile_repo(),
        repo: state.portfolio_repo(),
    };
    let items = usecase.execute(session.user_id(), status, page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn get_portfolio_item(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioItemResponse>, ConsoleError> {
    let usecase = GetPortfolioItemUseCase {
        profiles: state.profile_repo(),
        repo: state.portfolio_repo(),
    };
    let item = usecase.execute(session.user_id(), id).await?;
    Ok(Json(item.into()))
}
