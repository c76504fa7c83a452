use uuid::Uuid;

use bizova_domain::content::PublishStatus;
use bizova_domain::id::UserId;
use bizova_domain::pagination::PageRequest;

use crate::domain::repository::{PortfolioRepository, ProfileRepository};
use crate::domain::types::PortfolioItem;
use crate::error::ConsoleError;
use crate::usecase::account::resolve_business;

// ── GetPortfolioItems ────────────────────────────────────────────────────────

pub struct GetPortfolioItemsUseCase<P: ProfileRepository, R: PortfolioRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: PortfolioRepository> GetPortfolioItemsUseCase<P, R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        status: Option<PublishStatus>,
        page: PageRequest,
    ) -> Result<Vec<PortfolioItem>, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo.list(business_id, status, page.clamped()).await
    }
}

// ── GetPortfolioItem ─────────────────────────────────────────────────────────

pub struct GetPortfolioItemUseCase<P: ProfileRepository, R: PortfolioRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: PortfolioRepository> GetPortfolioItemUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<PortfolioItem, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo
            .find(business_id, id)
            .await?
            .ok_or(ConsoleError::PortfolioItemNotFound)
    }
}
