use bizova_domain::id::{BusinessId, UserId};

use crate::domain::repository::ProfileRepository;
use crate::domain::types::Account;
use crate::error::ConsoleError;

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetAccountUseCase<P> {
    pub async fn execute(&self, user_id: UserId) -> Result<Account, ConsoleError> {
        self.profiles
            .find_account(user_id)
            .await?
            .ok_or(ConsoleError::ProfileNotFound)
    }
}

/// Business the caller's profile belongs to. Every dashboard query is scoped by it.
pub async fn resolve_business<P: ProfileRepository>(
    profiles: &P,
    user_id: UserId,
) -> Result<BusinessId, ConsoleError> {
    profiles
        .find_by_id(user_id)
        .await?
        .map(|p| p.business_id)
        .ok_or(ConsoleError::ProfileNotFound)
}
