use bizova_auth_types::token::SessionClaims;
use bizova_domain::account::{OnboardingFields, non_empty};
use bizova_domain::id::{BusinessId, UserId};

use crate::domain::repository::{BusinessRepository, ProfileRepository, RevalidationPort};
use crate::domain::types::{NewProfile, RevalidateScope};
use crate::error::ConsoleError;
use crate::usecase::provision::anyhow_from;
use crate::usecase::saga::{Compensate, Compensation, CompensationLog, ProvisionStep};

// ── CompleteOnboarding ───────────────────────────────────────────────────────

/// Business and profile for an identity that signed up but never got them,
/// e.g. when the process died right after the gate accepted the sign-up.
pub struct CompleteOnboardingUseCase<B, P, R>
where
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    pub businesses: B,
    pub profiles: P,
    pub revalidator: R,
}

impl<B, P, R> CompleteOnboardingUseCase<B, P, R>
where
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    pub async fn execute(
        &self,
        session: &SessionClaims,
        fields: OnboardingFields,
    ) -> Result<BusinessId, ConsoleError> {
        fields.validate_required()?;

        let user_id = UserId(session.user_id);
        if self.profiles.find_by_id(user_id).await?.is_some() {
            return Err(ConsoleError::AlreadyOnboarded);
        }
        let email = non_empty(session.email.as_deref()).ok_or(ConsoleError::MissingData)?;

        let mut log = CompensationLog::new();

        let business = self
            .businesses
            .create(&fields.business(&email))
            .await
            .map_err(|e| ConsoleError::BusinessCreation(e.detail()))?;
        log.record(
            ProvisionStep::CreateBusiness,
            Compensation::DeleteBusiness(business.id),
        );
        tracing::info!(
            step = ProvisionStep::CreateBusiness.as_str(),
            identity_id = %user_id,
            business_id = %business.id,
            "onboarding business created"
        );

        let profile = NewProfile {
            id: user_id,
            first_name: fields.first_name.trim().to_owned(),
            last_name: fields.last_name.trim().to_owned(),
            phone: non_empty(fields.phone.as_deref()),
            email,
            business_id: business.id,
        };
        if let Err(e) = self.profiles.create(&profile).await {
            log.run(ProvisionStep::CreateProfile, self).await;
            return Err(match e {
                // A concurrent onboarding for the same identity won the insert.
                ConsoleError::AlreadyOnboarded => ConsoleError::AlreadyOnboarded,
                other => ConsoleError::ProfileCreation(other.detail()),
            });
        }
        tracing::info!(
            identity_id = %user_id,
            business_id = %business.id,
            "onboarding completed"
        );

        self.revalidator.revalidate(RevalidateScope::ROOT_LAYOUT);
        Ok(business.id)
    }
}

impl<B, P, R> Compensate for CompleteOnboardingUseCase<B, P, R>
where
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    async fn compensate(&self, compensation: Compensation) -> anyhow::Result<()> {
        match compensation {
            Compensation::DeleteBusiness(id) => {
                self.businesses.delete(id).await.map_err(anyhow_from)?;
                Ok(())
            }
            // The caller's identity predates onboarding and is never undone here.
            Compensation::DeleteIdentity(id) => {
                anyhow::bail!("onboarding does not own identity {id}")
            }
        }
    }
}
