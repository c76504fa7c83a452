use bizova_domain::account::SignUpFields;
use bizova_domain::id::{BusinessId, UserId};

use crate::domain::repository::{
    BusinessRepository, ProfileRepository, RevalidationPort, SessionGate,
};
use crate::domain::types::{IssuedSession, NewProfile, RevalidateScope};
use crate::error::{ConsoleError, GateError};
use crate::usecase::saga::{Compensate, Compensation, CompensationLog, ProvisionStep};

/// Path the confirmation email sends the user back to.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug)]
pub struct ProvisionedAccount {
    pub identity_id: UserId,
    pub business_id: BusinessId,
    /// Session to hand to the browser. `None` while email confirmation is pending.
    pub session: Option<IssuedSession>,
}

// ── ProvisionAccount ─────────────────────────────────────────────────────────

pub struct ProvisionAccountUseCase<G, B, P, R>
where
    G: SessionGate,
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    pub gate: G,
    pub businesses: B,
    pub profiles: P,
    pub revalidator: R,
    pub site_url: String,
}

impl<G, B, P, R> ProvisionAccountUseCase<G, B, P, R>
where
    G: SessionGate,
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    /// Create identity, business and profile in that order. On failure every
    /// completed step is undone before the error is returned.
    pub async fn execute(&self, fields: SignUpFields) -> Result<ProvisionedAccount, ConsoleError> {
        fields.validate_required().inspect_err(|_| {
            tracing::info!(
                step = ProvisionStep::ValidateFields.as_str(),
                "sign-up rejected: missing required fields"
            );
        })?;

        let mut log = CompensationLog::new();

        // Step 1: identity
        let redirect_to = format!("{}{DASHBOARD_PATH}", self.site_url.trim_end_matches('/'));
        let email = fields.email.trim();
        let identity = match self
            .gate
            .create_identity(email, &fields.password, &redirect_to)
            .await
        {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                tracing::warn!(
                    step = ProvisionStep::CreateIdentity.as_str(),
                    "gate returned no identity"
                );
                return Err(ConsoleError::AccountCreationFailed);
            }
            Err(GateError::Rejected { status, message }) => {
                tracing::info!(
                    step = ProvisionStep::CreateIdentity.as_str(),
                    status,
                    "gate rejected sign-up"
                );
                return Err(ConsoleError::IdentityCreation(message));
            }
            Err(GateError::Transport(e)) => {
                return Err(ConsoleError::Internal(e.context("create identity")));
            }
        };
        log.record(
            ProvisionStep::CreateIdentity,
            Compensation::DeleteIdentity(identity.id),
        );
        tracing::info!(
            step = ProvisionStep::CreateIdentity.as_str(),
            identity_id = %identity.id,
            "identity created"
        );

        // Step 2: business
        let business = match self.businesses.create(&fields.business()).await {
            Ok(business) => business,
            Err(e) => {
                let detail = e.detail();
                log.run(ProvisionStep::CreateBusiness, self).await;
                return Err(ConsoleError::BusinessCreation(detail));
            }
        };
        log.record(
            ProvisionStep::CreateBusiness,
            Compensation::DeleteBusiness(business.id),
        );
        tracing::info!(
            step = ProvisionStep::CreateBusiness.as_str(),
            identity_id = %identity.id,
            business_id = %business.id,
            "business created"
        );

        // Step 3: profile
        let profile = NewProfile {
            id: identity.id,
            first_name: fields.first_name.trim().to_owned(),
            last_name: fields.last_name.trim().to_owned(),
            phone: bizova_domain::account::non_empty(fields.phone.as_deref()),
            email: email.to_owned(),
            business_id: business.id,
        };
        if let Err(e) = self.profiles.create(&profile).await {
            let detail = e.detail();
            log.run(ProvisionStep::CreateProfile, self).await;
            return Err(ConsoleError::ProfileCreation(detail));
        }
        tracing::info!(
            step = ProvisionStep::CreateProfile.as_str(),
            identity_id = %identity.id,
            business_id = %business.id,
            "account provisioned"
        );

        self.revalidator.revalidate(RevalidateScope::ROOT_LAYOUT);

        Ok(ProvisionedAccount {
            identity_id: identity.id,
            business_id: business.id,
            session: identity.session,
        })
    }
}

impl<G, B, P, R> Compensate for ProvisionAccountUseCase<G, B, P, R>
where
    G: SessionGate,
    B: BusinessRepository,
    P: ProfileRepository,
    R: RevalidationPort,
{
    async fn compensate(&self, compensation: Compensation) -> anyhow::Result<()> {
        match compensation {
            Compensation::DeleteIdentity(id) => {
                self.gate.delete_identity(id).await?;
            }
            Compensation::DeleteBusiness(id) => {
                if !self.businesses.delete(id).await.map_err(anyhow_from)? {
                    tracing::warn!(business_id = %id, "business already gone");
                }
            }
        }
        Ok(())
    }
}

/// Flatten a store error into `anyhow` for compensation reporting.
pub(crate) fn anyhow_from(e: ConsoleError) -> anyhow::Error {
    match e {
        ConsoleError::Internal(inner) => inner,
        other => anyhow::anyhow!(other.to_string()),
    }
}
