use uuid::Uuid;

use bizova_domain::content::AppointmentStatus;
use bizova_domain::id::UserId;
use bizova_domain::pagination::PageRequest;

use crate::domain::repository::{AppointmentRepository, ProfileRepository};
use crate::domain::types::Appointment;
use crate::error::ConsoleError;
use crate::usecase::account::resolve_business;

// ── GetAppointments ──────────────────────────────────────────────────────────

pub struct GetAppointmentsUseCase<P: ProfileRepository, R: AppointmentRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: AppointmentRepository> GetAppointmentsUseCase<P, R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        status: Option<AppointmentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Appointment>, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo.list(business_id, status, page.clamped()).await
    }
}

// ── GetAppointment ───────────────────────────────────────────────────────────

pub struct GetAppointmentUseCase<P: ProfileRepository, R: AppointmentRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: AppointmentRepository> GetAppointmentUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId, id: Uuid) -> Result<Appointment, ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        self.repo
            .find(business_id, id)
            .await?
            .ok_or(ConsoleError::AppointmentNotFound)
    }
}

// ── SetAppointmentStatus ─────────────────────────────────────────────────────

pub struct SetAppointmentStatusUseCase<P: ProfileRepository, R: AppointmentRepository> {
    pub profiles: P,
    pub repo: R,
}

impl<P: ProfileRepository, R: AppointmentRepository> SetAppointmentStatusUseCase<P, R> {
    /// Only `requested → confirmed|cancelled` and `confirmed → cancelled` are
    /// allowed; setting the current status again is a no-op.
    pub async fn execute(
        &self,
        user_id: UserId,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), ConsoleError> {
        let business_id = resolve_business(&self.profiles, user_id).await?;
        let current = self
            .repo
            .find(business_id, id)
            .await?
            .ok_or(ConsoleError::AppointmentNotFound)?;
        if current.status == status {
            return Ok(());
        }
        if !current.status.can_transition_to(status) {
            return Err(ConsoleError::InvalidStatus);
        }
        self.repo.update_status(business_id, id, status).await
    }
}
