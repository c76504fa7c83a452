//! Compensation log for multi-step account provisioning.
//!
//! Identity, business and profile live in two systems with no shared
//! transaction. Each successful step records how to undo itself; when a later
//! step fails the log is unwound newest first.

#![allow(async_fn_in_trait)]

use bizova_domain::id::{BusinessId, UserId};

/// Steps of the provisioning workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    ValidateFields,
    CreateIdentity,
    CreateBusiness,
    CreateProfile,
}

impl ProvisionStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValidateFields => "validate_fields",
            Self::CreateIdentity => "create_identity",
            Self::CreateBusiness => "create_business",
            Self::CreateProfile => "create_profile",
        }
    }
}

/// Undo action for a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compensation {
    DeleteIdentity(UserId),
    DeleteBusiness(BusinessId),
}

/// Runs a single compensation against the owning system.
pub trait Compensate {
    async fn compensate(&self, compensation: Compensation) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct CompensationLog {
    entries: Vec<(ProvisionStep, Compensation)>,
}

impl CompensationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: ProvisionStep, compensation: Compensation) {
        self.entries.push((step, compensation));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain the log, newest entry first.
    pub fn unwind(&mut self) -> impl Iterator<Item = (ProvisionStep, Compensation)> + '_ {
        self.entries.drain(..).rev()
    }

    /// Run every recorded compensation in reverse order. Failures are logged
    /// and skipped; the caller keeps reporting the error that triggered the
    /// unwind.
    pub async fn run<C: Compensate>(&mut self, failed_at: ProvisionStep, compensator: &C) {
        for (step, compensation) in self.unwind() {
            match compensator.compensate(compensation).await {
                Ok(()) => tracing::info!(
                    failed_at = failed_at.as_str(),
                    undone = step.as_str(),
                    ?compensation,
                    "compensation applied"
                ),
                Err(e) => tracing::error!(
                    failed_at = failed_at.as_str(),
                    undone = step.as_str(),
                    ?compensation,
                    error = %e,
                    "compensation failed, manual cleanup required"
                ),
            }
        }
    }
}
