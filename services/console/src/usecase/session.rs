use crate::domain::repository::{RevalidationPort, SessionGate};
use crate::domain::types::RevalidateScope;
use crate::error::{ConsoleError, GateError};

/// Where the browser lands after signing out.
pub const LOGIN_PATH: &str = "/auth/login";

// ── EndSession ───────────────────────────────────────────────────────────────

pub struct EndSessionUseCase<G: SessionGate, R: RevalidationPort> {
    pub gate: G,
    pub revalidator: R,
}

impl<G: SessionGate, R: RevalidationPort> EndSessionUseCase<G, R> {
    /// Invalidate the session at the gate. Gate refusals are reported verbatim,
    /// including for sessions that were already invalidated.
    pub async fn execute(&self, access_token: &str) -> Result<(), ConsoleError> {
        match self.gate.end_session(access_token).await {
            Ok(()) => {}
            Err(GateError::Rejected { message, .. }) => {
                return Err(ConsoleError::SessionEnd(message));
            }
            Err(GateError::Transport(e)) => {
                return Err(ConsoleError::Internal(e.context("end session")));
            }
        }
        self.revalidator.revalidate(RevalidateScope::ROOT_LAYOUT);
        Ok(())
    }
}
