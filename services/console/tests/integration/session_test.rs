use uuid::Uuid;

use bizova_console::domain::types::RevalidateScope;
use bizova_console::error::ConsoleError;
use bizova_console::usecase::account::GetAccountUseCase;
use bizova_console::usecase::session::EndSessionUseCase;
use bizova_domain::id::{BusinessId, UserId};

use crate::helpers::{MockGate, MockProfileRepo, MockRevalidator};

// ── EndSession ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_end_session_and_signal_revalidation() {
    let gate = MockGate::accepting();
    let calls = gate.calls_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    EndSessionUseCase { gate, revalidator }
        .execute("access-token")
        .await
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["end_session"]);
    assert_eq!(*signals.lock().unwrap(), vec![RevalidateScope::ROOT_LAYOUT]);
}

#[tokio::test]
async fn should_return_gate_error_verbatim_for_invalidated_session() {
    let mut gate = MockGate::accepting();
    gate.end_session_error = Some("Session from session_id claim in JWT does not exist".into());
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    let err = EndSessionUseCase { gate, revalidator }
        .execute("stale-token")
        .await
        .unwrap_err();

    assert!(matches!(err, ConsoleError::SessionEnd(_)));
    assert_eq!(
        err.to_string(),
        "Session from session_id claim in JWT does not exist"
    );
    assert!(signals.lock().unwrap().is_empty());
}

// ── GetAccount ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_join_profile_with_business() {
    let user_id = UserId(Uuid::new_v4());
    let business_id = BusinessId(Uuid::new_v4());
    let usecase = GetAccountUseCase {
        profiles: MockProfileRepo::with_account(user_id, business_id),
    };

    let account = usecase.execute(user_id).await.unwrap();
    assert_eq!(account.profile.id, user_id);
    assert_eq!(account.business.id, business_id);
    assert_eq!(account.business.name, "Acme");
}

#[tokio::test]
async fn should_report_missing_profile() {
    let usecase = GetAccountUseCase {
        profiles: MockProfileRepo::empty(),
    };
    let result = usecase.execute(UserId(Uuid::new_v4())).await;
    assert!(matches!(result, Err(ConsoleError::ProfileNotFound)));
}
