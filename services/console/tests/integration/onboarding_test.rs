use uuid::Uuid;

use bizova_auth_types::token::SessionClaims;
use bizova_console::domain::types::RevalidateScope;
use bizova_console::error::ConsoleError;
use bizova_console::usecase::onboarding::CompleteOnboardingUseCase;
use bizova_domain::account::OnboardingFields;
use bizova_domain::id::{BusinessId, UserId};

use crate::helpers::{MockBusinessRepo, MockProfileRepo, MockRevalidator};

fn claims(user_id: Uuid) -> SessionClaims {
    SessionClaims {
        user_id,
        email: Some("j@x.com".into()),
        expires_at: u64::MAX,
    }
}

fn fields() -> OnboardingFields {
    OnboardingFields {
        first_name: "J".into(),
        last_name: "D".into(),
        business_name: "Acme".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn should_create_business_and_profile_for_orphan_identity() {
    let user_id = Uuid::new_v4();
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let profiles = MockProfileRepo::empty();
    let profile_rows = profiles.rows_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    let usecase = CompleteOnboardingUseCase {
        businesses,
        profiles,
        revalidator,
    };
    let business_id = usecase.execute(&claims(user_id), fields()).await.unwrap();

    let businesses = business_rows.lock().unwrap();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].id, business_id);
    assert_eq!(businesses[0].email.as_deref(), Some("j@x.com"));

    let profiles = profile_rows.lock().unwrap();
    assert_eq!(profiles[0].id, UserId(user_id));
    assert_eq!(profiles[0].business_id, business_id);
    assert_eq!(profiles[0].email, "j@x.com");
    assert_eq!(*signals.lock().unwrap(), vec![RevalidateScope::ROOT_LAYOUT]);
}

#[tokio::test]
async fn should_refuse_already_onboarded_identity() {
    let user_id = UserId(Uuid::new_v4());
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let usecase = CompleteOnboardingUseCase {
        businesses,
        profiles: MockProfileRepo::with_account(user_id, BusinessId(Uuid::new_v4())),
        revalidator: MockRevalidator::default(),
    };

    let result = usecase.execute(&claims(user_id.0), fields()).await;
    assert!(matches!(result, Err(ConsoleError::AlreadyOnboarded)));
    assert!(business_rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_require_names_and_business_name() {
    let usecase = CompleteOnboardingUseCase {
        businesses: MockBusinessRepo::empty(),
        profiles: MockProfileRepo::empty(),
        revalidator: MockRevalidator::default(),
    };
    let input = OnboardingFields {
        business_name: " ".into(),
        ..fields()
    };

    let result = usecase.execute(&claims(Uuid::new_v4()), input).await;
    assert!(matches!(result, Err(ConsoleError::MissingOnboardingFields)));
}

#[tokio::test]
async fn should_remove_business_when_profile_creation_fails() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let usecase = CompleteOnboardingUseCase {
        businesses,
        profiles: MockProfileRepo::failing("foreign key violation"),
        revalidator: MockRevalidator::default(),
    };

    let result = usecase.execute(&claims(Uuid::new_v4()), fields()).await;
    match result {
        Err(ConsoleError::ProfileCreation(message)) => {
            assert_eq!(message, "foreign key violation")
        }
        other => panic!("expected ProfileCreation, got {other:?}"),
    }
    assert!(business_rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_concurrent_onboarding_as_already_onboarded() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();
    let usecase = CompleteOnboardingUseCase {
        businesses,
        profiles: MockProfileRepo::conflicting(),
        revalidator,
    };

    let result = usecase.execute(&claims(Uuid::new_v4()), fields()).await;
    assert!(matches!(result, Err(ConsoleError::AlreadyOnboarded)));
    assert!(business_rows.lock().unwrap().is_empty());
    assert!(signals.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_require_session_email() {
    let usecase = CompleteOnboardingUseCase {
        businesses: MockBusinessRepo::empty(),
        profiles: MockProfileRepo::empty(),
        revalidator: MockRevalidator::default(),
    };
    let mut session = claims(Uuid::new_v4());
    session.email = None;

    let result = usecase.execute(&session, fields()).await;
    assert!(matches!(result, Err(ConsoleError::MissingData)));
}
