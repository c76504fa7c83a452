use bizova_console::domain::types::RevalidateScope;
use bizova_console::error::ConsoleError;
use bizova_console::usecase::provision::ProvisionAccountUseCase;
use bizova_domain::account::SignUpFields;

use crate::helpers::{
    MockBusinessRepo, MockGate, MockProfileRepo, MockRevalidator, SITE_URL, SignUpOutcome,
    acme_sign_up,
};

fn usecase(
    gate: MockGate,
    businesses: MockBusinessRepo,
    profiles: MockProfileRepo,
    revalidator: MockRevalidator,
) -> ProvisionAccountUseCase<MockGate, MockBusinessRepo, MockProfileRepo, MockRevalidator> {
    ProvisionAccountUseCase {
        gate,
        businesses,
        profiles,
        revalidator,
        site_url: SITE_URL.to_owned(),
    }
}

// ── Success ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_provision_acme_with_account_email_on_business() {
    let gate = MockGate::accepting();
    let identities = gate.identities_handle();
    let redirects = gate.redirects_handle();
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let profiles = MockProfileRepo::empty();
    let profile_rows = profiles.rows_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    let account = usecase(gate, businesses, profiles, revalidator)
        .execute(acme_sign_up())
        .await
        .unwrap();

    let businesses = business_rows.lock().unwrap();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].name, "Acme");
    assert_eq!(businesses[0].email.as_deref(), Some("j@x.com"));
    assert_eq!(businesses[0].phone, None);
    assert_eq!(businesses[0].location, None);

    let profiles = profile_rows.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    let profile = &profiles[0];
    assert_eq!(profile.business_id, businesses[0].id);
    assert_eq!(profile.id, identities.lock().unwrap()[0]);
    assert_eq!(profile.first_name, "J");
    assert_eq!(profile.last_name, "D");
    assert_eq!(profile.email, "j@x.com");

    assert_eq!(account.identity_id, profile.id);
    assert_eq!(account.business_id, businesses[0].id);
    assert!(account.session.is_none());

    assert_eq!(
        *redirects.lock().unwrap(),
        vec!["http://localhost:3000/dashboard".to_owned()]
    );
    assert_eq!(*signals.lock().unwrap(), vec![RevalidateScope::ROOT_LAYOUT]);
}

#[tokio::test]
async fn should_prefer_business_contact_fields_when_given() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let fields = SignUpFields {
        phone: Some(" 555-0100 ".into()),
        business_email: Some("hello@acme.io".into()),
        business_phone: Some("555-0199".into()),
        business_location: Some("Lisbon".into()),
        ..acme_sign_up()
    };

    usecase(
        MockGate::accepting(),
        businesses,
        MockProfileRepo::empty(),
        MockRevalidator::default(),
    )
    .execute(fields)
    .await
    .unwrap();

    let rows = business_rows.lock().unwrap();
    assert_eq!(rows[0].email.as_deref(), Some("hello@acme.io"));
    assert_eq!(rows[0].phone.as_deref(), Some("555-0199"));
    assert_eq!(rows[0].location.as_deref(), Some("Lisbon"));
}

#[tokio::test]
async fn should_store_blank_optional_fields_as_null() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let profiles = MockProfileRepo::empty();
    let profile_rows = profiles.rows_handle();
    let fields = SignUpFields {
        phone: Some("   ".into()),
        business_email: Some("".into()),
        business_location: Some("".into()),
        ..acme_sign_up()
    };

    usecase(
        MockGate::accepting(),
        businesses,
        profiles,
        MockRevalidator::default(),
    )
    .execute(fields)
    .await
    .unwrap();

    let business = &business_rows.lock().unwrap()[0];
    assert_eq!(business.email.as_deref(), Some("j@x.com"));
    assert_eq!(business.location, None);
    assert_eq!(profile_rows.lock().unwrap()[0].phone, None);
}

#[tokio::test]
async fn should_return_gate_session_when_signed_in_immediately() {
    let account = usecase(
        MockGate::new(SignUpOutcome::Created { signed_in: true }),
        MockBusinessRepo::empty(),
        MockProfileRepo::empty(),
        MockRevalidator::default(),
    )
    .execute(acme_sign_up())
    .await
    .unwrap();

    let session = account.session.unwrap();
    assert_eq!(session.access_token, "access");
    assert_eq!(session.expires_in, 3600);
}

// ── Validation ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_missing_required_fields_without_any_call() {
    let blanks: Vec<fn(&mut SignUpFields)> = vec![
        |f| f.email.clear(),
        |f| f.password.clear(),
        |f| f.first_name = "  ".into(),
        |f| f.last_name.clear(),
        |f| f.business_name.clear(),
    ];
    for blank in blanks {
        let mut fields = acme_sign_up();
        blank(&mut fields);

        let gate = MockGate::accepting();
        let calls = gate.calls_handle();
        let businesses = MockBusinessRepo::empty();
        let business_rows = businesses.rows_handle();
        let profiles = MockProfileRepo::empty();
        let profile_rows = profiles.rows_handle();

        let result = usecase(gate, businesses, profiles, MockRevalidator::default())
            .execute(fields)
            .await;

        match result {
            Err(ConsoleError::MissingRequiredFields) => {}
            other => panic!("expected MissingRequiredFields, got {other:?}"),
        }
        assert!(calls.lock().unwrap().is_empty());
        assert!(business_rows.lock().unwrap().is_empty());
        assert!(profile_rows.lock().unwrap().is_empty());
    }
}

// ── Step 1 failures ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_pass_gate_rejection_through_and_write_nothing() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let profiles = MockProfileRepo::empty();
    let profile_rows = profiles.rows_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    let result = usecase(
        MockGate::new(SignUpOutcome::Rejected("User already registered".into())),
        businesses,
        profiles,
        revalidator,
    )
    .execute(acme_sign_up())
    .await;

    match result {
        Err(ConsoleError::IdentityCreation(message)) => {
            assert_eq!(message, "User already registered")
        }
        other => panic!("expected IdentityCreation, got {other:?}"),
    }
    assert!(business_rows.lock().unwrap().is_empty());
    assert!(profile_rows.lock().unwrap().is_empty());
    assert!(signals.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_fail_generically_when_gate_returns_no_identity() {
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();

    let result = usecase(
        MockGate::new(SignUpOutcome::NoIdentity),
        businesses,
        MockProfileRepo::empty(),
        MockRevalidator::default(),
    )
    .execute(acme_sign_up())
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ConsoleError::AccountCreationFailed));
    assert_eq!(err.to_string(), "Failed to create user account");
    assert!(business_rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_unreachable_gate_as_internal() {
    let result = usecase(
        MockGate::new(SignUpOutcome::Unreachable),
        MockBusinessRepo::empty(),
        MockProfileRepo::empty(),
        MockRevalidator::default(),
    )
    .execute(acme_sign_up())
    .await;

    assert!(matches!(result, Err(ConsoleError::Internal(_))));
}

// ── Step 2 failure ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_identity_when_business_creation_fails() {
    let gate = MockGate::accepting();
    let identities = gate.identities_handle();
    let calls = gate.calls_handle();
    let profiles = MockProfileRepo::empty();
    let profile_rows = profiles.rows_handle();
    let revalidator = MockRevalidator::default();
    let signals = revalidator.signals_handle();

    let result = usecase(
        gate,
        MockBusinessRepo::failing("connection refused"),
        profiles,
        revalidator,
    )
    .execute(acme_sign_up())
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Failed to create business: connection refused");
    assert!(matches!(err, ConsoleError::BusinessCreation(_)));

    assert!(identities.lock().unwrap().is_empty());
    assert!(profile_rows.lock().unwrap().is_empty());
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["create_identity", "delete_identity"]
    );
    assert!(signals.lock().unwrap().is_empty());
}

// ── Step 3 failure ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_business_and_identity_when_profile_creation_fails() {
    let gate = MockGate::accepting();
    let identities = gate.identities_handle();
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();
    let profiles = MockProfileRepo::failing("duplicate key value violates unique constraint");
    let profile_rows = profiles.rows_handle();

    let result = usecase(gate, businesses, profiles, MockRevalidator::default())
        .execute(acme_sign_up())
        .await;

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to create profile: duplicate key value violates unique constraint"
    );
    assert!(identities.lock().unwrap().is_empty());
    assert!(business_rows.lock().unwrap().is_empty());
    assert!(profile_rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_original_error_when_compensation_fails() {
    let mut gate = MockGate::accepting();
    gate.fail_delete = true;
    let identities = gate.identities_handle();
    let businesses = MockBusinessRepo::empty();
    let business_rows = businesses.rows_handle();

    let result = usecase(
        gate,
        businesses,
        MockProfileRepo::failing("disk full"),
        MockRevalidator::default(),
    )
    .execute(acme_sign_up())
    .await;

    match result {
        Err(ConsoleError::ProfileCreation(message)) => assert_eq!(message, "disk full"),
        other => panic!("expected ProfileCreation, got {other:?}"),
    }
    // Business compensation still ran even though identity deletion failed.
    assert!(business_rows.lock().unwrap().is_empty());
    assert_eq!(identities.lock().unwrap().len(), 1);
}
