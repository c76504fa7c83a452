use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use bizova_auth_types::cookie::{
    access_token_from_headers, clear_cookies, set_access_token_cookie, set_refresh_token_cookie,
};
use bizova_domain::account::{
    OnboardingFields, SignUpFields, check_password, check_personal_step,
};

use crate::error::ConsoleError;
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::onboarding::CompleteOnboardingUseCase;
use crate::usecase::provision::{DASHBOARD_PATH, ProvisionAccountUseCase};
use crate::usecase::session::{EndSessionUseCase, LOGIN_PATH};

// ── Forms ────────────────────────────────────────────────────────────────────

/// First page of the sign-up form.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalStepForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub repeat_password: String,
}

/// Both pages of the sign-up form, submitted together.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub repeat_password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub business_name: String,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_location: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub business_name: String,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_location: Option<String>,
}

// ── POST /auth/sign-up/personal ──────────────────────────────────────────────

pub async fn check_personal_details(
    Form(form): Form<PersonalStepForm>,
) -> Result<StatusCode, ConsoleError> {
    check_personal_step(
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.password,
        &form.repeat_password,
    )?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /auth/sign-up ───────────────────────────────────────────────────────

pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignUpForm>,
) -> Result<impl IntoResponse, ConsoleError> {
    let repeat_password = form.repeat_password;
    let fields = SignUpFields {
        email: form.email,
        password: form.password,
        first_name: form.first_name,
        last_name: form.last_name,
        phone: form.phone,
        business_name: form.business_name,
        business_email: form.business_email,
        business_phone: form.business_phone,
        business_location: form.business_location,
    };
    // Form-level checks: nothing reaches the gate with an unconfirmed password.
    fields.validate_required()?;
    check_password(&fields.password, &repeat_password)?;

    let usecase = ProvisionAccountUseCase {
        gate: state.gate(),
        businesses: state.business_repo(),
        profiles: state.profile_repo(),
        revalidator: state.revalidator(),
        site_url: state.site_url.clone(),
    };
    let account = usecase.execute(fields).await?;

    let jar = match account.session {
        Some(session) => {
            let jar = set_access_token_cookie(
                jar,
                session.access_token,
                session.expires_in,
                state.cookie_domain.clone(),
            );
            set_refresh_token_cookie(jar, session.refresh_token, state.cookie_domain.clone())
        }
        None => jar,
    };
    Ok((jar, Redirect::to(DASHBOARD_PATH)))
}

// ── POST /auth/onboarding ────────────────────────────────────────────────────

pub async fn complete_onboarding(
    session: Session,
    State(state): State<AppState>,
    Form(form): Form<OnboardingForm>,
) -> Result<Redirect, ConsoleError> {
    let fields = OnboardingFields {
        first_name: form.first_name,
        last_name: form.last_name,
        phone: form.phone,
        business_name: form.business_name,
        business_email: form.business_email,
        business_phone: form.business_phone,
        business_location: form.business_location,
    };
    let usecase = CompleteOnboardingUseCase {
        businesses: state.business_repo(),
        profiles: state.profile_repo(),
        revalidator: state.revalidator(),
    };
    usecase.execute(&session.claims, fields).await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}

// ── GET /auth/session ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: uuid::Uuid,
    pub email: Option<String>,
    pub expires_at: u64,
}

pub async fn get_session(session: Session) -> Json<SessionResponse> {
    Json(SessionResponse {
        user_id: session.claims.user_id,
        email: session.claims.email,
        expires_at: session.claims.expires_at,
    })
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

/// The raw cookie goes to the gate without a local check, so an expired or
/// revoked session gets the gate's own answer. Cookies are always cleared.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let outcome = match access_token_from_headers(&headers) {
        Some(token) => {
            let usecase = EndSessionUseCase {
                gate: state.gate(),
                revalidator: state.revalidator(),
            };
            usecase.execute(&token).await
        }
        None => Ok(()),
    };

    let jar = clear_cookies(jar, state.cookie_domain.clone());
    match outcome {
        Ok(()) => (jar, Redirect::to(LOGIN_PATH)).into_response(),
        Err(e) => (jar, e).into_response(),
    }
}
