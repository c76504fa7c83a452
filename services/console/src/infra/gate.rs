//! Session gate adapter for a GoTrue-compatible auth backend.
//!
//! Sign-up and sign-out go over HTTP with the anon key. Identity deletion
//! (compensation only) uses the service key. Sessions are validated locally
//! against the shared JWT secret.

use anyhow::Context as _;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use uuid::Uuid;

use bizova_auth_types::token::{SessionClaims, validate_access_token};
use bizova_domain::id::UserId;

use crate::domain::repository::SessionGate;
use crate::domain::types::{CreatedIdentity, IssuedSession};
use crate::error::GateError;

#[derive(Clone)]
pub struct HttpSessionGate {
    pub client: reqwest::Client,
    pub base_url: String,
    pub anon_key: String,
    pub service_key: String,
    pub jwt_secret: String,
}

impl HttpSessionGate {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{path}", self.base_url.trim_end_matches('/'))
    }
}

impl SessionGate for HttpSessionGate {
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<Option<CreatedIdentity>, GateError> {
        let url = Url::parse_with_params(&self.endpoint("/signup"), &[("redirect_to", redirect_to)])
            .context("build sign-up url")?;
        let resp = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("send sign-up request")?;
        let status = resp.status();
        let body = resp.text().await.context("read sign-up response")?;
        if !status.is_success() {
            return Err(rejection(status, &body));
        }
        Ok(parse_sign_up(&body)?)
    }

    async fn delete_identity(&self, id: UserId) -> Result<(), GateError> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("/admin/users/{id}")))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .context("send delete identity request")?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status, &body));
        }
        Ok(())
    }

    async fn end_session(&self, access_token: &str) -> Result<(), GateError> {
        let resp = self
            .client
            .post(self.endpoint("/logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("send logout request")?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status, &body));
        }
        Ok(())
    }

    fn validate_session(&self, access_token: &str) -> Option<SessionClaims> {
        match validate_access_token(access_token, &self.jwt_secret) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(error = %e, "session rejected");
                None
            }
        }
    }
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    /// Returned when the account needs no confirmation and is signed in at once.
    Session {
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserBody,
    },
    /// Returned while email confirmation is pending.
    User(UserBody),
}

#[derive(Deserialize)]
struct UserBody {
    id: Option<Uuid>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn parse_sign_up(body: &str) -> anyhow::Result<Option<CreatedIdentity>> {
    let parsed: SignUpBody = serde_json::from_str(body).context("decode sign-up response")?;
    let (user, session) = match parsed {
        SignUpBody::Session {
            access_token,
            refresh_token,
            expires_in,
            user,
        } => (
            user,
            Some(IssuedSession {
                access_token,
                refresh_token,
                expires_in,
            }),
        ),
        SignUpBody::User(user) => (user, None),
    };
    Ok(user.id.map(|id| CreatedIdentity {
        id: UserId(id),
        email: user.email.unwrap_or_default(),
        session,
    }))
}

/// Human-readable refusal from an error body, falling back to the status text.
fn rejection(status: StatusCode, body: &str) -> GateError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("session gate error")
                .to_owned()
        });
    GateError::Rejected {
        status: status.as_u16(),
        message,
    }
}
