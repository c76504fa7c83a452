//! Session helpers for tests.
//!
//! Real sessions are minted by the external gate. `MockSession` signs an
//! equivalent access token with a test secret so handlers and extractors can
//! be exercised without the gate.

use std::time::{SystemTime, UNIX_EPOCH};

use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};
use uuid::Uuid;

use bizova_auth_types::cookie::BIZOVA_ACCESS_TOKEN;
use bizova_auth_types::token::issue_access_token;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Identity to sign into test requests.
pub struct MockSession {
    pub user_id: Uuid,
    pub email: Option<String>,
    /// Lifetime relative to now; negative values produce an expired token.
    pub ttl_secs: i64,
}

impl MockSession {
    pub fn new(user_id: Uuid, email: &str) -> Self {
        Self {
            user_id,
            email: Some(email.to_owned()),
            ttl_secs: 3600,
        }
    }

    pub fn expired(mut self) -> Self {
        self.ttl_secs = -3600;
        self
    }

    /// Signed access token.
    pub fn token(&self, secret: &str) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let exp = (now + self.ttl_secs).max(0) as u64;
        issue_access_token(self.user_id, self.email.as_deref(), exp, secret).unwrap()
    }

    /// `Cookie` header carrying the access token, as a browser would send it.
    pub fn headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{BIZOVA_ACCESS_TOKEN}={}", self.token(secret)))
                .unwrap(),
        );
        map
    }
}
