//! Cookie builders for the session issued by the gate.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::HeaderMap;
use time::Duration;

/// Cookie name for the access token.
pub const BIZOVA_ACCESS_TOKEN: &str = "bizova_access_token";

/// Cookie name for the refresh token.
pub const BIZOVA_REFRESH_TOKEN: &str = "bizova_refresh_token";

/// Cookie Max-Age for the refresh token in seconds (7 days).
pub const REFRESH_TOKEN_MAX_AGE: i64 = 604800;

/// Set the access-token cookie. `max_age` follows the token lifetime reported
/// by the gate.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use bizova_auth_types::cookie::{set_access_token_cookie, BIZOVA_ACCESS_TOKEN};
///
/// let jar = set_access_token_cookie(CookieJar::new(), "t".into(), 3600, "bizova.io".into());
/// let cookie = jar.get(BIZOVA_ACCESS_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("bizova.io"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(
    jar: CookieJar,
    value: String,
    max_age_secs: i64,
    domain: String,
) -> CookieJar {
    let cookie = Cookie::build((BIZOVA_ACCESS_TOKEN, value))
        .path("/")
        .domain(domain)
        .max_age(Duration::seconds(max_age_secs))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Set the refresh-token cookie, scoped to `/auth`.
pub fn set_refresh_token_cookie(jar: CookieJar, value: String, domain: String) -> CookieJar {
    let cookie = Cookie::build((BIZOVA_REFRESH_TOKEN, value))
        .path("/auth")
        .domain(domain)
        .max_age(Duration::seconds(REFRESH_TOKEN_MAX_AGE))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Expire both session cookies.
pub fn clear_cookies(jar: CookieJar, domain: String) -> CookieJar {
    let access = Cookie::build((BIZOVA_ACCESS_TOKEN, ""))
        .path("/")
        .domain(domain.clone())
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    let refresh = Cookie::build((BIZOVA_REFRESH_TOKEN, ""))
        .path("/auth")
        .domain(domain)
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(access).add(refresh)
}

/// Read the access token from a request's `Cookie` headers.
pub fn access_token_from_headers(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(BIZOVA_ACCESS_TOKEN)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
