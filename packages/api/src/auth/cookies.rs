//! # Credential cookies
//!
//! The backend hands out two JWTs on login and stores them in the browser as cookies:
//!
//! - [`ACCESS_TOKEN_COOKIE`]: short-lived credential read on every server-rendered
//!   request by the session resolver.
//! - [`REFRESH_TOKEN_COOKIE`]: long-lived credential used only by
//!   `POST /auth/refresh-token` to mint a new access token.
//!
//! Both are `HttpOnly`, `Secure`, `SameSite=None` and scoped to `/`. Logout replaces them
//! with empty removal cookies. Readers in this module never set or clear anything.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use http::header::COOKIE;
use http::HeaderMap;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Find the value of cookie `name` across every `Cookie` header on the request.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// The access token presented with the request, if any.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, ACCESS_TOKEN_COOKIE)
}

/// The refresh token presented with the request, if any.
pub fn refresh_token(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, REFRESH_TOKEN_COOKIE)
}

/// `Set-Cookie` value storing a credential for `ttl_secs` seconds.
pub fn credential_cookie(name: &'static str, token: &str, ttl_secs: i64) -> String {
    Cookie::build((name, token.to_string()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::seconds(ttl_secs))
        .build()
        .to_string()
}

/// `Set-Cookie` value that makes the browser drop the credential `name`.
pub fn removal_cookie(name: &'static str) -> String {
    let mut cookie = Cookie::build((name, ""))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .build();
    cookie.make_removal();
    cookie.to_string()
}

/// `Cookie` request header value forwarding an access token to the backend.
pub fn forward_access_token(token: &str) -> String {
    Cookie::new(ACCESS_TOKEN_COOKIE, token).to_string()
}
