//! # Typed client for the Eventora backend
//!
//! Every backend endpoint answers with the same envelope:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... } }
//! ```
//!
//! [`ApiResponse`] is the serde shape of that envelope and [`BackendClient`] unwraps it,
//! turning non-2xx statuses, `success: false` and undecodable bodies into
//! [`Error::Backend`] / [`Error::Http`]. Calls that need the caller's identity forward the
//! access token as an `accessToken` cookie, the same way a browser would.

use http::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::cookies::forward_access_token;
use crate::config::Backend;
use crate::error::{Error, Result};
use crate::models::{Event, Payment, UserProfile};

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens returned by `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful login: the tokens plus the `Set-Cookie` values the backend issued.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub tokens: LoginTokens,
    pub set_cookies: Vec<String>,
}

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(settings: &Backend) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(http, &settings.url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request.header(COOKIE, forward_access_token(access_token))
    }

    /// `GET /auth/me` on behalf of the holder of `access_token`.
    pub async fn me(&self, access_token: &str) -> Result<UserProfile> {
        let request = self.authorized(self.http.get(self.url("/auth/me")), access_token);
        unwrap_envelope(request.send().await?).await
    }

    /// `POST /auth/login`, keeping the cookies the backend set.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginOutcome> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let tokens = unwrap_envelope(response).await?;
        Ok(LoginOutcome {
            tokens,
            set_cookies,
        })
    }

    /// `POST /auth/logout`. The backend only answers with removal cookies.
    pub async fn logout(&self, access_token: Option<&str>) -> Result<()> {
        let mut request = self.http.post(self.url("/auth/logout"));
        if let Some(token) = access_token {
            request = self.authorized(request, token);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Backend {
                status: response.status().as_u16(),
                message: "logout rejected".to_string(),
            });
        }
        Ok(())
    }

    /// `GET /events`.
    pub async fn events(&self) -> Result<Vec<Event>> {
        unwrap_envelope(self.http.get(self.url("/events")).send().await?).await
    }

    /// `GET /payments`, scoped by the backend to the caller's role.
    pub async fn payments(&self, access_token: &str) -> Result<Vec<Payment>> {
        self.get_authorized("/payments", access_token).await
    }

    /// `GET /users` (admin only).
    pub async fn users(&self, access_token: &str) -> Result<Vec<UserProfile>> {
        self.get_authorized("/users", access_token).await
    }

    async fn get_authorized<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T> {
        let request = self.authorized(self.http.get(self.url(path)), access_token);
        unwrap_envelope(request.send().await?).await
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body: ApiResponse<T> = match response.json().await {
        Ok(body) => body,
        Err(e) if status.is_success() => return Err(e.into()),
        Err(_) => {
            return Err(Error::Backend {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("error").to_string(),
            })
        }
    };
    if !status.is_success() || !body.success {
        return Err(Error::Backend {
            status: status.as_u16(),
            message: body.message,
        });
    }
    body.data.ok_or_else(|| Error::Backend {
        status: status.as_u16(),
        message: "response carried no data".to_string(),
    })
}
