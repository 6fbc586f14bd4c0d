//! Session manager
//!
//! Owns the current user and token pair, persists them through a
//! [`SessionStore`], and fronts every backend call: it attaches the bearer
//! header, decodes the backend's `{"detail": …}` error envelope, and on a 401
//! performs exactly one refresh-then-retry cycle. A failed refresh is
//! terminal: the session is cleared and the caller sees `SessionExpired`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::{Session, TokenResponse, User};
use super::store::SessionStore;
use crate::common::{safe_email_log, safe_token_log, ApiError, Config, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const REFRESH_ENDPOINT: &str = "/auth/refresh-token";

/// Per-request knobs. The only one so far mirrors the original client's
/// `skipAuth`: login, registration and refresh itself must not carry a
/// bearer header, and a 401 on them means bad credentials rather than an
/// expired session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    pub skip_auth: bool,
}

impl RequestOptions {
    pub fn unauthenticated() -> Self {
        Self { skip_auth: true }
    }
}

#[derive(Serialize)]
struct RefreshRequest {
    refresh_token: String,
}

// FastAPI-style error envelope. `detail` is usually a string but shows up as
// a structured list on 422 validation failures.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

pub struct SessionManager {
    http: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    session: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.api_url.clone(),
            store,
            session: RwLock::new(None),
        }
    }

    /// Loads a previously persisted session, if any. Called once at startup.
    pub async fn initialize(&self) -> Result<bool> {
        let stored = self.store.load().await?;
        let present = stored.is_some();
        if let Some(ref session) = stored {
            debug!(
                user = %safe_email_log(&session.user.email),
                "Restored session from store"
            );
        }
        *self.session.write().await = stored;
        Ok(present)
    }

    /// Stores the user record and both tokens; subsequent authenticated
    /// calls use the access token.
    pub async fn login(&self, user: User, access_token: String, refresh_token: String) -> Result<()> {
        info!(user = %safe_email_log(&user.email), "Session established");
        let session = Session {
            user,
            access_token,
            refresh_token,
        };
        self.store.save(&session).await?;
        *self.session.write().await = Some(session);
        Ok(())
    }

    /// Clears all stored session data unconditionally.
    pub async fn logout(&self) -> Result<()> {
        *self.session.write().await = None;
        self.store.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.refresh_token.clone())
    }

    /// Replaces the cached user record after a profile update and persists
    /// the session so other processes pick it up.
    pub async fn update_user(&self, user: User) -> Result<()> {
        let mut guard = self.session.write().await;
        if let Some(session) = guard.as_mut() {
            session.user = user;
            self.store.save(session).await?;
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request, attaching the bearer header unless the caller opted
    /// out, and retries exactly once after a successful token refresh. The
    /// `customize` closure is re-applied on the retry so bodies (JSON,
    /// multipart) are rebuilt rather than reused.
    async fn execute<F>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
        customize: F,
    ) -> Result<Response>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let mut refreshed = false;
        loop {
            let mut request = self.http.request(method.clone(), self.url(path));
            if !opts.skip_auth {
                if let Some(token) = self.access_token().await {
                    request = request.bearer_auth(token);
                }
            }

            let response = customize(request).send().await?;

            if response.status() == StatusCode::UNAUTHORIZED && !opts.skip_auth && !refreshed {
                debug!(path, "Access token rejected, attempting refresh");
                self.refresh().await?;
                refreshed = true;
                continue;
            }

            return Ok(response);
        }
    }

    /// Exchanges the stored refresh token for a new access token. Success
    /// replaces only the access token; any failure clears the session and is
    /// treated as "session no longer valid".
    async fn refresh(&self) -> Result<()> {
        let Some(refresh_token) = self.refresh_token().await else {
            self.force_logout().await;
            return Err(ApiError::SessionExpired);
        };

        let outcome = self
            .http
            .post(self.url(REFRESH_ENDPOINT))
            .json(&RefreshRequest {
                refresh_token: refresh_token.clone(),
            })
            .send()
            .await;

        let response = match outcome {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(
                    http_status = %response.status(),
                    token = %safe_token_log(&refresh_token),
                    "Refresh token rejected"
                );
                self.force_logout().await;
                return Err(ApiError::SessionExpired);
            }
            Err(e) => {
                warn!(error = %e, "Token refresh request failed");
                self.force_logout().await;
                return Err(ApiError::SessionExpired);
            }
        };

        let tokens: TokenResponse = match response.json().await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "Malformed refresh response");
                self.force_logout().await;
                return Err(ApiError::SessionExpired);
            }
        };

        let mut guard = self.session.write().await;
        if let Some(session) = guard.as_mut() {
            session.access_token = tokens.access_token;
            self.store.save(session).await?;
            debug!(
                token = %safe_token_log(&session.access_token),
                "Access token refreshed"
            );
        }
        Ok(())
    }

    async fn force_logout(&self) {
        *self.session.write().await = None;
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "Failed to clear session store");
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response, opts: RequestOptions) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        Err(Self::error_from(response, opts).await)
    }

    async fn error_from(response: Response, opts: RequestOptions) -> ApiError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => match body.detail {
                serde_json::Value::String(detail) => detail,
                other => other.to_string(),
            },
            Err(_) => fallback,
        };
        ApiError::from_status(status.as_u16(), detail, opts.skip_auth)
    }

    // ------------------------------------------------------------------
    // Typed helpers used by the domain clients
    // ------------------------------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute(Method::GET, path, RequestOptions::default(), |r| r)
            .await?;
        self.decode(response, RequestOptions::default()).await
    }

    /// GET where a 404 is an expected condition (no attendance record yet,
    /// no facility code configured) rather than an error.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// GET returning the raw response for file downloads; status errors are
    /// still mapped onto the taxonomy.
    pub async fn get_raw(&self, path: &str) -> Result<Response> {
        let response = self
            .execute(Method::GET, path, RequestOptions::default(), |r| r)
            .await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from(response, RequestOptions::default()).await)
        }
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let payload = serde_json::to_value(body)?;
        let response = self
            .execute(Method::POST, path, RequestOptions::default(), move |r| {
                r.json(&payload)
            })
            .await?;
        self.decode(response, RequestOptions::default()).await
    }

    /// POST without a body (invitation accept/reject, test email triggers).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute(Method::POST, path, RequestOptions::default(), |r| r)
            .await?;
        self.decode(response, RequestOptions::default()).await
    }

    /// POST for login-style endpoints: no bearer header, and a 401 maps to
    /// `AuthFailed` instead of `SessionExpired`.
    pub async fn post_unauthenticated<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let opts = RequestOptions::unauthenticated();
        let payload = serde_json::to_value(body)?;
        let response = self
            .execute(Method::POST, path, opts, move |r| r.json(&payload))
            .await?;
        self.decode(response, opts).await
    }

    /// POST a multipart form. The builder closure is invoked per attempt
    /// because a `Form` cannot be reused across the refresh retry.
    pub async fn post_multipart<T, F>(&self, path: &str, form: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::multipart::Form,
    {
        let response = self
            .execute(Method::POST, path, RequestOptions::default(), move |r| {
                r.multipart(form())
            })
            .await?;
        self.decode(response, RequestOptions::default()).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let payload = serde_json::to_value(body)?;
        let response = self
            .execute(Method::PUT, path, RequestOptions::default(), move |r| {
                r.json(&payload)
            })
            .await?;
        self.decode(response, RequestOptions::default()).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute(Method::DELETE, path, RequestOptions::default(), |r| r)
            .await?;
        self.decode(response, RequestOptions::default()).await
    }
}
