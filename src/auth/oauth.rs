//! Google OAuth front-door helpers
//!
//! The client never talks to the provider's token endpoint; it only builds
//! the authorization URL the user opens in a browser. The backend exchanges
//! and validates the resulting token via `/auth/google-login`.

use uuid::Uuid;

use crate::common::{ApiError, Config, Result};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_SCOPE: &str = "openid email profile";

/// An authorization request: the URL to open plus the `state` nonce the
/// callback must echo back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
    pub redirect_uri: String,
}

/// Builds the provider authorization URL with a fresh `state` nonce.
pub fn authorization_request(config: &Config) -> Result<AuthorizationRequest> {
    let client_id = config
        .google_client_id
        .as_deref()
        .ok_or_else(|| ApiError::Validation("Google client id is not configured".to_string()))?;

    let redirect_uri = config
        .google_redirect_uri
        .clone()
        .unwrap_or_else(|| "http://localhost:5173/auth/google/callback".to_string());

    let state = Uuid::new_v4().to_string();

    let url = format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&access_type=offline&prompt=consent&include_granted_scopes=true&state={}",
        GOOGLE_AUTH_URL,
        urlencoding::encode(client_id),
        urlencoding::encode(&redirect_uri),
        urlencoding::encode(GOOGLE_SCOPE),
        urlencoding::encode(&state)
    );

    Ok(AuthorizationRequest {
        url,
        state,
        redirect_uri,
    })
}

/// The callback must carry the same `state` that went out with the
/// authorization request.
pub fn verify_state(expected: &str, received: &str) -> Result<()> {
    if expected == received {
        Ok(())
    } else {
        Err(ApiError::AuthFailed(
            "OAuth state mismatch, restart the login flow".to_string(),
        ))
    }
}
