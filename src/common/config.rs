// Runtime configuration, resolved once at startup

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment-driven configuration.
///
/// Everything has a workable default except the Google client id, which is
/// only needed for the OAuth login path.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend, including the `/api` prefix.
    pub api_url: String,
    /// OAuth client id for the Google login flow.
    pub google_client_id: Option<String>,
    /// Redirect URI registered with the OAuth provider.
    pub google_redirect_uri: Option<String>,
    /// Where the session (user + tokens) is persisted between runs.
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = env::var("PIARAPP_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_file = env::var("PIARAPP_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        Self {
            api_url,
            google_client_id: env::var("PIARAPP_GOOGLE_CLIENT_ID").ok(),
            google_redirect_uri: env::var("PIARAPP_GOOGLE_REDIRECT_URI").ok(),
            session_file,
        }
    }
}

fn default_session_file() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".piarapp")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_file_is_under_home() {
        let path = default_session_file();
        assert!(path.ends_with(".piarapp/session.json"));
    }
}
