//! Admin configuration data models

use serde::{Deserialize, Serialize};

/// The backend never returns the real SMTP password; it masks it with this
/// placeholder, and the client must not echo the placeholder back as a new
/// password.
pub const MASKED_PASSWORD: &str = "********";

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    /// Always masked in responses; empty when unset.
    #[serde(default)]
    pub smtp_password: String,
    pub smtp_from_email: String,
    pub smtp_use_tls: bool,
    pub smtp_use_ssl: bool,
    #[serde(default)]
    pub frontend_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailConfigUpdate {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    /// Only sent when the operator actually typed a new password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_password: Option<String>,
    pub smtp_from_email: String,
    pub smtp_use_tls: bool,
    pub smtp_use_ssl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TestEmailRequest {
    pub to_email: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
