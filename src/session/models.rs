//! Session data models

use serde::{Deserialize, Serialize};

/// Current user as returned by `/auth/usuarios/me` and the login endpoints.
///
/// Wire names are the backend's Spanish field names; timestamps cross the
/// wire as ISO strings and are parsed on demand where the UI needs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    #[serde(rename = "email_verificado", default)]
    pub email_verified: bool,
    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
    #[serde(rename = "es_superadmin", default)]
    pub superadmin: bool,
    #[serde(rename = "google_id", default)]
    pub google_id: Option<String>,
    #[serde(rename = "google_photo_url", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "ultimo_login", default)]
    pub last_login: Option<String>,

    // Preferences
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default = "default_digest")]
    pub email_digest: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Abbreviated user embedded in comments, attendance records and member
/// listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicUser {
    pub id: i64,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    pub email: String,
}

/// Token pair issued by login, invitation registration and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Access-token lifetime in seconds.
    pub expires_in: i64,
}

/// The whole persisted session. A present user implies present tokens: the
/// fields are not optional, so the invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

fn default_true() -> bool {
    true
}

fn default_digest() -> String {
    "weekly".to_string()
}

fn default_language() -> String {
    "es".to_string()
}

fn default_token_type() -> String {
    "bearer".to_string()
}
