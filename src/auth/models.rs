//! Authentication data models

use serde::{Deserialize, Serialize};

use crate::session::{TokenResponse, User};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    pub password: String,
}

/// `/auth/registro` acknowledges without issuing tokens; the user logs in
/// afterwards (or verifies email first, depending on backend policy).
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct InvitationRegisterRequest {
    pub email: String,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    pub password: String,
    #[serde(rename = "invitacion_token")]
    pub invitation_token: String,
}

#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest {
    pub google_token: String,
}

/// Login, Google login and invitation registration all come back as a user
/// record plus a token pair; invitation registration adds a message.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "usuario")]
    pub user: User,
    pub tokens: TokenResponse,
}

/// Pending club invitation for the current user.
#[derive(Debug, Clone, Deserialize)]
pub struct Invitation {
    #[serde(default)]
    pub id: Option<i64>,
    pub club_id: i64,
    #[serde(rename = "club_nombre", default)]
    pub club_name: Option<String>,
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "estado")]
    pub status: String,
    pub token: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_expiracion", default)]
    pub expires_at: Option<String>,
}

/// Partial update for `/auth/usuarios/me`; only set fields are sent.
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombre_completo", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "contraseña_actual")]
    pub current_password: String,
    #[serde(rename = "contraseña_nueva")]
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
