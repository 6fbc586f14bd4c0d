//! Club and membership data models

use serde::{Deserialize, Serialize};

use crate::session::BasicUser;

#[derive(Debug, Clone, Deserialize)]
pub struct Club {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub slug: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(rename = "color_primario", default)]
    pub primary_color: Option<String>,
    #[serde(rename = "color_secundario", default)]
    pub secondary_color: Option<String>,
    #[serde(rename = "color_acento", default)]
    pub accent_color: Option<String>,
    #[serde(rename = "pais", default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "email_contacto", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "sitio_web", default)]
    pub website: Option<String>,
    #[serde(rename = "latitud", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "creador_id", default)]
    pub creator_id: Option<i64>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClubCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    pub slug: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update; only the fields the backend allows are representable.
#[derive(Debug, Default, Serialize)]
pub struct ClubUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(rename = "color_primario", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(rename = "color_secundario", skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(rename = "color_acento", skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(rename = "pais", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "email_contacto", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "sitio_web", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "latitud", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    pub club_id: i64,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "usuario", default)]
    pub user: Option<BasicUser>,
    #[serde(rename = "fecha_creacion", default)]
    pub joined_at: Option<String>,
}

/// `/clubes/mi-rol/{id}`: the caller's effective role in one club.
#[derive(Debug, Deserialize)]
pub struct RoleResponse {
    #[serde(rename = "rol")]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct MemberInvite {
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberInviteResponse {
    pub message: String,
    pub token: String,
    pub email: String,
}

/// Invitation as listed on the club's members screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubInvitation {
    pub email: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleUpdate {
    #[serde(rename = "rol")]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleUpdateResponse {
    pub message: String,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "rol")]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
