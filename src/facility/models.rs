//! Facility access-code data models

use serde::{Deserialize, Serialize};

/// The code members punch in at the club facilities. Only the latest active
/// one is shown to members; the full history stays available to admins for
/// auditing.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityPassword {
    #[serde(default)]
    pub id: Option<i64>,
    pub club_id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "activa", default)]
    pub active: bool,
    #[serde(rename = "creado_por_id", default)]
    pub created_by: Option<i64>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FacilityPasswordCreate {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
