//! Member documentation data models
//!
//! Each member keeps two regulatory documents on file: the liability
//! insurance ("seguro RC") and the pilot license card ("carnet").

use bytes::Bytes;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Documentation {
    pub id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,

    #[serde(rename = "rc_numero", default)]
    pub insurance_number: Option<String>,
    #[serde(rename = "rc_fecha_emision", default)]
    pub insurance_issued_at: Option<String>,
    #[serde(rename = "rc_fecha_vencimiento", default)]
    pub insurance_expires_at: Option<String>,
    #[serde(rename = "rc_archivo_nombre", default)]
    pub insurance_file_name: Option<String>,
    #[serde(rename = "rc_archivo_mime", default)]
    pub insurance_file_mime: Option<String>,
    #[serde(rename = "rc_tiene_archivo", default)]
    pub insurance_has_file: bool,

    #[serde(rename = "carnet_numero", default)]
    pub license_number: Option<String>,
    #[serde(rename = "carnet_fecha_emision", default)]
    pub license_issued_at: Option<String>,
    #[serde(rename = "carnet_fecha_vencimiento", default)]
    pub license_expires_at: Option<String>,
    #[serde(rename = "carnet_archivo_nombre", default)]
    pub license_file_name: Option<String>,
    #[serde(rename = "carnet_archivo_mime", default)]
    pub license_file_mime: Option<String>,
    #[serde(rename = "carnet_tiene_archivo", default)]
    pub license_has_file: bool,

    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<String>,
}

/// A file staged for upload, held in memory so the multipart form can be
/// rebuilt if the request is retried after a token refresh.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Partial upsert; unset fields leave the stored values untouched.
#[derive(Debug, Default, Clone)]
pub struct DocumentationUpdate {
    pub insurance_number: Option<String>,
    pub insurance_issued_at: Option<String>,
    pub insurance_expires_at: Option<String>,
    pub license_number: Option<String>,
    pub license_issued_at: Option<String>,
    pub license_expires_at: Option<String>,
    pub insurance_file: Option<FileUpload>,
    pub license_file: Option<FileUpload>,
}

/// A downloaded document plus the filename the backend suggested.
#[derive(Debug)]
pub struct DocumentDownload {
    pub filename: String,
    pub mime: Option<String>,
    pub bytes: Bytes,
}
