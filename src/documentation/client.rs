//! Documentation client
//!
//! Multipart upsert of the member's regulatory documents and raw downloads
//! of the stored files, with the filename recovered from the
//! Content-Disposition header.

use std::sync::Arc;
use std::sync::OnceLock;

use regex::Regex;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::models::{DocumentDownload, Documentation, DocumentationUpdate, FileUpload};
use crate::common::Result;
use crate::session::SessionManager;

#[derive(Clone)]
pub struct DocumentationClient {
    api: Arc<SessionManager>,
}

impl DocumentationClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    /// The caller's documentation record, or `None` when nothing has been
    /// filed yet.
    pub async fn mine(&self) -> Result<Option<Documentation>> {
        self.api.get_optional("/documentacion/me").await
    }

    /// Another member's record (admin screens).
    pub async fn for_user(&self, user_id: i64) -> Result<Option<Documentation>> {
        self.api
            .get_optional(&format!("/documentacion/usuarios/{}", user_id))
            .await
    }

    /// Upserts numbers, dates and files in one multipart request. The form
    /// is rebuilt per attempt because multipart bodies cannot be replayed
    /// across the refresh retry.
    pub async fn upsert_mine(&self, update: DocumentationUpdate) -> Result<Documentation> {
        debug!(
            insurance_file = update.insurance_file.is_some(),
            license_file = update.license_file.is_some(),
            "Uploading documentation"
        );
        self.api
            .post_multipart("/documentacion/me", || build_form(&update))
            .await
    }

    pub async fn download_insurance(&self) -> Result<DocumentDownload> {
        self.download("/documentacion/me/rc", "seguro_rc").await
    }

    pub async fn download_license(&self) -> Result<DocumentDownload> {
        self.download("/documentacion/me/carnet", "carnet_piloto")
            .await
    }

    async fn download(&self, path: &str, default_name: &str) -> Result<DocumentDownload> {
        let response = self.api.get_raw(path).await?;

        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_filename)
            .unwrap_or_else(|| default_name.to_string());
        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;
        Ok(DocumentDownload {
            filename,
            mime,
            bytes,
        })
    }
}

fn build_form(update: &DocumentationUpdate) -> Form {
    let mut form = Form::new();

    let text_fields = [
        ("rc_numero", &update.insurance_number),
        ("rc_fecha_emision", &update.insurance_issued_at),
        ("rc_fecha_vencimiento", &update.insurance_expires_at),
        ("carnet_numero", &update.license_number),
        ("carnet_fecha_emision", &update.license_issued_at),
        ("carnet_fecha_vencimiento", &update.license_expires_at),
    ];
    for (name, value) in text_fields {
        if let Some(value) = value {
            form = form.text(name, value.clone());
        }
    }

    if let Some(file) = &update.insurance_file {
        form = form.part("rc_archivo", file_part(file));
    }
    if let Some(file) = &update.license_file {
        form = form.part("carnet_archivo", file_part(file));
    }

    form
}

fn file_part(file: &FileUpload) -> Part {
    let part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
    match part.mime_str(&file.mime) {
        Ok(part) => part,
        // Unparseable content type falls back to the multipart default
        Err(_) => Part::bytes(file.bytes.clone()).file_name(file.filename.clone()),
    }
}

/// Pulls the suggested filename out of a Content-Disposition header.
fn disposition_filename(header: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"filename="([^"]+)""#).expect("literal pattern"));
    re.captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::disposition_filename;

    #[test]
    fn test_disposition_filename_extraction() {
        assert_eq!(
            disposition_filename(r#"attachment; filename="poliza-2024.pdf""#),
            Some("poliza-2024.pdf".to_string())
        );
        assert_eq!(disposition_filename("attachment"), None);
    }
}
