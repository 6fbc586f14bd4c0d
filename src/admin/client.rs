//! Admin client
//!
//! Superadmin-only configuration screens. The backend enforces the
//! privilege; the client surfaces its 403 verbatim.

use std::sync::Arc;

use tracing::info;

use super::models::{
    EmailConfig, EmailConfigUpdate, MessageResponse, TestEmailRequest, MASKED_PASSWORD,
};
use crate::auth::validators::validate_email;
use crate::common::{Result, ValidationResult};
use crate::session::SessionManager;

#[derive(Clone)]
pub struct AdminClient {
    api: Arc<SessionManager>,
}

impl AdminClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    pub async fn email_config(&self) -> Result<EmailConfig> {
        self.api.get("/admin/config/email").await
    }

    /// Saves SMTP settings. A password equal to the mask placeholder is
    /// treated as "unchanged" and dropped from the payload.
    pub async fn update_email_config(&self, mut update: EmailConfigUpdate) -> Result<EmailConfig> {
        if update
            .smtp_password
            .as_deref()
            .map(|p| p.is_empty() || p == MASKED_PASSWORD)
            .unwrap_or(false)
        {
            update.smtp_password = None;
        }
        let config = self.api.put("/admin/config/email", &update).await?;
        info!("Email configuration updated");
        Ok(config)
    }

    pub async fn send_test_email(&self, to_email: &str) -> Result<MessageResponse> {
        let mut result = ValidationResult::new();
        validate_email(to_email, &mut result);
        result.into_result()?;

        self.api
            .post(
                "/admin/config/test-email",
                &TestEmailRequest {
                    to_email: to_email.to_string(),
                },
            )
            .await
    }
}
