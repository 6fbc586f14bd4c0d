//! Facility access-code client
//!
//! Members read the current code; admins rotate it (the backend deactivates
//! prior codes) and audit the history. A club with no code configured is an
//! expected condition, not an error.

use std::sync::Arc;

use tracing::info;

use super::models::{FacilityPassword, FacilityPasswordCreate};
use crate::common::{ApiError, Result};
use crate::session::SessionManager;

#[derive(Clone)]
pub struct FacilityClient {
    api: Arc<SessionManager>,
}

impl FacilityClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    /// The current active code, or `None` when the club has not configured
    /// one yet.
    pub async fn current(&self, club_id: i64) -> Result<Option<FacilityPassword>> {
        self.api
            .get_optional(&format!("/clubes/{}/instalacion/password", club_id))
            .await
    }

    /// Sets a new code; the backend deactivates the previous one.
    pub async fn set(
        &self,
        club_id: i64,
        code: &str,
        description: Option<&str>,
    ) -> Result<FacilityPassword> {
        if code.trim().is_empty() {
            return Err(ApiError::Validation("Access code is required".to_string()));
        }
        let created: FacilityPassword = self
            .api
            .post(
                &format!("/clubes/{}/instalacion/password", club_id),
                &FacilityPasswordCreate {
                    code: code.to_string(),
                    description: description.map(str::to_string),
                },
            )
            .await?;
        info!(club_id, "Facility access code rotated");
        Ok(created)
    }

    /// Full code history, newest first (admins only).
    pub async fn history(&self, club_id: i64) -> Result<Vec<FacilityPassword>> {
        self.api
            .get(&format!("/clubes/{}/instalacion/history", club_id))
            .await
    }
}
