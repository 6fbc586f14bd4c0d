//! Events client

use std::sync::Arc;

use super::models::{
    Attendance, AttendanceCreate, AttendanceStatus, Event, EventCreate, EventUpdate,
    MessageResponse,
};
use crate::common::{Result, Validator};
use crate::session::SessionManager;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone)]
pub struct EventsClient {
    api: Arc<SessionManager>,
}

impl EventsClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    pub async fn list(&self, club_id: i64, skip: u32, limit: u32) -> Result<Vec<Event>> {
        self.api
            .get(&format!(
                "/clubes/{}/eventos?skip={}&limit={}",
                club_id, skip, limit
            ))
            .await
    }

    pub async fn get(&self, club_id: i64, event_id: i64) -> Result<Event> {
        self.api
            .get(&format!("/clubes/{}/eventos/{}", club_id, event_id))
            .await
    }

    pub async fn create(&self, club_id: i64, request: EventCreate) -> Result<Event> {
        request.validate().into_result()?;
        self.api
            .post(&format!("/clubes/{}/eventos", club_id), &request)
            .await
    }

    pub async fn update(
        &self,
        club_id: i64,
        event_id: i64,
        update: EventUpdate,
    ) -> Result<Event> {
        self.api
            .put(&format!("/clubes/{}/eventos/{}", club_id, event_id), &update)
            .await
    }

    pub async fn delete(&self, club_id: i64, event_id: i64) -> Result<MessageResponse> {
        self.api
            .delete(&format!("/clubes/{}/eventos/{}", club_id, event_id))
            .await
    }

    /// Registered and waitlisted attendees; cancelled records are filtered
    /// out by the backend.
    pub async fn attendees(&self, club_id: i64, event_id: i64) -> Result<Vec<Attendance>> {
        self.api
            .get(&format!("/clubes/{}/eventos/{}/asistencia", club_id, event_id))
            .await
    }

    /// The caller's attendance record. Absence of a record and a cancelled
    /// record both read as `None`.
    pub async fn my_attendance(&self, club_id: i64, event_id: i64) -> Result<Option<Attendance>> {
        let record: Option<Attendance> = self
            .api
            .get_optional(&format!(
                "/clubes/{}/eventos/{}/mi-asistencia",
                club_id, event_id
            ))
            .await?;
        Ok(record.filter(|r| r.status != AttendanceStatus::Cancelled))
    }

    /// Submits a desired status and returns the authoritative record, which
    /// may differ from the request (a full event yields waitlisted).
    pub async fn set_attendance(
        &self,
        club_id: i64,
        event_id: i64,
        desired: AttendanceStatus,
    ) -> Result<Attendance> {
        self.api
            .post(
                &format!("/clubes/{}/eventos/{}/asistencia", club_id, event_id),
                &AttendanceCreate { status: desired },
            )
            .await
    }
}
