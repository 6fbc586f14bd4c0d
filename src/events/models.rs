//! Event and attendance data models

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::session::BasicUser;

/// RSVP status as the backend owns it. The wire values are the backend's
/// Spanish literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "inscrito")]
    Registered,
    #[serde(rename = "lista_espera")]
    Waitlisted,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Registered => "registered",
            AttendanceStatus::Waitlisted => "waitlisted",
            AttendanceStatus::Cancelled => "cancelled",
        }
    }
}

/// What a user can actually ask for. Waitlisted is never requested directly;
/// only the server assigns it, so it is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpAction {
    Register,
    Cancel,
}

impl RsvpAction {
    pub fn desired_status(self) -> AttendanceStatus {
        match self {
            RsvpAction::Register => AttendanceStatus::Registered,
            RsvpAction::Cancel => AttendanceStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attendance {
    pub id: i64,
    #[serde(rename = "evento_id")]
    pub event_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "estado")]
    pub status: AttendanceStatus,
    #[serde(rename = "fecha_registro", default)]
    pub registered_at: Option<String>,
    #[serde(rename = "usuario", default)]
    pub user: Option<BasicUser>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceCreate {
    #[serde(rename = "estado")]
    pub status: AttendanceStatus,
}

/// Where an event sits relative to now, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPhase {
    Upcoming,
    Ongoing,
    Finished,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: i64,
    pub club_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "fecha_inicio")]
    pub starts_at: String,
    #[serde(rename = "fecha_fin", default)]
    pub ends_at: Option<String>,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "hora_fin", default)]
    pub end_time: Option<String>,
    #[serde(rename = "ubicacion", default)]
    pub location: Option<String>,
    #[serde(rename = "contacto_responsable_id", default)]
    pub organizer_id: Option<i64>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "aforo_maximo", default)]
    pub capacity: Option<u32>,
    #[serde(rename = "requisitos", default)]
    pub requirements: Option<serde_json::Value>,
    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "permite_comentarios", default = "default_true")]
    pub comments_enabled: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<String>,
    /// Computed by the backend on list/detail responses.
    #[serde(rename = "inscritos_count", default)]
    pub registered_count: u32,
}

impl Event {
    /// Upcoming / ongoing / finished, judged from the start and end dates
    /// the way the event cards render them. Unparseable dates read as
    /// upcoming rather than hiding the event.
    pub fn phase(&self, now: NaiveDateTime) -> EventPhase {
        let start = parse_backend_datetime(&self.starts_at);
        let end = self.ends_at.as_deref().and_then(parse_backend_datetime);

        if let Some(end) = end {
            if now > end {
                return EventPhase::Finished;
            }
        }
        match start {
            Some(start) if now >= start => EventPhase::Ongoing,
            _ => EventPhase::Upcoming,
        }
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.registered_count >= capacity,
            None => false,
        }
    }
}

/// Backend timestamps arrive either as naive ISO strings, with an offset, or
/// as bare dates.
pub fn parse_backend_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0))
        .flatten()
}

#[derive(Debug, Serialize)]
pub struct EventCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "fecha_inicio")]
    pub starts_at: String,
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    #[serde(rename = "hora_inicio", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "hora_fin", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "ubicacion", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "aforo_maximo", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "requisitos", skip_serializing_if = "Option::is_none")]
    pub requirements: Option<serde_json::Value>,
    #[serde(rename = "imagen_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "permite_comentarios", skip_serializing_if = "Option::is_none")]
    pub comments_enabled: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct EventUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "fecha_inicio", skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    #[serde(rename = "ubicacion", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "aforo_maximo", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn default_true() -> bool {
    true
}
