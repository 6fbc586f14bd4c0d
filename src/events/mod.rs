//! # Events Module
//!
//! Event CRUD plus RSVP: the attendance coordinator keeps the caller's
//! cached status and the registered-attendee counter consistent with the
//! backend's authoritative answers, including the automatic waitlist when an
//! event reaches capacity.

pub mod attendance;
pub mod client;
pub mod models;
pub mod validators;


pub use attendance::AttendanceCoordinator;
pub use client::EventsClient;
pub use models::{
    Attendance, AttendanceStatus, Event, EventCreate, EventPhase, EventUpdate, RsvpAction,
};
