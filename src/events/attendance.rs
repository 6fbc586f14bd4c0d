//! Attendance coordinator
//!
//! Client-side view of one (event, user) RSVP record plus the locally
//! maintained registered-attendee counter. The backend owns the record; the
//! coordinator submits desired transitions, adopts whatever status comes
//! back, and adjusts the counter only for transitions that cross the
//! registered boundary, so a server override to the waitlist never double
//! counts.

use tracing::{debug, info};

use super::client::EventsClient;
use super::models::{Attendance, AttendanceStatus, Event, RsvpAction};
use crate::common::Result;

pub struct AttendanceCoordinator {
    client: EventsClient,
    club_id: i64,
    event_id: i64,
    capacity: Option<u32>,
    registered_count: u32,
    /// Cached record; `None` means no record or a cancelled one, which the
    /// backend treats identically.
    attendance: Option<Attendance>,
}

/// Counter adjustment for an acknowledged transition: +1 only when entering
/// the registered state, -1 only when leaving it.
fn count_delta(old: AttendanceStatus, new: AttendanceStatus) -> i32 {
    let was = old == AttendanceStatus::Registered;
    let is = new == AttendanceStatus::Registered;
    match (was, is) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    }
}

impl AttendanceCoordinator {
    /// Builds the coordinator from an event listing entry and the caller's
    /// current attendance, fetched from the backend (404 means none).
    pub async fn load(client: EventsClient, event: &Event) -> Result<Self> {
        let attendance = client.my_attendance(event.club_id, event.id).await?;
        Ok(Self {
            client,
            club_id: event.club_id,
            event_id: event.id,
            capacity: event.capacity,
            registered_count: event.registered_count,
            attendance,
        })
    }

    /// Current status; absence of a record reads as cancelled.
    pub fn status(&self) -> AttendanceStatus {
        self.attendance
            .as_ref()
            .map(|a| a.status)
            .unwrap_or(AttendanceStatus::Cancelled)
    }

    pub fn registered_count(&self) -> u32 {
        self.registered_count
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.registered_count >= capacity,
            None => false,
        }
    }

    /// Submits the desired status and reconciles local state with the
    /// authoritative answer. Returns the resulting status, which may be
    /// waitlisted when registration was requested on a full event.
    ///
    /// Requesting a cancel with no prior record is a no-op on the counter
    /// and does not error.
    pub async fn set_status(&mut self, action: RsvpAction) -> Result<AttendanceStatus> {
        let old = self.status();
        let record = self
            .client
            .set_attendance(self.club_id, self.event_id, action.desired_status())
            .await?;
        let new = record.status;

        match count_delta(old, new) {
            1 => self.registered_count += 1,
            -1 => self.registered_count = self.registered_count.saturating_sub(1),
            _ => {}
        }

        if new == AttendanceStatus::Waitlisted && action == RsvpAction::Register {
            info!(
                event_id = self.event_id,
                "Event is full, placed on the waitlist"
            );
        }
        debug!(
            event_id = self.event_id,
            from = old.label(),
            to = new.label(),
            count = self.registered_count,
            "Attendance updated"
        );

        self.attendance = if new == AttendanceStatus::Cancelled {
            None
        } else {
            Some(record)
        };
        Ok(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_delta_crossing_into_registered() {
        assert_eq!(
            count_delta(AttendanceStatus::Cancelled, AttendanceStatus::Registered),
            1
        );
        assert_eq!(
            count_delta(AttendanceStatus::Waitlisted, AttendanceStatus::Registered),
            1
        );
    }

    #[test]
    fn test_count_delta_crossing_out_of_registered() {
        assert_eq!(
            count_delta(AttendanceStatus::Registered, AttendanceStatus::Cancelled),
            -1
        );
        assert_eq!(
            count_delta(AttendanceStatus::Registered, AttendanceStatus::Waitlisted),
            -1
        );
    }

    #[test]
    fn test_count_delta_without_boundary_crossing() {
        // Server overrides that never enter the registered state must not
        // move the counter.
        assert_eq!(
            count_delta(AttendanceStatus::Cancelled, AttendanceStatus::Waitlisted),
            0
        );
        assert_eq!(
            count_delta(AttendanceStatus::Waitlisted, AttendanceStatus::Cancelled),
            0
        );
        assert_eq!(
            count_delta(AttendanceStatus::Cancelled, AttendanceStatus::Cancelled),
            0
        );
        assert_eq!(
            count_delta(AttendanceStatus::Waitlisted, AttendanceStatus::Waitlisted),
            0
        );
        assert_eq!(
            count_delta(AttendanceStatus::Registered, AttendanceStatus::Registered),
            0
        );
    }
}
