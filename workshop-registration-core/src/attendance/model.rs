use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
    /// Seconds spent in the meeting.
    pub duration: u64,
}

/// Attendees of the most recently refreshed workshop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceModel {
    pub(crate) workshop_id: Option<String>,
    pub(crate) attendees: Vec<Attendee>,
}

impl AttendanceModel {
    pub fn workshop_id(&self) -> Option<&str> {
        self.workshop_id.as_deref()
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }
}
