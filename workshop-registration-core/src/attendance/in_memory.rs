use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::attendance::model::Attendee;
use crate::attendance::AttendanceRepo;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryAttendanceRepo {
    attendees: RwLock<HashMap<String, Vec<Attendee>>>,
}

impl InMemoryAttendanceRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_attendees(attendees: impl IntoIterator<Item = (String, Attendee)>) -> Self {
        let mut grouped: HashMap<String, Vec<Attendee>> = HashMap::new();
        for (workshop_id, attendee) in attendees {
            grouped.entry(workshop_id).or_default().push(attendee);
        }
        Self {
            attendees: RwLock::new(grouped),
        }
    }

    pub async fn add_attendee(&self, workshop_id: impl Into<String>, attendee: Attendee) {
        self.attendees
            .write()
            .await
            .entry(workshop_id.into())
            .or_default()
            .push(attendee);
    }
}

#[async_trait]
impl AttendanceRepo for InMemoryAttendanceRepo {
    async fn list_attendees(&self, workshop_id: &str) -> Result<Vec<Attendee>> {
        Ok(self
            .attendees
            .read()
            .await
            .get(workshop_id)
            .cloned()
            .unwrap_or_default())
    }
}
