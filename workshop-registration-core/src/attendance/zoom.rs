use std::sync::Arc;

use async_trait::async_trait;

use crate::attendance::model::Attendee;
use crate::attendance::AttendanceRepo;
use crate::error::Result;
use crate::zoom::types::Participant;
use crate::zoom::ZoomApi;

const IN_MEETING: &str = "in_meeting";

/// Attendance from the Zoom participant report.
pub struct ZoomAttendanceRepo {
    api: Arc<dyn ZoomApi>,
}

impl ZoomAttendanceRepo {
    pub fn new(api: Arc<dyn ZoomApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AttendanceRepo for ZoomAttendanceRepo {
    async fn list_attendees(&self, workshop_id: &str) -> Result<Vec<Attendee>> {
        let participants = self.api.get_participant_report(workshop_id).await?;
        Ok(attendees_in_meeting(&participants))
    }
}

/// Keeps participants that made it into the meeting; waiting-room entries are dropped.
pub fn attendees_in_meeting(participants: &[Participant]) -> Vec<Attendee> {
    participants
        .iter()
        .filter(|participant| participant.status == IN_MEETING)
        .map(|participant| Attendee {
            name: participant.name.clone(),
            email: participant.user_email.clone(),
            duration: participant.duration,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::{attendees_in_meeting, ZoomAttendanceRepo};
    use crate::attendance::AttendanceRepo;
    use crate::zoom::fake::FakeZoomApi;
    use crate::zoom::types::Participant;

    fn participant(name: &str, status: &str, duration: u64) -> Participant {
        Participant {
            name: name.to_owned(),
            user_email: format!("{}@example.org", name.to_lowercase()),
            duration,
            status: status.to_owned(),
        }
    }

    #[test]
    fn drops_participants_not_in_meeting() {
        let attendees = attendees_in_meeting(&[
            participant("Ada", "in_meeting", 3_600),
            participant("Grace", "in_waiting_room", 120),
            participant("Linus", "in_meeting", 45),
        ]);

        let names: Vec<&str> = attendees.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
        assert_eq!(attendees[0].email, "ada@example.org");
        assert_eq!(attendees[0].duration, 3_600);
    }

    #[tokio::test]
    async fn reads_participant_report_for_meeting() {
        let mut participants = HashMap::new();
        participants.insert(
            "86061267458".to_owned(),
            vec![participant("Ada", "in_meeting", 10)],
        );
        let api = Arc::new(FakeZoomApi {
            participants,
            ..FakeZoomApi::default()
        });
        let repo = ZoomAttendanceRepo::new(api.clone());

        let attendees = repo.list_attendees("860 6126 7458").await.expect("attendees");
        assert_eq!(attendees.len(), 1);
        assert_eq!(api.calls(), vec!["get_participant_report:860 6126 7458"]);
    }
}
