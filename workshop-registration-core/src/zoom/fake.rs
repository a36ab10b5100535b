//! In-process [`ZoomApi`] used by adapter tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::zoom::client::{normalize_meeting_id, ZoomApi};
use crate::zoom::types::{Meeting, MeetingSummary, Participant, Registrant, RegistrantStatus};

#[derive(Default)]
pub struct FakeZoomApi {
    pub meetings: Vec<Meeting>,
    pub registrants: HashMap<(String, &'static str), Vec<Registrant>>,
    pub participants: HashMap<String, Vec<Participant>>,
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeZoomApi {
    fn record(&self, call: String) -> Result<()> {
        self.calls
            .lock()
            .map_err(|_| Error::Source("fake zoom call log poisoned".to_owned()))?
            .push(call);
        match &self.fail_with {
            Some(message) => Err(Error::Source(message.clone())),
            None => Ok(()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ZoomApi for FakeZoomApi {
    async fn get_meetings(&self, user_id: &str) -> Result<Vec<MeetingSummary>> {
        self.record(format!("get_meetings:{user_id}"))?;
        Ok(self
            .meetings
            .iter()
            .map(|meeting| MeetingSummary {
                id: meeting.id.clone(),
                topic: meeting.topic.clone(),
                start_time: meeting.start_time.clone(),
                join_url: meeting.join_url.clone(),
                agenda: meeting.agenda.clone(),
            })
            .collect())
    }

    async fn get_meeting(&self, meeting_id: &str) -> Result<Meeting> {
        self.record(format!("get_meeting:{meeting_id}"))?;
        let meeting_id = normalize_meeting_id(meeting_id);
        self.meetings
            .iter()
            .find(|meeting| meeting.id == meeting_id)
            .cloned()
            .ok_or_else(|| Error::Source(format!("meeting '{meeting_id}' does not exist")))
    }

    async fn list_registrants(
        &self,
        meeting_id: &str,
        status: RegistrantStatus,
    ) -> Result<Vec<Registrant>> {
        self.record(format!("list_registrants:{meeting_id}:{}", status.as_str()))?;
        Ok(self
            .registrants
            .get(&(normalize_meeting_id(meeting_id), status.as_str()))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_participant_report(&self, meeting_id: &str) -> Result<Vec<Participant>> {
        self.record(format!("get_participant_report:{meeting_id}"))?;
        Ok(self
            .participants
            .get(&normalize_meeting_id(meeting_id))
            .cloned()
            .unwrap_or_default())
    }
}
