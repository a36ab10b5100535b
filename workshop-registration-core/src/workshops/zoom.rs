use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::schema::ZoomConfig;
use crate::error::Result;
use crate::workshops::model::WorkshopRecord;
use crate::workshops::WorkshopRepo;
use crate::zoom::types::Meeting;
use crate::zoom::{normalize_meeting_id, ZoomApi};

/// Zoom has no notion of workshop capacity, so it comes from configuration.
#[derive(Debug, Clone, Default)]
pub struct CapacityPolicy {
    pub default_capacity: u32,
    pub overrides: BTreeMap<String, u32>,
}

impl CapacityPolicy {
    pub fn from_config(config: &ZoomConfig) -> Self {
        Self {
            default_capacity: config.default_capacity,
            overrides: config
                .capacity_overrides
                .iter()
                .map(|(id, capacity)| (normalize_meeting_id(id), *capacity))
                .collect(),
        }
    }

    pub fn capacity_for(&self, meeting_id: &str) -> u32 {
        self.overrides
            .get(&normalize_meeting_id(meeting_id))
            .copied()
            .unwrap_or(self.default_capacity)
    }
}

/// Upcoming meetings of one Zoom user, read as workshops.
pub struct ZoomWorkshopRepo {
    api: Arc<dyn ZoomApi>,
    user_id: String,
    capacity: CapacityPolicy,
}

impl ZoomWorkshopRepo {
    pub fn new(
        api: Arc<dyn ZoomApi>,
        user_id: impl Into<String>,
        capacity: CapacityPolicy,
    ) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            capacity,
        }
    }
}

#[async_trait]
impl WorkshopRepo for ZoomWorkshopRepo {
    async fn get_upcoming_workshops(&self) -> Result<Vec<WorkshopRecord>> {
        let meetings = self.api.get_meetings(&self.user_id).await?;
        tracing::debug!(user_id = %self.user_id, count = meetings.len(), "listed zoom meetings");

        let mut workshops = Vec::with_capacity(meetings.len());
        for summary in meetings {
            // The listing lacks registration urls.
            let meeting = self.api.get_meeting(&summary.id).await?;
            let capacity = self.capacity.capacity_for(&meeting.id);
            workshops.push(workshop_from_meeting(&meeting, capacity));
        }
        Ok(workshops)
    }
}

pub fn workshop_from_meeting(meeting: &Meeting, capacity: u32) -> WorkshopRecord {
    let link = meeting
        .registration_url
        .as_deref()
        .or(meeting.join_url.as_deref())
        .unwrap_or_default();
    let date = meeting
        .first_start_time()
        .map(format_start_time)
        .unwrap_or_default();

    WorkshopRecord::with_id(
        normalize_meeting_id(&meeting.id),
        link,
        meeting.topic.trim(),
        date,
        capacity,
    )
}

/// Renders Zoom's RFC 3339 start time; unparseable values pass through unchanged.
pub fn format_start_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|start| {
            start
                .with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_owned())
}
