use std::sync::Arc;

use crate::attendance::model::AttendanceModel;
use crate::attendance::AttendanceRepo;
use crate::error::Result;

pub struct AttendanceWorkflow {
    repo: Arc<dyn AttendanceRepo>,
    model: AttendanceModel,
}

impl AttendanceWorkflow {
    pub fn new(repo: Arc<dyn AttendanceRepo>) -> Self {
        Self {
            repo,
            model: AttendanceModel::default(),
        }
    }

    pub fn model(&self) -> &AttendanceModel {
        &self.model
    }

    /// Replaces the model with the attendees of `workshop_id`.
    pub async fn refresh(&mut self, workshop_id: &str) -> Result<()> {
        let attendees = self.repo.list_attendees(workshop_id).await?;
        tracing::info!(workshop_id, attendees = attendees.len(), "refreshed attendance");

        self.model = AttendanceModel {
            workshop_id: Some(workshop_id.to_owned()),
            attendees,
        };
        Ok(())
    }
}
