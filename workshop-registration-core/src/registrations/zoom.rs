use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::registrations::model::{RegistrationRecord, RegistrationStatus};
use crate::registrations::RegistrationRepo;
use crate::zoom::types::{Registrant, RegistrantStatus};
use crate::zoom::{normalize_meeting_id, ZoomApi};

/// Registrants of a Zoom meeting, one listing per Zoom registrant status.
pub struct ZoomRegistrationRepo {
    api: Arc<dyn ZoomApi>,
}

impl ZoomRegistrationRepo {
    pub fn new(api: Arc<dyn ZoomApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RegistrationRepo for ZoomRegistrationRepo {
    async fn get_registrations(&self, workshop_id: &str) -> Result<Vec<RegistrationRecord>> {
        let meeting_id = normalize_meeting_id(workshop_id);
        let mut registrations = Vec::new();

        for zoom_status in RegistrantStatus::ALL {
            let registrants = self.api.list_registrants(&meeting_id, zoom_status).await?;
            tracing::debug!(
                meeting_id = %meeting_id,
                status = zoom_status.as_str(),
                count = registrants.len(),
                "listed zoom registrants"
            );
            registrations.extend(registrants.iter().map(|registrant| {
                registration_from_registrant(&meeting_id, registrant, zoom_status)
            }));
        }

        Ok(registrations)
    }
}

pub fn map_status(status: RegistrantStatus) -> RegistrationStatus {
    match status {
        RegistrantStatus::Approved => RegistrationStatus::Approved,
        RegistrantStatus::Pending => RegistrationStatus::Waitlisted,
        RegistrantStatus::Denied => RegistrationStatus::Rejected,
    }
}

pub fn registration_from_registrant(
    meeting_id: &str,
    registrant: &Registrant,
    status: RegistrantStatus,
) -> RegistrationRecord {
    let name = registrant.full_name();
    match registrant.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => RegistrationRecord::with_id(id, meeting_id, name, map_status(status)),
        None => RegistrationRecord::new(meeting_id, name, map_status(status)),
    }
}
