use serde::{Deserialize, Serialize};

use crate::registrations::{RegistrationRecord, RegistrationStatus};
use crate::workshops::WorkshopRecord;

/// Registration counts for one workshop, derived fresh on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRegistrationSummary {
    pub id: String,
    pub link: String,
    pub title: String,
    pub date: String,
    pub capacity: u32,
    pub num_approved: u32,
    pub num_waitlisted: u32,
    pub num_rejected: u32,
    /// `capacity - num_approved`; negative when the workshop is overbooked.
    pub num_free_spots: i64,
}

/// Tallies `registrations` against `workshop`.
///
/// Registrations with an unrecognized status are left out of every count.
/// The caller is expected to pass only registrations for `workshop.id`.
pub fn summarize(
    workshop: &WorkshopRecord,
    registrations: &[RegistrationRecord],
) -> WorkshopRegistrationSummary {
    let mut num_approved = 0u32;
    let mut num_waitlisted = 0u32;
    let mut num_rejected = 0u32;
    let mut num_ignored = 0usize;

    for registration in registrations {
        match registration.status {
            RegistrationStatus::Approved => num_approved += 1,
            RegistrationStatus::Waitlisted => num_waitlisted += 1,
            RegistrationStatus::Rejected => num_rejected += 1,
            RegistrationStatus::Unrecognized(_) => num_ignored += 1,
        }
    }

    if num_ignored > 0 {
        tracing::debug!(
            workshop_id = %workshop.id,
            num_ignored,
            "registrations with unrecognized status left out of counts"
        );
    }

    WorkshopRegistrationSummary {
        id: workshop.id.clone(),
        link: workshop.link.clone(),
        title: workshop.title.clone(),
        date: workshop.date.clone(),
        capacity: workshop.capacity,
        num_approved,
        num_waitlisted,
        num_rejected,
        num_free_spots: i64::from(workshop.capacity) - i64::from(num_approved),
    }
}
