pub mod in_memory;
pub mod model;
pub mod workflow;
pub mod zoom;

use async_trait::async_trait;

use crate::error::Result;

pub use in_memory::InMemoryAttendanceRepo;
pub use model::{AttendanceModel, Attendee};
pub use workflow::AttendanceWorkflow;
pub use zoom::ZoomAttendanceRepo;

#[async_trait]
pub trait AttendanceRepo: Send + Sync {
    async fn list_attendees(&self, workshop_id: &str) -> Result<Vec<Attendee>>;
}
