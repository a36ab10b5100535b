pub mod in_memory;
pub mod model;
pub mod zoom;

use async_trait::async_trait;

use crate::error::Result;

pub use in_memory::InMemoryRegistrationRepo;
pub use model::{RegistrationRecord, RegistrationStatus};
pub use zoom::ZoomRegistrationRepo;

/// Read access to the registrations of a workshop.
///
/// Implementations return an empty list for workshops without registrations.
#[async_trait]
pub trait RegistrationRepo: Send + Sync {
    async fn get_registrations(&self, workshop_id: &str) -> Result<Vec<RegistrationRecord>>;
}
