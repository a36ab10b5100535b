pub mod in_memory;
pub mod model;
pub mod zoom;

use async_trait::async_trait;

use crate::error::Result;

pub use in_memory::InMemoryWorkshopRepo;
pub use model::WorkshopRecord;
pub use zoom::{CapacityPolicy, ZoomWorkshopRepo};

/// Read access to the workshops that are coming up.
#[async_trait]
pub trait WorkshopRepo: Send + Sync {
    async fn get_upcoming_workshops(&self) -> Result<Vec<WorkshopRecord>>;
}
