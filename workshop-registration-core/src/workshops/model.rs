use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical metadata of a single workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRecord {
    pub id: String,
    pub link: String,
    pub title: String,
    pub date: String,
    pub capacity: u32,
}

impl WorkshopRecord {
    /// Creates a record with a freshly generated id.
    pub fn new(
        link: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), link, title, date, capacity)
    }

    pub fn with_id(
        id: impl Into<String>,
        link: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            link: link.into(),
            title: title.into(),
            date: date.into(),
            capacity,
        }
    }
}
