use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::workshops::model::WorkshopRecord;
use crate::workshops::WorkshopRepo;

/// Keeps workshops in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryWorkshopRepo {
    workshops: RwLock<Vec<WorkshopRecord>>,
}

impl InMemoryWorkshopRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_workshops(workshops: Vec<WorkshopRecord>) -> Self {
        Self {
            workshops: RwLock::new(workshops),
        }
    }

    pub async fn add_workshop(&self, workshop: WorkshopRecord) {
        self.workshops.write().await.push(workshop);
    }
}

#[async_trait]
impl WorkshopRepo for InMemoryWorkshopRepo {
    async fn get_upcoming_workshops(&self) -> Result<Vec<WorkshopRecord>> {
        Ok(self.workshops.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryWorkshopRepo;
    use crate::workshops::{WorkshopRecord, WorkshopRepo};

    #[tokio::test]
    async fn returns_workshops_in_insertion_order() {
        let repo = InMemoryWorkshopRepo::new();
        repo.add_workshop(WorkshopRecord::with_id("b", "", "Second", "", 1))
            .await;
        repo.add_workshop(WorkshopRecord::with_id("a", "", "First", "", 1))
            .await;

        let ids: Vec<String> = repo
            .get_upcoming_workshops()
            .await
            .expect("in-memory read")
            .into_iter()
            .map(|workshop| workshop.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn empty_repo_returns_no_workshops() {
        let repo = InMemoryWorkshopRepo::new();
        assert!(repo.get_upcoming_workshops().await.expect("read").is_empty());
    }
}
