use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::registrations::model::RegistrationRecord;
use crate::registrations::RegistrationRepo;

/// Registrations grouped by workshop id, each group in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepo {
    registrations: RwLock<HashMap<String, Vec<RegistrationRecord>>>,
}

impl InMemoryRegistrationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registrations(registrations: Vec<RegistrationRecord>) -> Self {
        let mut grouped: HashMap<String, Vec<RegistrationRecord>> = HashMap::new();
        for registration in registrations {
            grouped
                .entry(registration.workshop_id.clone())
                .or_default()
                .push(registration);
        }
        Self {
            registrations: RwLock::new(grouped),
        }
    }

    pub async fn add_registration(&self, registration: RegistrationRecord) {
        self.registrations
            .write()
            .await
            .entry(registration.workshop_id.clone())
            .or_default()
            .push(registration);
    }
}

#[async_trait]
impl RegistrationRepo for InMemoryRegistrationRepo {
    async fn get_registrations(&self, workshop_id: &str) -> Result<Vec<RegistrationRecord>> {
        Ok(self
            .registrations
            .read()
            .await
            .get(workshop_id)
            .cloned()
            .unwrap_or_default())
    }
}
