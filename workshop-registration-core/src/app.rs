use std::sync::Arc;

use crate::error::Result;
use crate::reconciliation::{summarize, WorkshopRegistrationSummary};
use crate::registrations::{RegistrationRecord, RegistrationRepo};
use crate::workshops::WorkshopRepo;

/// The summaries shown to presenters. Replaced as a whole by [`App::refresh`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppModel {
    upcoming_workshops: Vec<WorkshopRegistrationSummary>,
}

impl AppModel {
    pub fn upcoming_workshops(&self) -> &[WorkshopRegistrationSummary] {
        &self.upcoming_workshops
    }
}

pub struct App {
    workshop_repo: Arc<dyn WorkshopRepo>,
    registration_repo: Arc<dyn RegistrationRepo>,
    model: AppModel,
}

impl App {
    pub fn new(
        workshop_repo: Arc<dyn WorkshopRepo>,
        registration_repo: Arc<dyn RegistrationRepo>,
    ) -> Self {
        Self {
            workshop_repo,
            registration_repo,
            model: AppModel::default(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Recomputes every upcoming workshop summary and swaps them into the model.
    ///
    /// Registrations are fetched one workshop at a time. On error the model
    /// keeps the summaries of the previous successful refresh.
    pub async fn refresh(&mut self) -> Result<()> {
        let workshops = self.workshop_repo.get_upcoming_workshops().await?;
        tracing::debug!(count = workshops.len(), "fetched upcoming workshops");

        let mut summaries = Vec::with_capacity(workshops.len());
        for workshop in &workshops {
            let registrations = self.registration_repo.get_registrations(&workshop.id).await?;
            let summary = summarize(workshop, &registrations);
            tracing::debug!(
                workshop_id = %summary.id,
                num_approved = summary.num_approved,
                num_waitlisted = summary.num_waitlisted,
                num_rejected = summary.num_rejected,
                num_free_spots = summary.num_free_spots,
                "reconciled workshop"
            );
            summaries.push(summary);
        }

        self.model.upcoming_workshops = summaries;
        tracing::info!(
            workshops = self.model.upcoming_workshops.len(),
            "refreshed upcoming workshops"
        );
        Ok(())
    }

    pub async fn registrants(&self, workshop_id: &str) -> Result<Vec<RegistrationRecord>> {
        self.registration_repo.get_registrations(workshop_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::App;
    use crate::error::{Error, Result};
    use crate::registrations::{InMemoryRegistrationRepo, RegistrationRecord, RegistrationRepo};
    use crate::workshops::{InMemoryWorkshopRepo, WorkshopRecord};

    struct CountingRegistrationRepo {
        inner: InMemoryRegistrationRepo,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RegistrationRepo for CountingRegistrationRepo {
        async fn get_registrations(&self, workshop_id: &str) -> Result<Vec<RegistrationRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_registrations(workshop_id).await
        }
    }

    #[derive(Default)]
    struct FlakyRegistrationRepo {
        failing: AtomicBool,
    }

    #[async_trait]
    impl RegistrationRepo for FlakyRegistrationRepo {
        async fn get_registrations(&self, _workshop_id: &str) -> Result<Vec<RegistrationRecord>> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(Error::Source("rate limited".to_owned()));
            }
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn model_starts_empty() {
        let app = App::new(
            Arc::new(InMemoryWorkshopRepo::new()),
            Arc::new(InMemoryRegistrationRepo::new()),
        );
        assert!(app.model().upcoming_workshops().is_empty());
    }

    #[tokio::test]
    async fn fetches_registrations_once_per_workshop() {
        let workshops = InMemoryWorkshopRepo::from_workshops(vec![
            WorkshopRecord::with_id("w1", "", "One", "", 1),
            WorkshopRecord::with_id("w2", "", "Two", "", 1),
            WorkshopRecord::with_id("w3", "", "Three", "", 1),
        ]);
        let registrations = Arc::new(CountingRegistrationRepo {
            inner: InMemoryRegistrationRepo::new(),
            calls: AtomicUsize::new(0),
        });

        let mut app = App::new(Arc::new(workshops), registrations.clone());
        app.refresh().await.expect("refresh");

        assert_eq!(registrations.calls.load(Ordering::SeqCst), 3);
        assert_eq!(app.model().upcoming_workshops().len(), 3);
    }

    #[tokio::test]
    async fn refresh_replaces_previous_summaries() {
        let workshops = Arc::new(InMemoryWorkshopRepo::new());
        workshops
            .add_workshop(WorkshopRecord::with_id("w1", "", "One", "", 2))
            .await;
        let mut app = App::new(workshops.clone(), Arc::new(InMemoryRegistrationRepo::new()));

        app.refresh().await.expect("first refresh");
        assert_eq!(app.model().upcoming_workshops().len(), 1);

        workshops
            .add_workshop(WorkshopRecord::with_id("w2", "", "Two", "", 2))
            .await;
        app.refresh().await.expect("second refresh");

        let ids: Vec<&str> = app
            .model()
            .upcoming_workshops()
            .iter()
            .map(|summary| summary.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w2"]);
    }

    #[tokio::test]
    async fn source_failure_propagates_and_keeps_previous_model() {
        let workshops = Arc::new(InMemoryWorkshopRepo::from_workshops(vec![
            WorkshopRecord::with_id("w1", "", "One", "", 2),
        ]));
        let registrations = Arc::new(FlakyRegistrationRepo::default());
        let mut app = App::new(workshops.clone(), registrations.clone());
        app.refresh().await.expect("refresh");
        let before = app.model().clone();

        workshops
            .add_workshop(WorkshopRecord::with_id("w2", "", "Two", "", 2))
            .await;
        registrations.failing.store(true, Ordering::SeqCst);

        let error = app.refresh().await.expect_err("refresh should fail");
        assert!(matches!(error, Error::Source(_)));
        assert_eq!(app.model(), &before);
    }

    #[tokio::test]
    async fn registrants_lists_records_for_one_workshop() {
        let registrations = InMemoryRegistrationRepo::from_registrations(vec![
            RegistrationRecord::with_id("r1", "w1", "Ada", "approved"),
            RegistrationRecord::with_id("r2", "w2", "Grace", "approved"),
        ]);
        let app = App::new(Arc::new(InMemoryWorkshopRepo::new()), Arc::new(registrations));

        let listed = app.registrants("w1").await.expect("registrants");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ada");
    }
}
