use std::sync::Arc;

use crate::attendance::{AttendanceRepo, Attendee, InMemoryAttendanceRepo, ZoomAttendanceRepo};
use crate::config::schema::{Config, SourceBackendKind};
use crate::error::{Error, Result};
use crate::registrations::{
    InMemoryRegistrationRepo, RegistrationRecord, RegistrationRepo, ZoomRegistrationRepo,
};
use crate::workshops::{
    CapacityPolicy, InMemoryWorkshopRepo, WorkshopRecord, WorkshopRepo, ZoomWorkshopRepo,
};
use crate::zoom::{ZoomApi, ZoomClient};

#[derive(Clone)]
pub struct Repositories {
    pub workshops: Arc<dyn WorkshopRepo>,
    pub registrations: Arc<dyn RegistrationRepo>,
    pub attendance: Arc<dyn AttendanceRepo>,
}

pub fn create_repositories(config: &Config) -> Result<Repositories> {
    match config.source.backend {
        SourceBackendKind::InMemory => Ok(create_in_memory_repositories(config)),
        SourceBackendKind::Zoom => {
            let api: Arc<dyn ZoomApi> = Arc::new(ZoomClient::from_config(&config.zoom)?);
            create_zoom_repositories(config, api)
        }
    }
}

pub fn create_in_memory_repositories(config: &Config) -> Repositories {
    let workshops = config
        .workshops
        .iter()
        .map(|seed| match seed.id.as_deref() {
            Some(id) => {
                WorkshopRecord::with_id(id, &seed.link, &seed.title, &seed.date, seed.capacity)
            }
            None => WorkshopRecord::new(&seed.link, &seed.title, &seed.date, seed.capacity),
        })
        .collect();

    let registrations = config
        .registrations
        .iter()
        .map(|seed| match seed.id.as_deref() {
            Some(id) => RegistrationRecord::with_id(
                id,
                &seed.workshop_id,
                &seed.name,
                seed.status.as_str(),
            ),
            None => RegistrationRecord::new(&seed.workshop_id, &seed.name, seed.status.as_str()),
        })
        .collect();

    let attendees = config.attendees.iter().map(|seed| {
        (
            seed.workshop_id.clone(),
            Attendee {
                name: seed.name.clone(),
                email: seed.email.clone(),
                duration: seed.duration,
            },
        )
    });

    Repositories {
        workshops: Arc::new(InMemoryWorkshopRepo::from_workshops(workshops)),
        registrations: Arc::new(InMemoryRegistrationRepo::from_registrations(registrations)),
        attendance: Arc::new(InMemoryAttendanceRepo::from_attendees(attendees)),
    }
}

/// All three adapters share `api`, and with it the cached access token.
pub fn create_zoom_repositories(config: &Config, api: Arc<dyn ZoomApi>) -> Result<Repositories> {
    let user_id = config
        .zoom
        .user_id
        .clone()
        .filter(|user_id| !user_id.trim().is_empty())
        .ok_or_else(|| Error::Config("zoom backend requires 'zoom.user_id'".to_owned()))?;

    Ok(Repositories {
        workshops: Arc::new(ZoomWorkshopRepo::new(
            api.clone(),
            user_id,
            CapacityPolicy::from_config(&config.zoom),
        )),
        registrations: Arc::new(ZoomRegistrationRepo::new(api.clone())),
        attendance: Arc::new(ZoomAttendanceRepo::new(api)),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{create_in_memory_repositories, create_repositories, create_zoom_repositories};
    use crate::config::load_from_str;
    use crate::config::schema::{Config, SourceBackendKind};
    use crate::error::Error;
    use crate::zoom::fake::FakeZoomApi;

    #[tokio::test]
    async fn seeds_in_memory_backend_from_config() {
        let config = load_from_str(
            r#"
            [[workshops]]
            id = "w1"
            link = "https://example.org/w1"
            title = "Pandas"
            date = "2024-05-01"
            capacity = 3

            [[workshops]]
            link = "https://example.org/w2"
            title = "Numpy"
            date = "2024-05-08"
            capacity = 4

            [[registrations]]
            workshop_id = "w1"
            name = "Ada"
            status = "approved"

            [[attendees]]
            workshop_id = "w1"
            name = "Ada"
            email = "ada@example.org"
            duration = 3600
            "#,
        )
        .expect("config");
        let repositories = create_in_memory_repositories(&config);

        let workshops = repositories
            .workshops
            .get_upcoming_workshops()
            .await
            .expect("workshops");
        assert_eq!(workshops.len(), 2);
        assert_eq!(workshops[0].id, "w1");
        assert!(!workshops[1].id.is_empty());

        let registrations = repositories
            .registrations
            .get_registrations("w1")
            .await
            .expect("registrations");
        assert_eq!(registrations.len(), 1);

        let attendees = repositories
            .attendance
            .list_attendees("w1")
            .await
            .expect("attendees");
        assert_eq!(attendees[0].duration, 3_600);
    }

    #[test]
    fn zoom_backend_requires_user_id() {
        let mut config = Config::default();
        config.source.backend = SourceBackendKind::Zoom;

        let result = create_zoom_repositories(&config, Arc::new(FakeZoomApi::default()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn zoom_backend_without_credentials_fails_early() {
        let mut config = Config::default();
        config.source.backend = SourceBackendKind::Zoom;
        config.zoom.user_id = Some("me".to_owned());
        config.zoom.account_id_env = "WORKSHOP_REGISTRATION_TEST_NO_SUCH_VAR".to_owned();

        let result = create_repositories(&config);
        assert!(matches!(result, Err(Error::Config(message)) if message.contains("NO_SUCH_VAR")));
    }
}
