pub mod app;
pub mod attendance;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod reconciliation;
pub mod registrations;
pub mod workshops;
pub mod zoom;

pub use app::{App, AppModel};
pub use attendance::{AttendanceModel, AttendanceWorkflow, Attendee};
pub use config::Config;
pub use error::{Error, Result};
pub use factory::{create_repositories, Repositories};
pub use reconciliation::{summarize, WorkshopRegistrationSummary};
pub use registrations::{RegistrationRecord, RegistrationStatus};
pub use workshops::WorkshopRecord;

/// Registration summaries and attendance wired to the configured source.
pub struct WorkshopRegistration {
    config: Config,
    app: App,
    attendance: AttendanceWorkflow,
}

impl WorkshopRegistration {
    pub fn new(config: Config) -> Result<Self> {
        config::validate_config(&config)?;
        let repositories = factory::create_repositories(&config)?;
        Ok(Self::with_repositories(config, repositories))
    }

    pub fn with_repositories(config: Config, repositories: Repositories) -> Self {
        Self {
            app: App::new(repositories.workshops, repositories.registrations),
            attendance: AttendanceWorkflow::new(repositories.attendance),
            config,
        }
    }

    pub fn from_config_path(path: &std::path::Path) -> Result<Self> {
        let config = config::load_from_file(path)?;
        Self::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn attendance(&self) -> &AttendanceWorkflow {
        &self.attendance
    }

    pub fn attendance_mut(&mut self) -> &mut AttendanceWorkflow {
        &mut self.attendance
    }
}
