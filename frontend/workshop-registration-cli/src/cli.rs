use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "workshop-registration",
    about = "Summarize workshop registrations and attendance"
)]
pub struct Cli {
    #[arg(long, env = "WORKSHOP_REGISTRATION_CONFIG", default_value = "workshops.toml")]
    pub config: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Refresh and list upcoming workshops with registration counts
    Workshops,
    /// List the registrations of one workshop
    Registrants { workshop_id: String },
    /// List the attendees of one workshop
    Attendance { workshop_id: String },
    /// Load and validate the config file
    ValidateConfig,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Workshops => "workshops",
            Self::Registrants { .. } => "registrants",
            Self::Attendance { .. } => "attendance",
            Self::ValidateConfig => "validate-config",
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
