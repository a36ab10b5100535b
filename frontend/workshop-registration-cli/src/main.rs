mod cli;
mod renderer;

use std::path::PathBuf;

use workshop_registration_core::{config, logging, Error, Result, WorkshopRegistration};

use crate::cli::{Cli, Command, OutputFormat};
use crate::renderer::{render_json_error, Renderer};

fn main() {
    let args = Cli::parse_args();
    let command = args.command.clone().unwrap_or(Command::Workshops);
    let output = args.output;

    if let Err(error) = run(args, &command) {
        if output == OutputFormat::Json {
            if let Ok(envelope) = render_json_error(command.name(), &error) {
                println!("{envelope}");
            }
        }
        eprintln!("workshop-registration failed: {error}");
        std::process::exit(1);
    }
}

fn run(args: Cli, command: &Command) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let loaded_config = config::load_from_file(&config_path)?;
    logging::init_tracing(&loaded_config.logging.default_level);
    tracing::debug!(path = %config_path.display(), command = command.name(), "loaded config");

    let renderer = Renderer::new(args.output);

    let rendered = match command {
        Command::ValidateConfig => {
            config::validate_config(&loaded_config)?;
            renderer.render_message(command.name(), "Config is valid.")?
        }
        Command::Workshops => {
            let (runtime, mut registration) = start(loaded_config)?;
            runtime.block_on(registration.app_mut().refresh())?;
            renderer.render_workshops(registration.app().model())?
        }
        Command::Registrants { workshop_id } => {
            let (runtime, registration) = start(loaded_config)?;
            let registrants = runtime.block_on(registration.app().registrants(workshop_id))?;
            renderer.render_registrants(workshop_id, &registrants)?
        }
        Command::Attendance { workshop_id } => {
            let (runtime, mut registration) = start(loaded_config)?;
            runtime.block_on(registration.attendance_mut().refresh(workshop_id))?;
            renderer.render_attendance(registration.attendance().model())?
        }
    };

    println!("{rendered}");
    Ok(())
}

fn start(config: config::Config) -> Result<(tokio::runtime::Runtime, WorkshopRegistration)> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|err| Error::Config(format!("failed to create tokio runtime: {err}")))?;
    let registration = WorkshopRegistration::new(config)?;
    Ok((runtime, registration))
}
