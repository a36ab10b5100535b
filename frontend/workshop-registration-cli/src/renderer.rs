use serde::Serialize;
use workshop_registration_core::{AppModel, AttendanceModel, Error, RegistrationRecord, Result};

use crate::cli::OutputFormat;

const JSON_SCHEMA: &str = "workshop-registration-cli/v1";

#[derive(Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    schema: &'static str,
    status: &'static str,
    command: &'a str,
    data: T,
}

#[derive(Serialize)]
struct JsonErrorEnvelope<'a> {
    schema: &'static str,
    status: &'static str,
    command: &'a str,
    error: JsonErrorPayload,
}

#[derive(Serialize)]
struct JsonErrorPayload {
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct RegistrantsData<'a> {
    workshop_id: &'a str,
    registrants: &'a [RegistrationRecord],
}

pub struct Renderer {
    output_format: OutputFormat,
}

impl Renderer {
    pub fn new(output_format: OutputFormat) -> Self {
        Self { output_format }
    }

    pub fn render_workshops(&self, model: &AppModel) -> Result<String> {
        let summaries = model.upcoming_workshops();
        match self.output_format {
            OutputFormat::Json => json_envelope("workshops", summaries),
            OutputFormat::Text => {
                if summaries.is_empty() {
                    return Ok("No upcoming workshops.".to_owned());
                }

                let mut lines = vec![format!(
                    "{:<14} {:<22} {:>4} {:>5} {:>5} {:>5} {:>5}  {}",
                    "ID", "DATE", "CAP", "APPR", "WAIT", "REJ", "FREE", "TITLE"
                )];
                for summary in summaries {
                    lines.push(format!(
                        "{:<14} {:<22} {:>4} {:>5} {:>5} {:>5} {:>5}  {}",
                        summary.id,
                        summary.date,
                        summary.capacity,
                        summary.num_approved,
                        summary.num_waitlisted,
                        summary.num_rejected,
                        summary.num_free_spots,
                        summary.title
                    ));
                    if !summary.link.is_empty() {
                        lines.push(format!("{:<14} {}", "", summary.link));
                    }
                }
                Ok(lines.join("\n"))
            }
        }
    }

    pub fn render_registrants(
        &self,
        workshop_id: &str,
        registrants: &[RegistrationRecord],
    ) -> Result<String> {
        match self.output_format {
            OutputFormat::Json => json_envelope(
                "registrants",
                RegistrantsData {
                    workshop_id,
                    registrants,
                },
            ),
            OutputFormat::Text => {
                if registrants.is_empty() {
                    return Ok(format!("No registrants for workshop '{workshop_id}'."));
                }

                let mut lines = vec![format!("Registrants for workshop '{workshop_id}':")];
                lines.extend(
                    registrants
                        .iter()
                        .map(|registrant| format!("- {} ({})", registrant.name, registrant.status)),
                );
                Ok(lines.join("\n"))
            }
        }
    }

    pub fn render_attendance(&self, model: &AttendanceModel) -> Result<String> {
        let workshop_id = model.workshop_id().unwrap_or("<none>");
        match self.output_format {
            OutputFormat::Json => json_envelope(
                "attendance",
                serde_json::json!({
                    "workshop_id": workshop_id,
                    "attendees": model.attendees(),
                }),
            ),
            OutputFormat::Text => {
                if model.attendees().is_empty() {
                    return Ok(format!("No attendees for workshop '{workshop_id}'."));
                }

                let mut lines = vec![format!("Attendees for workshop '{workshop_id}':")];
                lines.extend(model.attendees().iter().map(|attendee| {
                    format!(
                        "- {} <{}> {}",
                        attendee.name,
                        attendee.email,
                        format_duration(attendee.duration)
                    )
                }));
                Ok(lines.join("\n"))
            }
        }
    }

    pub fn render_message(&self, command: &str, message: &str) -> Result<String> {
        match self.output_format {
            OutputFormat::Text => Ok(message.to_owned()),
            OutputFormat::Json => json_envelope(command, serde_json::json!({ "message": message })),
        }
    }
}

pub fn render_json_error(command: &str, error: &Error) -> Result<String> {
    let envelope = JsonErrorEnvelope {
        schema: JSON_SCHEMA,
        status: "error",
        command,
        error: JsonErrorPayload {
            code: error_code(error),
            message: error.to_string(),
        },
    };
    encode(&envelope)
}

fn error_code(error: &Error) -> &'static str {
    match error {
        Error::Config(_) => "config_error",
        Error::Validation(_) => "validation_error",
        Error::Source(_) => "source_error",
    }
}

fn json_envelope<T: Serialize>(command: &str, data: T) -> Result<String> {
    encode(&JsonEnvelope {
        schema: JSON_SCHEMA,
        status: "ok",
        command,
        data,
    })
}

fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|err| Error::Validation(format!("failed to encode output: {err}")))
}

fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}
