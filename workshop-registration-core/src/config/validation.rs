use std::collections::{HashMap, HashSet};

use crate::config::schema::{Config, SourceBackendKind};
use crate::error::{Error, Result};
use crate::zoom::normalize_meeting_id;

pub fn validate_config(config: &Config) -> Result<()> {
    match config.source.backend {
        SourceBackendKind::InMemory => validate_seed_data(config),
        SourceBackendKind::Zoom => validate_zoom(config),
    }
}

fn validate_zoom(config: &Config) -> Result<()> {
    let zoom = &config.zoom;

    let user_id = zoom.user_id.as_deref().map(str::trim).unwrap_or_default();
    if user_id.is_empty() {
        return Err(Error::Validation(
            "zoom backend requires 'zoom.user_id'".to_owned(),
        ));
    }

    for (key, value) in [
        ("zoom.api_base_url", &zoom.api_base_url),
        ("zoom.oauth_url", &zoom.oauth_url),
        ("zoom.account_id_env", &zoom.account_id_env),
        ("zoom.client_id_env", &zoom.client_id_env),
        ("zoom.client_secret_env", &zoom.client_secret_env),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation(format!("'{key}' cannot be empty")));
        }
    }

    if zoom.page_size == 0 || zoom.page_size > 300 {
        return Err(Error::Validation(format!(
            "'zoom.page_size' must be between 1 and 300, got {}",
            zoom.page_size
        )));
    }

    let mut normalized: HashMap<String, &str> = HashMap::new();
    for meeting_id in zoom.capacity_overrides.keys() {
        if meeting_id.trim().is_empty() {
            return Err(Error::Validation(
                "capacity override meeting id cannot be empty".to_owned(),
            ));
        }

        if let Some(previous) = normalized.insert(normalize_meeting_id(meeting_id), meeting_id) {
            return Err(Error::Validation(format!(
                "capacity overrides '{previous}' and '{meeting_id}' name the same meeting"
            )));
        }
    }

    Ok(())
}

fn validate_seed_data(config: &Config) -> Result<()> {
    let mut workshop_ids = HashSet::new();
    for workshop in &config.workshops {
        if workshop.title.trim().is_empty() {
            return Err(Error::Validation("workshop title cannot be empty".to_owned()));
        }

        if let Some(id) = workshop.id.as_deref() {
            let id = id.trim();
            if id.is_empty() {
                return Err(Error::Validation(format!(
                    "workshop '{}' has an empty id",
                    workshop.title
                )));
            }
            if !workshop_ids.insert(id.to_owned()) {
                return Err(Error::Validation(format!("duplicate workshop id '{id}'")));
            }
        }
    }

    // Registrations and attendees may reference workshops that are not seeded.
    for registration in &config.registrations {
        if registration.workshop_id.trim().is_empty() {
            return Err(Error::Validation(format!(
                "registration for '{}' has an empty workshop_id",
                registration.name
            )));
        }
    }

    for attendee in &config.attendees {
        if attendee.workshop_id.trim().is_empty() {
            return Err(Error::Validation(format!(
                "attendee '{}' has an empty workshop_id",
                attendee.name
            )));
        }
    }

    Ok(())
}
