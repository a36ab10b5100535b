use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub zoom: ZoomConfig,
    pub logging: LoggingConfig,
    /// Seed data for the in-memory backend.
    pub workshops: Vec<WorkshopSeed>,
    pub registrations: Vec<RegistrationSeed>,
    pub attendees: Vec<AttendeeSeed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub backend: SourceBackendKind,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceBackendKind {
    #[default]
    InMemory,
    Zoom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub api_base_url: String,
    pub oauth_url: String,
    pub account_id_env: String,
    pub client_id_env: String,
    pub client_secret_env: String,
    /// Zoom user whose upcoming meetings are treated as workshops.
    pub user_id: Option<String>,
    pub page_size: u32,
    pub timeout_ms: u64,
    pub default_capacity: u32,
    /// Per-meeting capacity, keyed by meeting id without spaces.
    pub capacity_overrides: BTreeMap<String, u32>,
    pub retry: RetryConfig,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.zoom.us/v2".to_owned(),
            oauth_url: "https://zoom.us/oauth/token".to_owned(),
            account_id_env: "ACCOUNT_ID".to_owned(),
            client_id_env: "CLIENT_ID".to_owned(),
            client_secret_env: "CLIENT_SECRET".to_owned(),
            user_id: None,
            page_size: 300,
            timeout_ms: 30_000,
            default_capacity: 20,
            capacity_overrides: BTreeMap::new(),
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub max_retry_after_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 250,
            max_delay_ms: 3_000,
            max_retry_after_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub link: String,
    pub title: String,
    pub date: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub workshop_id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeSeed {
    pub workshop_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub duration: u64,
}
