//! Subset of the Zoom REST payloads used by the adapters.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3_600
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingListPage {
    #[serde(default)]
    pub meetings: Vec<MeetingSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingSummary {
    #[serde(deserialize_with = "meeting_id")]
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    #[serde(deserialize_with = "meeting_id")]
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

impl Meeting {
    /// Start of the meeting, or of its first occurrence for recurring meetings.
    pub fn first_start_time(&self) -> Option<&str> {
        self.start_time.as_deref().or_else(|| {
            self.occurrences
                .iter()
                .find_map(|occurrence| occurrence.start_time.as_deref())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Occurrence {
    pub occurrence_id: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Registrant status filter accepted by the list-registrants endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrantStatus {
    Approved,
    Pending,
    Denied,
}

impl RegistrantStatus {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Pending, Self::Denied];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrantPage {
    #[serde(default)]
    pub registrants: Vec<Registrant>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Registrant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Registrant {
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.trim().is_empty() => {
                format!("{} {}", self.first_name.trim(), last.trim())
            }
            _ => self.first_name.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantReportPage {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_email: String,
    /// Seconds spent in the meeting.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub status: String,
}

// Zoom returns meeting ids as JSON numbers; everything downstream keys by string.
fn meeting_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}
