use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::config::schema::ZoomConfig;
use crate::error::{Error, Result};
use crate::zoom::http_client::build_client;
use crate::zoom::retry::{send_with_retry, RequestKind, RetryPolicy};
use crate::zoom::types::{
    AccessTokenResponse, Meeting, MeetingListPage, MeetingSummary, Participant,
    ParticipantReportPage, Registrant, RegistrantPage, RegistrantStatus,
};

/// Tokens are refreshed this long before Zoom would reject them.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// The Zoom endpoints the adapters rely on.
#[async_trait]
pub trait ZoomApi: Send + Sync {
    async fn get_meetings(&self, user_id: &str) -> Result<Vec<MeetingSummary>>;
    async fn get_meeting(&self, meeting_id: &str) -> Result<Meeting>;
    async fn list_registrants(
        &self,
        meeting_id: &str,
        status: RegistrantStatus,
    ) -> Result<Vec<Registrant>>;
    async fn get_participant_report(&self, meeting_id: &str) -> Result<Vec<Participant>>;
}

/// Strips the spaces Zoom shows in meeting ids ("860 6126 7458").
pub fn normalize_meeting_id(meeting_id: &str) -> String {
    meeting_id.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[derive(Clone)]
pub struct ZoomCredentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ZoomCredentials {
    pub fn from_env(config: &ZoomConfig) -> Result<Self> {
        Ok(Self {
            account_id: read_env(&config.account_id_env)?,
            client_id: read_env(&config.client_id_env)?,
            client_secret: read_env(&config.client_secret_env)?,
        })
    }
}

impl std::fmt::Debug for ZoomCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomCredentials")
            .field("account_id", &self.account_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            Error::Config(format!(
                "zoom credentials require env var '{name}' to be set"
            ))
        })
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now + TOKEN_EXPIRY_MARGIN < self.expires_at
    }
}

pub struct ZoomClient {
    http: reqwest::Client,
    api_base_url: String,
    oauth_url: String,
    credentials: ZoomCredentials,
    page_size: u32,
    retry: RetryPolicy,
    token: Mutex<Option<CachedToken>>,
}

impl ZoomClient {
    pub fn new(config: &ZoomConfig, credentials: ZoomCredentials) -> Result<Self> {
        Ok(Self {
            http: build_client(config.timeout_ms)?,
            api_base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            oauth_url: config.oauth_url.clone(),
            credentials,
            page_size: config.page_size,
            retry: RetryPolicy::from(&config.retry),
            token: Mutex::new(None),
        })
    }

    pub fn from_config(config: &ZoomConfig) -> Result<Self> {
        Self::new(config, ZoomCredentials::from_env(config)?)
    }

    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Instant::now()) {
                return Ok(token.value.clone());
            }
        }

        let request = self
            .http
            .post(&self.oauth_url)
            .query(&[
                ("grant_type", "account_credentials"),
                ("account_id", self.credentials.account_id.as_str()),
            ])
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            );
        let response = send_with_retry(
            request,
            &self.retry,
            RequestKind::TokenGrant,
            "zoom oauth token",
        )
        .await?;
        let token: AccessTokenResponse = decode_json(response, "zoom oauth token").await?;
        tracing::debug!(
            token_type = token.token_type.as_deref().unwrap_or("bearer"),
            expires_in = token.expires_in,
            "obtained zoom access token"
        );

        let value = token.access_token.clone();
        *cached = Some(CachedToken {
            value: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });
        Ok(value)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        operation: &str,
    ) -> Result<T> {
        let token = self.access_token().await?;
        let request = self
            .http
            .get(format!("{}{path}", self.api_base_url))
            .bearer_auth(token)
            .query(query);
        let response = send_with_retry(request, &self.retry, RequestKind::Read, operation).await?;
        decode_json(response, operation).await
    }

    /// Collects every page of a `next_page_token` paginated listing.
    async fn get_all_pages<P, T>(
        &self,
        path: &str,
        base_query: &[(&str, String)],
        operation: &str,
        split: fn(P) -> (Vec<T>, Option<String>),
    ) -> Result<Vec<T>>
    where
        P: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut next_page_token: Option<String> = None;

        loop {
            let mut query = base_query.to_vec();
            query.push(("page_size", self.page_size.to_string()));
            if let Some(token) = next_page_token.take() {
                query.push(("next_page_token", token));
            }

            let page: P = self.get_json(path, &query, operation).await?;
            let (mut page_items, token) = split(page);
            items.append(&mut page_items);

            match token.filter(|token| !token.is_empty()) {
                Some(token) => next_page_token = Some(token),
                None => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl ZoomApi for ZoomClient {
    async fn get_meetings(&self, user_id: &str) -> Result<Vec<MeetingSummary>> {
        self.get_all_pages(
            &format!("/users/{user_id}/meetings"),
            &[("type", "upcoming".to_owned())],
            "zoom list meetings",
            |page: MeetingListPage| (page.meetings, page.next_page_token),
        )
        .await
    }

    async fn get_meeting(&self, meeting_id: &str) -> Result<Meeting> {
        let meeting_id = normalize_meeting_id(meeting_id);
        self.get_json(&format!("/meetings/{meeting_id}"), &[], "zoom get meeting")
            .await
    }

    async fn list_registrants(
        &self,
        meeting_id: &str,
        status: RegistrantStatus,
    ) -> Result<Vec<Registrant>> {
        let meeting_id = normalize_meeting_id(meeting_id);
        self.get_all_pages(
            &format!("/meetings/{meeting_id}/registrants"),
            &[("status", status.as_str().to_owned())],
            "zoom list registrants",
            |page: RegistrantPage| (page.registrants, page.next_page_token),
        )
        .await
    }

    async fn get_participant_report(&self, meeting_id: &str) -> Result<Vec<Participant>> {
        let meeting_id = normalize_meeting_id(meeting_id);
        self.get_all_pages(
            &format!("/report/meetings/{meeting_id}/participants"),
            &[],
            "zoom participant report",
            |page: ParticipantReportPage| (page.participants, page.next_page_token),
        )
        .await
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Source(format!(
            "{operation} failed with status {status}: {body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|err| Error::Source(format!("failed to parse {operation} response: {err}")))
}
