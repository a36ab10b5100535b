use chrono::{DateTime, Utc};
use reqwest::header::RETRY_AFTER;
use reqwest::{RequestBuilder, Response, StatusCode};
use tokio::time::{sleep, Duration};

use crate::config::schema::RetryConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Longest `Retry-After` worth sleeping through. Zoom's daily quota
    /// answers with the next UTC midnight, which is never waited for.
    pub max_retry_after: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms.max(config.base_delay_ms)),
            max_retry_after: Duration::from_millis(config.max_retry_after_ms),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: usize) -> Duration {
        let factor = 1u32 << (attempt as u32).min(12);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Zoom endpoints differ in what is safe to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// REST reads; rate limits and server errors are retried.
    Read,
    /// The OAuth token grant. A 5xx there is reported at once: every
    /// read waits behind this request and the grant fails the same way
    /// on repeat when the account's app is misconfigured.
    TokenGrant,
}

/// What one attempt came back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status {
        status: StatusCode,
        retry_after: Option<Duration>,
    },
    Transport {
        transient: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Retry(Duration),
    GiveUp,
}

/// Decides what follows attempt number `attempt` (zero based).
pub fn next_step(
    policy: &RetryPolicy,
    kind: RequestKind,
    attempt: usize,
    outcome: &Outcome,
) -> Step {
    if attempt >= policy.max_retries {
        return Step::GiveUp;
    }

    match outcome {
        Outcome::Status {
            status,
            retry_after,
        } if *status == StatusCode::TOO_MANY_REQUESTS => match retry_after {
            Some(wait) if *wait > policy.max_retry_after => Step::GiveUp,
            Some(wait) => Step::Retry(*wait),
            None => Step::Retry(policy.backoff(attempt)),
        },
        Outcome::Status { status, .. } if status.is_server_error() => match kind {
            RequestKind::Read => Step::Retry(policy.backoff(attempt)),
            RequestKind::TokenGrant => Step::GiveUp,
        },
        Outcome::Status { .. } => Step::GiveUp,
        Outcome::Transport { transient: true } => Step::Retry(policy.backoff(attempt)),
        Outcome::Transport { transient: false } => Step::GiveUp,
    }
}

/// Reads a `Retry-After` value given either as delta seconds or as a
/// timestamp (RFC 3339 or HTTP date). Timestamps in the past mean "now".
pub fn parse_retry_after(value: &str, now: DateTime<Utc>) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let at = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()?
        .with_timezone(&Utc);
    Some((at - now).to_std().unwrap_or(Duration::ZERO))
}

/// Sends `builder` until it succeeds or [`next_step`] gives up.
///
/// A final non-success response is returned as is so the caller can report
/// its status and body.
pub async fn send_with_retry(
    builder: RequestBuilder,
    policy: &RetryPolicy,
    kind: RequestKind,
    operation: &str,
) -> Result<Response> {
    let mut attempt = 0;

    loop {
        let request = builder.try_clone().ok_or_else(|| {
            Error::Source(format!("{operation} request body cannot be replayed"))
        })?;

        let (outcome, sent) = match request.send().await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) => {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| parse_retry_after(value, Utc::now()));
                let outcome = Outcome::Status {
                    status: response.status(),
                    retry_after,
                };
                (outcome, Ok(response))
            }
            Err(err) => {
                let outcome = Outcome::Transport {
                    transient: err.is_timeout() || err.is_connect(),
                };
                (outcome, Err(err))
            }
        };

        match next_step(policy, kind, attempt, &outcome) {
            Step::Retry(delay) => {
                tracing::warn!(
                    operation,
                    ?outcome,
                    attempt,
                    delay_ms = delay.as_millis(),
                    "retrying zoom request"
                );
                sleep(delay).await;
                attempt += 1;
            }
            Step::GiveUp => {
                return sent.map_err(|err| {
                    Error::Source(format!("{operation} failed after {attempt} retries: {err}"))
                });
            }
        }
    }
}
