use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub fn normalize_timeout_ms(timeout_ms: u64) -> u64 {
    if timeout_ms == 0 {
        DEFAULT_TIMEOUT_MS
    } else {
        timeout_ms
    }
}

pub fn build_client(timeout_ms: u64) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(std::time::Duration::from_millis(normalize_timeout_ms(
            timeout_ms,
        )))
        .build()
        .map_err(|err| Error::Source(format!("failed to build zoom client: {err}")))
}
