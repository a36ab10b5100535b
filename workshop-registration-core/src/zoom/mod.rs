pub mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod http_client;
pub mod retry;
pub mod types;

pub use client::{normalize_meeting_id, ZoomApi, ZoomClient, ZoomCredentials};
