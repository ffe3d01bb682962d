//! Fetch-and-print flow
//!
//! Resolves the current user, fetches the events they received and writes
//! one line per event. Both API calls complete before anything is written,
//! so a failed fetch leaves the output empty.

use crate::output::write_line;
use crate::render::render_event;
use gh_client::{GitHubClient, MAX_PER_PAGE};
use log::debug;
use std::io::{self, Write};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// How events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered feed lines, with or without ANSI styling
    Text { styled: bool },
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    /// Print at most this many events
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            limit: None,
            format: OutputFormat::Text { styled: false },
        }
    }
}

impl FeedOptions {
    /// Page size to request so that `limit` events fit on the first page
    pub fn per_page(&self) -> Option<u8> {
        self.limit.map(|limit| limit.min(MAX_PER_PAGE as usize) as u8)
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not resolve the current user")]
    CurrentUser(#[source] BoxError),

    #[error("could not fetch events received by {login}")]
    ReceivedEvents {
        login: String,
        #[source]
        source: BoxError,
    },

    #[error("could not encode event")]
    Json(#[from] serde_json::Error),

    #[error("could not write output")]
    Output(#[from] io::Error),
}

impl FeedError {
    /// Whether this is a failed API call (as opposed to a local write error)
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FeedError::CurrentUser(_) | FeedError::ReceivedEvents { .. }
        )
    }
}

/// Fetch the received events feed and write it to `out`
///
/// Returns the number of events written.
pub async fn run<W: Write>(
    client: &dyn GitHubClient,
    options: &FeedOptions,
    out: &mut W,
) -> Result<usize, FeedError> {
    let user = client
        .fetch_current_user()
        .await
        .map_err(|e| FeedError::CurrentUser(e.into()))?;

    let mut events = client
        .fetch_received_events(&user.login, options.per_page())
        .await
        .map_err(|e| FeedError::ReceivedEvents {
            login: user.login.clone(),
            source: e.into(),
        })?;

    if let Some(limit) = options.limit {
        events.truncate(limit);
    }
    debug!("Writing {} events", events.len());

    for event in &events {
        match options.format {
            OutputFormat::Text { styled } => write_line(out, &render_event(event), styled)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, event)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_page_follows_limit() {
        let mut options = FeedOptions::default();
        assert_eq!(options.per_page(), None);

        options.limit = Some(5);
        assert_eq!(options.per_page(), Some(5));

        options.limit = Some(500);
        assert_eq!(options.per_page(), Some(100));
    }

    #[test]
    fn test_fetch_failure_classification() {
        let fetch = FeedError::CurrentUser("bad credentials".into());
        let write = FeedError::Output(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(fetch.is_fetch_failure());
        assert!(!write.is_fetch_failure());
        assert_eq!(fetch.to_string(), "could not resolve the current user");
    }
}
