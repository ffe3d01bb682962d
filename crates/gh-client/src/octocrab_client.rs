//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Responses are decoded straight into this crate's types.

use crate::client::{clamp_per_page, GitHubClient};
use crate::types::{Event, User};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Query parameters for the received events endpoint
#[derive(Debug, Serialize)]
struct EventsParams {
    per_page: u8,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Route of the received events endpoint for a user
fn received_events_route(login: &str) -> String {
    format!("/users/{}/received_events", login)
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_current_user(&self) -> anyhow::Result<User> {
        debug!("Fetching current user");

        let user: User = self.octocrab.get("/user", None::<&()>).await?;

        debug!("Authenticated as {}", user.login);
        Ok(user)
    }

    async fn fetch_received_events(
        &self,
        login: &str,
        per_page: Option<u8>,
    ) -> anyhow::Result<Vec<Event>> {
        debug!("Fetching received events for {}", login);

        let route = received_events_route(login);
        let params = per_page.map(|n| EventsParams {
            per_page: clamp_per_page(n),
        });
        let events: Vec<Event> = self.octocrab.get(route, params.as_ref()).await?;

        debug!("Fetched {} events for {}", events.len(), login);
        Ok(events)
    }
}
