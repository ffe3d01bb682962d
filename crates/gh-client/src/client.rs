//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{Event, User};
use async_trait::async_trait;

/// Largest page size the events API accepts
pub const MAX_PER_PAGE: u8 = 100;

/// GitHub API client trait
///
/// Defines the two read-only calls the feed needs. Implementations make a
/// single attempt per call: no retry, no pagination beyond the first page.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn feed(client: &dyn GitHubClient) -> anyhow::Result<usize> {
///     let user = client.fetch_current_user().await?;
///     let events = client.fetch_received_events(&user.login, None).await?;
///     Ok(events.len())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the authenticated user (`GET /user`)
    async fn fetch_current_user(&self) -> anyhow::Result<User>;

    /// Fetch events received by a user, newest first
    ///
    /// # Arguments
    ///
    /// * `login` - The user whose received events to fetch
    /// * `per_page` - Optional page size, clamped to `1..=100`; the API
    ///   default (30) is used when `None`
    ///
    /// # Returns
    ///
    /// The first page of received events, in the order the API returned them.
    async fn fetch_received_events(
        &self,
        login: &str,
        per_page: Option<u8>,
    ) -> anyhow::Result<Vec<Event>>;
}

/// Clamp a requested page size to what the API accepts
pub fn clamp_per_page(per_page: u8) -> u8 {
    per_page.clamp(1, MAX_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_per_page() {
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(30), 30);
        assert_eq!(clamp_per_page(100), 100);
        assert_eq!(clamp_per_page(255), 100);
    }
}
