//! GitHub API client for the received events feed
//!
//! This crate provides a trait-based GitHub API client covering the two
//! read-only calls the feed needs, plus the typed event model those calls
//! decode into.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_current_user()                          │
//! │  - fetch_received_events()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │   OctocrabClient    │
//!             │   (direct API)      │
//!             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{connect, GitHubClient, TokenResolver, DEFAULT_HOST};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = connect(DEFAULT_HOST, &TokenResolver::new()).await?;
//! let user = client.fetch_current_user().await?;
//! let events = client.fetch_received_events(&user.login, Some(10)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connect;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub use gh_feed_config::DEFAULT_HOST;

pub use client::{GitHubClient, MAX_PER_PAGE};
pub use connect::{connect, TokenResolver};
pub use octocrab_client::OctocrabClient;
pub use types::{Actor, Event, EventKind, IssueRef, RefType, Repo, User};
