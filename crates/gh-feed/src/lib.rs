//! Colorized feed of the GitHub activity a user received
//!
//! [`feed::run`] drives the two API calls and writes one line per event;
//! [`render::render_event`] is the per-event formatting.

pub mod cli;
pub mod feed;
pub mod logger;
pub mod output;
pub mod render;
pub mod theme;

pub use feed::{run, FeedError, FeedOptions, OutputFormat};
pub use render::render_event;
