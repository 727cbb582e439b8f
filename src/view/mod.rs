//! Plain-text views for the CLI.

pub mod detail;
pub mod timeline;

pub use timeline::{timeline, PhaseStatus, TimelineEntry};
