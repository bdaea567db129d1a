//! Hosting-API layer for GitHub releases.
//!
//! Commands talk to the API through the `Forge` trait so the release and
//! probe flows stay testable without network access.

/// GitHub API client implementation.
pub mod github;

/// Trait seam between commands and the API client.
pub mod traits;

/// Shared payload types for releases and repository metadata.
pub mod types;
