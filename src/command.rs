//! Command implementations for the two binaries.
//!
//! Each command is a linear flow: validate local inputs, build the API
//! client, then walk a short sequence of requests. The flows take the
//! `Forge` trait so they can be exercised against a mock in tests.

/// Read-only diagnostics: repository access, permission level, and recent
/// releases.
pub mod check;

/// Find-or-create the tagged release and upload artifacts to it.
pub mod release;
