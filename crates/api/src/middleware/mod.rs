//! Authentication and project access extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the bearer token to a user row.
//! - [`access::require_project_access`] -- Checks the caller's project role for an action.

pub mod access;
pub mod auth;
