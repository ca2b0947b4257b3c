//! Domain types and rules shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O. The membership check in [`access`]
//! is evaluated by the API layer on every request after it has loaded the
//! caller's `project_roles` row.

pub mod access;
pub mod error;
pub mod invitation;
pub mod roles;
pub mod types;
pub mod validation;
