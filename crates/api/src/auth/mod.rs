//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Bearer token issuing and signature validation.

pub mod jwt;
pub mod password;
