//! Project invitation codes and their acceptance rules.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default lifetime of an invitation in hours (3 days).
pub const DEFAULT_INVITATION_TTL_HOURS: i64 = 72;

/// Length of a generated code (hyphenated UUID), matching `invitations.code`.
pub const INVITATION_CODE_LEN: usize = 36;

/// Generate a fresh, unguessable invitation code.
pub fn generate_code() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Compute when an invitation created at `created_at` stops being valid.
///
/// Fails with [`CoreError::Internal`] if the lifetime pushes the expiry past
/// the representable date range.
pub fn expiry_from(created_at: Timestamp, ttl_hours: i64) -> Result<Timestamp, CoreError> {
    Duration::try_hours(ttl_hours)
        .and_then(|ttl| created_at.checked_add_signed(ttl))
        .ok_or_else(|| {
            CoreError::Internal(format!(
                "Invitation lifetime of {ttl_hours} hours is out of range"
            ))
        })
}

/// Check that an invitation can still be accepted at `now`.
///
/// An invitation is single-use: once `accepted_at` is set it is spent.
pub fn ensure_acceptable(
    expires_at: Timestamp,
    accepted_at: Option<Timestamp>,
    now: Timestamp,
) -> Result<(), CoreError> {
    if accepted_at.is_some() {
        return Err(CoreError::Validation(
            "Invitation has already been used".to_string(),
        ));
    }
    if now >= expires_at {
        return Err(CoreError::Validation("Invitation has expired".to_string()));
    }
    Ok(())
}
