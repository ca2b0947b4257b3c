//! Project access rules.
//!
//! Access to a project and its tasks is derived solely from the caller's row
//! in `project_roles`. The API layer loads that row (or its absence) on every
//! request and passes it to [`authorize`].
//!
//! | Action            | Owner | Participant |
//! |-------------------|-------|-------------|
//! | `ViewProject`     | yes   | yes         |
//! | `RenameProject`   | yes   | no          |
//! | `DeleteProject`   | yes   | no          |
//! | `InviteMembers`   | yes   | no          |
//! | `ReadTasks`       | yes   | yes         |
//! | `WriteTasks`      | yes   | yes         |
//! | `LeaveProject`    | no    | yes         |
//!
//! A caller with no role gets `NotFound` for every action so that the
//! existence of other users' projects is not revealed.

use crate::error::CoreError;
use crate::roles::MemberRole;
use crate::types::DbId;

/// Something a caller may attempt on a project or its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    ViewProject,
    RenameProject,
    DeleteProject,
    InviteMembers,
    ReadTasks,
    /// Create, update (including status) and delete tasks.
    WriteTasks,
    LeaveProject,
}

impl ProjectAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewProject => "view project",
            Self::RenameProject => "rename project",
            Self::DeleteProject => "delete project",
            Self::InviteMembers => "invite members",
            Self::ReadTasks => "read tasks",
            Self::WriteTasks => "write tasks",
            Self::LeaveProject => "leave project",
        }
    }
}

impl MemberRole {
    /// Returns `true` if this role may perform `action`.
    pub fn permits(&self, action: ProjectAction) -> bool {
        use ProjectAction::*;
        match self {
            MemberRole::Owner => !matches!(action, LeaveProject),
            MemberRole::Participant => {
                matches!(action, ViewProject | ReadTasks | WriteTasks | LeaveProject)
            }
        }
    }
}

/// Decide whether a caller holding `role` in `project_id` may perform `action`.
///
/// - `None` (not a member) yields [`CoreError::NotFound`] for the project.
/// - An owner attempting to leave yields [`CoreError::Conflict`]; the project
///   would be left without an owner.
/// - Any other denial yields [`CoreError::Forbidden`].
///
/// On success the caller's role is returned for convenience.
pub fn authorize(
    project_id: DbId,
    role: Option<MemberRole>,
    action: ProjectAction,
) -> Result<MemberRole, CoreError> {
    let role = role.ok_or(CoreError::NotFound {
        entity: "Project",
        id: project_id,
    })?;

    if role.permits(action) {
        return Ok(role);
    }

    match (role, action) {
        (MemberRole::Owner, ProjectAction::LeaveProject) => Err(CoreError::Conflict(
            "The owner cannot leave a project; delete it instead".to_string(),
        )),
        _ => Err(CoreError::Forbidden(format!(
            "Only the project owner may {}",
            action.as_str()
        ))),
    }
}
