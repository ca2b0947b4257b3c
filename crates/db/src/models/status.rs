//! Task status lookup table and helper enum.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the `task_statuses` table.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::types::Timestamp;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Task lifecycle status.
    TaskStatus {
        /// New tasks start here.
        Todo = 1,
        InProgress = 2,
        Done = 3,
    }
}

/// A row from the `task_statuses` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskStatusRow {
    pub id: StatusId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
