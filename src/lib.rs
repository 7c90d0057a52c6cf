//! Rota: role rotation and sprint timeline engine.
//!
//! Assigns team members to recurring roles each sprint and keeps the sprint
//! timeline consistent when sprints are deleted or reordered.
//!
//! ## Layout
//!
//! - [`rotation`] computes a role-to-member map (sequential, random or manual)
//! - [`timeline`] ripples deletions, reorders, drafts and activates sprints
//! - [`calendar`] does weekday arithmetic for sprint end dates
//! - [`plan`] persists the roster and timeline as `.rota/plan.json`
//! - [`log`] keeps the `.rota/activity.log` audit trail
//!
//! The rotation and timeline functions are pure: they take slices and return
//! new values, so callers decide when anything is written to disk.

pub mod calendar;
pub mod color;
pub mod config;
pub mod error;
pub mod log;
pub mod plan;
pub mod roster;
pub mod rotation;
pub mod sprint_id;
#[doc(hidden)]
pub mod testutil;
pub mod timeline;

pub use error::{Result, RotaError};
pub use plan::{Plan, RoleEdit, SprintEdit};
pub use roster::{Assignments, History, Member, MemberId, Role, RoleId};
pub use rotation::Strategy;
pub use timeline::{Sprint, SprintId, SprintStatus};
