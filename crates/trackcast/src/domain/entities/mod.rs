//! Domain Entities
//!
//! Read-only snapshots of the host system's records, plus the notification
//! message model built per event:
//! - Project: container with hierarchy and custom field values
//! - Issue: tracked object with display attributes
//! - Journal: one edit event with its ordered change details
//! - WikiPage / Changeset: the other notification sources
//! - NotificationMessage: title/body/segments/fields, built fresh per event

mod changeset;
mod event;
mod issue;
mod journal;
mod message;
mod project;
mod wiki;

pub use changeset::*;
pub use event::*;
pub use issue::*;
pub use journal::*;
pub use message::*;
pub use project::*;
pub use wiki::*;
