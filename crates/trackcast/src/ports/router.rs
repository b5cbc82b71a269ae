//! Object Router Port
//!
//! Fully-qualified URLs for the host system's objects. The host owns its
//! routing table and host-name configuration; this port treats both as a
//! pure string-returning function.

use crate::domain::entities::{Attachment, Changeset, Issue, Project, WikiPage};

/// URL resolution for linkable objects
pub trait ObjectRouter: Send + Sync {
    /// URL of an issue's detail view
    fn issue_url(&self, issue: &Issue) -> String;

    /// URL of a wiki page within a project
    fn wiki_page_url(&self, project: &Project, page: &WikiPage) -> String;

    /// Download URL of an attachment
    fn attachment_url(&self, attachment: &Attachment) -> String;

    /// URL of a changeset's revision view
    fn revision_url(&self, changeset: &Changeset) -> String;
}
