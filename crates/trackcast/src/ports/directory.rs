//! Reference Directory Port
//!
//! Read-only id lookups against the host system's store. Every lookup
//! returns `Option`: a missing or deleted referent degrades to a blank
//! display value, it never aborts a notification.

use crate::domain::entities::{Attachment, CustomField, Issue, Project};

/// Read-only lookup interface over the host system's records
pub trait ReferenceDirectory: Send + Sync {
    /// Look up a project by id
    fn project(&self, id: u64) -> Option<Project>;

    /// Look up an issue by id
    fn issue(&self, id: u64) -> Option<Issue>;

    /// Look up an attachment by id
    fn attachment(&self, id: u64) -> Option<Attachment>;

    /// Look up a custom field definition by id
    fn custom_field(&self, id: u64) -> Option<CustomField>;

    /// Tracker display name for an id
    fn tracker_name(&self, id: u64) -> Option<String>;

    /// Issue status display name for an id
    fn status_name(&self, id: u64) -> Option<String>;

    /// Issue priority display name for an id
    fn priority_name(&self, id: u64) -> Option<String>;

    /// Issue category display name for an id
    fn category_name(&self, id: u64) -> Option<String>;

    /// User display name for an id
    fn user_name(&self, id: u64) -> Option<String>;

    /// Version display name for an id
    fn version_name(&self, id: u64) -> Option<String>;

    /// Render a raw custom field value with the field's configured display
    /// format. The default passes the raw value through unchanged.
    fn format_custom_value(&self, _field: &CustomField, raw: &str) -> String {
        raw.to_string()
    }
}
