//! Journal Entity
//!
//! One edit event on a tracked object: who edited, optional notes, and the
//! ordered list of raw property changes ("details"). Details are read-only
//! inputs; resolving their raw values to display strings is the field
//! extractor's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An edit event snapshot from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub id: u64,
    /// Editor display name
    pub user: String,
    pub notes: Option<String>,
    /// Private notes are never announced
    pub private_notes: bool,
    /// Ordered raw property changes
    #[serde(default)]
    pub details: Vec<JournalDetail>,
    pub created_on: DateTime<Utc>,
}

impl Journal {
    /// Create a new journal snapshot
    pub fn new(id: u64, user: impl Into<String>) -> Self {
        Self {
            id,
            user: user.into(),
            notes: None,
            private_notes: false,
            details: Vec::new(),
            created_on: Utc::now(),
        }
    }

    /// Set the edit notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Mark the notes private
    pub fn private(mut self) -> Self {
        self.private_notes = true;
        self
    }

    /// Append a change detail
    pub fn with_detail(mut self, detail: JournalDetail) -> Self {
        self.details.push(detail);
        self
    }
}

/// Which kind of property a detail describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JournalDetailKind {
    /// A custom field change; `prop_key` is the custom field id
    CustomField,
    /// An attachment change; `prop_key` is the attachment id
    Attachment,
    /// A plain attribute change; `prop_key` is the attribute name
    Attribute,
}

/// One raw property change within a journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDetail {
    pub kind: JournalDetailKind,
    pub prop_key: String,
    pub old_value: Option<String>,
    pub value: Option<String>,
}

impl JournalDetail {
    /// A plain attribute change ("status_id", "subject", ...)
    pub fn attribute(prop_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: JournalDetailKind::Attribute,
            prop_key: prop_key.into(),
            old_value: None,
            value: Some(value.into()),
        }
    }

    /// A custom field change keyed by the field's id
    pub fn custom_field(field_id: u64, value: impl Into<String>) -> Self {
        Self {
            kind: JournalDetailKind::CustomField,
            prop_key: field_id.to_string(),
            old_value: None,
            value: Some(value.into()),
        }
    }

    /// An attachment change keyed by the attachment id
    pub fn attachment(attachment_id: u64, filename: impl Into<String>) -> Self {
        Self {
            kind: JournalDetailKind::Attachment,
            prop_key: attachment_id.to_string(),
            old_value: None,
            value: Some(filename.into()),
        }
    }

    /// Set the previous value
    pub fn with_old_value(mut self, old_value: impl Into<String>) -> Self {
        self.old_value = Some(old_value.into());
        self
    }

    /// The raw new value, or empty when the property was cleared
    pub fn raw_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// A custom field definition from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u64,
    pub name: String,
    /// Host-side display format ("string", "list", "user", ...)
    pub field_format: String,
}

impl CustomField {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            field_format: "string".to_string(),
        }
    }

    /// Set the host-side display format
    pub fn with_format(mut self, field_format: impl Into<String>) -> Self {
        self.field_format = field_format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_constructors() {
        let detail = JournalDetail::attribute("status_id", "2").with_old_value("1");
        assert_eq!(detail.kind, JournalDetailKind::Attribute);
        assert_eq!(detail.prop_key, "status_id");
        assert_eq!(detail.raw_value(), "2");
        assert_eq!(detail.old_value.as_deref(), Some("1"));

        let detail = JournalDetail::custom_field(7, "high");
        assert_eq!(detail.kind, JournalDetailKind::CustomField);
        assert_eq!(detail.prop_key, "7");
    }

    #[test]
    fn test_cleared_value_reads_empty() {
        let detail = JournalDetail {
            kind: JournalDetailKind::Attribute,
            prop_key: "assigned_to_id".to_string(),
            old_value: Some("5".to_string()),
            value: None,
        };
        assert_eq!(detail.raw_value(), "");
    }
}
