//! Project Entity
//!
//! A container in the host system's project tree. Projects inherit the
//! notification destination from their ancestors, so the snapshot carries
//! the parent link and the project-scoped custom field values.

use serde::{Deserialize, Serialize};

/// A project snapshot from the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    /// Display name
    pub name: String,
    /// Parent project, if any
    pub parent_id: Option<u64>,
    /// Project-scoped custom field values (e.g. the per-project webhook URL)
    #[serde(default)]
    pub custom_values: Vec<CustomFieldValue>,
}

/// A custom field value attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldValue {
    /// Custom field name
    pub field: String,
    pub value: String,
}

impl Project {
    /// Create a new project snapshot
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            custom_values: Vec::new(),
        }
    }

    /// Set the parent project
    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Attach a custom field value
    pub fn with_custom_value(
        mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.custom_values.push(CustomFieldValue {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Look up a custom field value by field name
    pub fn custom_value(&self, field: &str) -> Option<&str> {
        self.custom_values
            .iter()
            .find(|cv| cv.field == field)
            .map(|cv| cv.value.as_str())
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_value_lookup() {
        let project = Project::new(1, "Sandbox")
            .with_custom_value("Teams URL", "https://example.test/hook")
            .with_custom_value("Color", "red");

        assert_eq!(
            project.custom_value("Teams URL"),
            Some("https://example.test/hook")
        );
        assert_eq!(project.custom_value("Missing"), None);
    }
}
