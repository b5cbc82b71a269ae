//! In-memory port implementations for tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use trackcast::domain::entities::{Attachment, Changeset, CustomField, Issue, Project, WikiPage};
use trackcast::ports::{NotificationSink, ObjectRouter, ReferenceDirectory};

/// A reference directory backed by hash maps
#[derive(Default)]
pub struct MemoryDirectory {
    projects: HashMap<u64, Project>,
    issues: HashMap<u64, Issue>,
    attachments: HashMap<u64, Attachment>,
    custom_fields: HashMap<u64, CustomField>,
    trackers: HashMap<u64, String>,
    statuses: HashMap<u64, String>,
    priorities: HashMap<u64, String>,
    categories: HashMap<u64, String>,
    users: HashMap<u64, String>,
    versions: HashMap<u64, String>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.id, project);
        self
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.insert(issue.id, issue);
        self
    }

    pub fn with_attachment(mut self, id: u64, filename: &str) -> Self {
        self.attachments.insert(id, Attachment::new(id, filename));
        self
    }

    pub fn with_custom_field(mut self, field: CustomField) -> Self {
        self.custom_fields.insert(field.id, field);
        self
    }

    pub fn with_tracker(mut self, id: u64, name: &str) -> Self {
        self.trackers.insert(id, name.to_string());
        self
    }

    pub fn with_status(mut self, id: u64, name: &str) -> Self {
        self.statuses.insert(id, name.to_string());
        self
    }

    pub fn with_priority(mut self, id: u64, name: &str) -> Self {
        self.priorities.insert(id, name.to_string());
        self
    }

    pub fn with_category(mut self, id: u64, name: &str) -> Self {
        self.categories.insert(id, name.to_string());
        self
    }

    pub fn with_user(mut self, id: u64, name: &str) -> Self {
        self.users.insert(id, name.to_string());
        self
    }

    pub fn with_version(mut self, id: u64, name: &str) -> Self {
        self.versions.insert(id, name.to_string());
        self
    }
}

impl ReferenceDirectory for MemoryDirectory {
    fn project(&self, id: u64) -> Option<Project> {
        self.projects.get(&id).cloned()
    }

    fn issue(&self, id: u64) -> Option<Issue> {
        self.issues.get(&id).cloned()
    }

    fn attachment(&self, id: u64) -> Option<Attachment> {
        self.attachments.get(&id).cloned()
    }

    fn custom_field(&self, id: u64) -> Option<CustomField> {
        self.custom_fields.get(&id).cloned()
    }

    fn tracker_name(&self, id: u64) -> Option<String> {
        self.trackers.get(&id).cloned()
    }

    fn status_name(&self, id: u64) -> Option<String> {
        self.statuses.get(&id).cloned()
    }

    fn priority_name(&self, id: u64) -> Option<String> {
        self.priorities.get(&id).cloned()
    }

    fn category_name(&self, id: u64) -> Option<String> {
        self.categories.get(&id).cloned()
    }

    fn user_name(&self, id: u64) -> Option<String> {
        self.users.get(&id).cloned()
    }

    fn version_name(&self, id: u64) -> Option<String> {
        self.versions.get(&id).cloned()
    }
}

/// A router producing fixed example.test URLs
pub struct StubRouter;

impl ObjectRouter for StubRouter {
    fn issue_url(&self, issue: &Issue) -> String {
        format!("https://example.test/issues/{}", issue.id)
    }

    fn wiki_page_url(&self, _project: &Project, page: &WikiPage) -> String {
        format!("https://example.test/wiki/{}", page.title)
    }

    fn attachment_url(&self, attachment: &Attachment) -> String {
        format!("https://example.test/attachments/{}", attachment.id)
    }

    fn revision_url(&self, changeset: &Changeset) -> String {
        format!("https://example.test/revisions/{}", changeset.revision)
    }
}

/// A sink that records every dispatched payload
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent.lock().expect("sink poisoned").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn dispatch(&self, url: &str, payload: serde_json::Value) {
        self.sent
            .lock()
            .expect("sink poisoned")
            .push((url.to_string(), payload));
    }
}
