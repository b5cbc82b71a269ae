//! Send a sample issue-created card to a webhook URL.
//!
//! Usage: cargo run --example notify -- https://outlook.office.com/webhook/...

use std::sync::Arc;

use anyhow::{Context, Result};

use trackcast::domain::entities::{Attachment, Changeset, CustomField, Issue, Project, WikiPage};
use trackcast::ports::{DefaultLocale, ObjectRouter, ReferenceDirectory};
use trackcast_integration_teams::{TeamsClient, TeamsNotifier, TeamsSettings};

/// A host with no other records to look up
struct EmptyDirectory;

impl ReferenceDirectory for EmptyDirectory {
    fn project(&self, _id: u64) -> Option<Project> {
        None
    }
    fn issue(&self, _id: u64) -> Option<Issue> {
        None
    }
    fn attachment(&self, _id: u64) -> Option<Attachment> {
        None
    }
    fn custom_field(&self, _id: u64) -> Option<CustomField> {
        None
    }
    fn tracker_name(&self, _id: u64) -> Option<String> {
        None
    }
    fn status_name(&self, _id: u64) -> Option<String> {
        None
    }
    fn priority_name(&self, _id: u64) -> Option<String> {
        None
    }
    fn category_name(&self, _id: u64) -> Option<String> {
        None
    }
    fn user_name(&self, _id: u64) -> Option<String> {
        None
    }
    fn version_name(&self, _id: u64) -> Option<String> {
        None
    }
}

/// Routes against a fixed demo host
struct DemoRouter;

impl ObjectRouter for DemoRouter {
    fn issue_url(&self, issue: &Issue) -> String {
        format!("https://tracker.example.com/issues/{}", issue.id)
    }
    fn wiki_page_url(&self, project: &Project, page: &WikiPage) -> String {
        format!(
            "https://tracker.example.com/projects/{}/wiki/{}",
            project.id, page.title
        )
    }
    fn attachment_url(&self, attachment: &Attachment) -> String {
        format!("https://tracker.example.com/attachments/{}", attachment.id)
    }
    fn revision_url(&self, changeset: &Changeset) -> String {
        format!(
            "https://tracker.example.com/projects/demo/repository/revisions/{}",
            changeset.revision
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let url = std::env::args()
        .nth(1)
        .context("usage: notify <webhook-url>")?;

    let settings = TeamsSettings::new().with_teams_url(url);
    let client = TeamsClient::new()?;
    let notifier = TeamsNotifier::new(
        settings,
        Arc::new(EmptyDirectory),
        Arc::new(DemoRouter),
        Arc::new(DefaultLocale),
        Arc::new(client),
    );

    let issue = Issue::new(1, Project::new(1, "Demo"), "Bug", "Sample notification")
        .with_author("Trackcast")
        .with_status("New")
        .with_priority("Normal")
        .with_description("Hello from trackcast.\r\n<pre>cargo run --example notify</pre>");

    notifier.issue_created(&issue).await;

    // The dispatch task is detached; give it a moment before the runtime exits
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    Ok(())
}
