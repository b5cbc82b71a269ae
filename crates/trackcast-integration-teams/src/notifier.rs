//! Event Formatters
//!
//! The four entry points the host's hook dispatch invokes. Each is a pure
//! translation: gather display strings, resolve the destination, build the
//! card, hand it to the sink. Unmet guards (no destination, private
//! content, disabled option) end the cycle silently; a notification must
//! never fail the business action that raised it.

use std::sync::Arc;

use tracing::{debug, warn};

use trackcast::domain::entities::{
    Changeset, Fields, HookEvent, Issue, Journal, NotificationMessage, Project, TextSegment,
    WikiPage,
};
use trackcast::ports::{Localizer, NotificationSink, ObjectRouter, ReferenceDirectory};

use crate::cards::{build_payload, CardFormat};
use crate::config::TeamsSettings;
use crate::destination::resolve_url;
use crate::fields::extract_fields;
use crate::markup::{escape, split_blocks};

/// Formats hook events into Teams cards and hands them to the sink
pub struct TeamsNotifier {
    settings: TeamsSettings,
    directory: Arc<dyn ReferenceDirectory>,
    router: Arc<dyn ObjectRouter>,
    locale: Arc<dyn Localizer>,
    sink: Arc<dyn NotificationSink>,
}

impl TeamsNotifier {
    /// Create a notifier over the given collaborators
    pub fn new(
        settings: TeamsSettings,
        directory: Arc<dyn ReferenceDirectory>,
        router: Arc<dyn ObjectRouter>,
        locale: Arc<dyn Localizer>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            settings,
            directory,
            router,
            locale,
            sink,
        }
    }

    /// Dispatch a hook event to the matching formatter
    pub async fn handle(&self, event: &HookEvent) {
        match event {
            HookEvent::IssueCreated { issue } => self.issue_created(issue).await,
            HookEvent::IssueEdited { issue, journal } => self.issue_edited(issue, journal).await,
            HookEvent::CommitUpdate {
                issue,
                journal,
                changeset,
                saved,
            } => self.commit_updated(issue, journal, changeset, *saved).await,
            HookEvent::WikiEdited { project, page } => self.wiki_edited(project, page).await,
        }
    }

    /// Announce a newly created issue
    pub async fn issue_created(&self, issue: &Issue) {
        let Some(url) = self.destination(&issue.project) else {
            return;
        };
        if issue.is_private {
            return;
        }

        let text = format!(
            "{} created [{}]({})",
            escape(&issue.author),
            escape(&issue.to_string()),
            self.router.issue_url(issue),
        );

        let mut fields = Fields::new();
        fields.insert(
            self.locale.field_label("status"),
            escape(&issue.status),
        );
        fields.insert(
            self.locale.field_label("priority"),
            escape(&issue.priority),
        );
        fields.insert(
            self.locale.field_label("assigned_to"),
            escape(issue.assigned_to.as_deref().unwrap_or("")),
        );
        if self.settings.display_watchers {
            fields.insert(
                self.locale.field_label("watcher"),
                escape(&issue.watchers.join(", ")),
            );
        }

        let segments = issue
            .description
            .as_deref()
            .map(split_blocks)
            .unwrap_or_default();

        let message = NotificationMessage::new()
            .with_title(escape(&issue.project.name))
            .with_text(text)
            .with_segments(segments)
            .with_fields(fields);

        self.deliver(&url, message).await;
    }

    /// Announce an issue edit
    pub async fn issue_edited(&self, issue: &Issue, journal: &Journal) {
        if !self.settings.post_updates {
            return;
        }
        if issue.is_private || journal.private_notes {
            return;
        }
        let Some(url) = self.destination(&issue.project) else {
            return;
        };

        let text = format!(
            "{} updated [{}]({})",
            escape(&journal.user),
            escape(&issue.to_string()),
            self.router.issue_url(issue),
        );

        let segments = journal
            .notes
            .as_deref()
            .map(split_blocks)
            .unwrap_or_default();
        let fields = extract_fields(
            &journal.details,
            self.directory.as_ref(),
            self.router.as_ref(),
            self.locale.as_ref(),
        );

        let message = NotificationMessage::new()
            .with_title(escape(&issue.project.name))
            .with_text(text)
            .with_segments(segments)
            .with_fields(fields);

        self.deliver(&url, message).await;
    }

    /// Announce an issue update applied by a referencing commit
    pub async fn commit_updated(
        &self,
        issue: &Issue,
        journal: &Journal,
        changeset: &Changeset,
        saved: bool,
    ) {
        let Some(url) = self.destination(&issue.project) else {
            return;
        };
        if !saved || issue.is_private {
            return;
        }

        let text = format!(
            "{} updated [{}]({})",
            escape(&journal.user),
            escape(&issue.to_string()),
            self.router.issue_url(issue),
        );

        let revision_link = format!(
            "[{}]({})",
            escape(&changeset.comments),
            self.router.revision_url(changeset),
        );
        let caption = self.locale.status_changed_by_changeset(&revision_link);

        let fields = extract_fields(
            &journal.details,
            self.directory.as_ref(),
            self.router.as_ref(),
            self.locale.as_ref(),
        );

        let message = NotificationMessage::new()
            .with_title(escape(&issue.project.name))
            .with_text(text)
            .with_segments(vec![TextSegment::Plain(caption)])
            .with_fields(fields);

        self.deliver(&url, message).await;
    }

    /// Announce a wiki page edit
    pub async fn wiki_edited(&self, project: &Project, page: &WikiPage) {
        if !self.settings.post_wiki_updates {
            return;
        }
        let Some(url) = self.destination(project) else {
            return;
        };

        let page_link = format!("[{}]({})", page.title, self.router.wiki_page_url(project, page));
        let mut text = format!("{} updated by *{}*", page_link, page.author);
        if !page.comments.is_empty() {
            text.push_str("\n\n");
            text.push_str(&escape(&page.comments));
        }

        let message = NotificationMessage::new()
            .with_title(escape(&project.name))
            .with_text(text);

        self.deliver(&url, message).await;
    }

    fn destination(&self, project: &Project) -> Option<String> {
        let url = resolve_url(project, self.directory.as_ref(), &self.settings);
        if url.is_none() {
            debug!(project = %project.name, "no webhook destination, skipping notification");
        }
        url
    }

    async fn deliver(&self, url: &str, message: NotificationMessage) {
        let format = CardFormat::for_destination(url);
        match build_payload(&message, format) {
            Ok(payload) => self.sink.dispatch(url, payload).await,
            Err(e) => warn!(url = %url, error = %e, "failed to build notification payload"),
        }
    }
}
