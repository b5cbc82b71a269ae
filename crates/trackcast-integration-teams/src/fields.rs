//! Journal Detail Field Extraction
//!
//! Turns a journal's raw change details into the ordered label/value
//! mapping shown as card facts. Raw foreign-key values are re-resolved to
//! display strings through the reference directory; a missing referent
//! degrades to a blank display, never an error.

use trackcast::domain::entities::{Fields, JournalDetail, JournalDetailKind};
use trackcast::ports::{Localizer, ObjectRouter, ReferenceDirectory};

use crate::markup::escape;

/// Extract display fields from journal details, in order.
///
/// Later details touching the same label overwrite earlier ones in place.
pub fn extract_fields(
    details: &[JournalDetail],
    directory: &dyn ReferenceDirectory,
    router: &dyn ObjectRouter,
    locale: &dyn Localizer,
) -> Fields {
    let mut fields = Fields::new();
    for detail in details {
        if let Some((title, value)) = detail_to_field(detail, directory, router, locale) {
            fields.insert(title, value);
        }
    }
    fields
}

/// Resolve one detail to a `(label, display value)` pair.
///
/// Returns `None` for details that are never surfaced (title, subject,
/// description).
fn detail_to_field(
    detail: &JournalDetail,
    directory: &dyn ReferenceDirectory,
    router: &dyn ObjectRouter,
    locale: &dyn Localizer,
) -> Option<(String, String)> {
    let raw = detail.raw_value();

    let (key, title, mut value) = match detail.kind {
        JournalDetailKind::CustomField => {
            match parse_id(&detail.prop_key).and_then(|id| directory.custom_field(id)) {
                Some(field) => {
                    let value = if raw.is_empty() {
                        String::new()
                    } else {
                        directory.format_custom_value(&field, raw)
                    };
                    (field.name.clone(), field.name, value)
                }
                // Deleted custom field: keep the detail visible under its key
                None => (detail.prop_key.clone(), detail.prop_key.clone(), escape(raw)),
            }
        }
        JournalDetailKind::Attachment => (
            "attachment".to_string(),
            locale.attachment_label(),
            escape(raw),
        ),
        JournalDetailKind::Attribute => {
            let key = detail
                .prop_key
                .strip_suffix("_id")
                .unwrap_or(&detail.prop_key)
                .to_string();
            let title = if key == "parent" {
                locale.field_label("parent_issue")
            } else {
                locale.field_label(&key)
            };
            (key, title, escape(raw))
        }
    };

    match key.as_str() {
        "title" | "subject" | "description" => return None,
        "tracker" => value = resolved_name(raw, |id| directory.tracker_name(id)),
        "project" => value = resolved_name(raw, |id| directory.project(id).map(|p| p.name)),
        "status" => value = resolved_name(raw, |id| directory.status_name(id)),
        "priority" => value = resolved_name(raw, |id| directory.priority_name(id)),
        "category" => value = resolved_name(raw, |id| directory.category_name(id)),
        "assigned_to" => value = resolved_name(raw, |id| directory.user_name(id)),
        "fixed_version" => value = resolved_name(raw, |id| directory.version_name(id)),
        "attachment" => {
            // prop_key carries the attachment id; on a miss the escaped
            // filename from above stands
            if let Some(attachment) = parse_id(&detail.prop_key).and_then(|id| directory.attachment(id)) {
                let url = router.attachment_url(&attachment);
                value = format!("[{}]({})", escape(&attachment.filename), url);
            }
        }
        "parent" => {
            if let Some(issue) = parse_id(raw).and_then(|id| directory.issue(id)) {
                let url = router.issue_url(&issue);
                value = format!("[{}]({})", escape(&issue.to_string()), url);
            }
        }
        _ => {}
    }

    if value.is_empty() {
        value = "-".to_string();
    }
    Some((title, value))
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// Re-resolve a raw id to its referent's display name; a miss is blank
fn resolved_name(raw: &str, lookup: impl Fn(u64) -> Option<String>) -> String {
    parse_id(raw)
        .and_then(lookup)
        .map(|name| escape(&name))
        .unwrap_or_default()
}
