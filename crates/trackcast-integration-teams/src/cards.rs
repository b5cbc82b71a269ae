//! Card Payload Building
//!
//! Teams accepts two wire formats: the legacy MessageCard (Office 365
//! connector URLs, which contain "webhook") and the Adaptive Card envelope
//! (workflow URLs). The format is decided once per send from the
//! destination URL, then the message is rendered into typed serde structs.

use serde::Serialize;
use serde_json::Value;

use trackcast::domain::entities::{NotificationMessage, TextSegment};
use trackcast::domain::errors::NotifyError;

/// Which wire format a destination accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormat {
    /// Legacy Office 365 connector payload
    MessageCard,
    /// Adaptive Card 1.2 inside a message envelope
    AdaptiveCard,
}

impl CardFormat {
    /// Decide the format from the destination URL
    pub fn for_destination(url: &str) -> Self {
        if url.to_lowercase().contains("webhook") {
            Self::MessageCard
        } else {
            Self::AdaptiveCard
        }
    }
}

/// Render a notification message into the wire payload for `format`
pub fn build_payload(
    message: &NotificationMessage,
    format: CardFormat,
) -> Result<Value, NotifyError> {
    let payload = match format {
        CardFormat::MessageCard => serde_json::to_value(message_card(message))?,
        CardFormat::AdaptiveCard => serde_json::to_value(adaptive_envelope(message))?,
    };
    Ok(payload)
}

// ---- legacy MessageCard ----

#[derive(Debug, Serialize)]
struct MessageCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Section {
    Text { text: String },
    Facts { facts: Vec<Fact> },
}

#[derive(Debug, Serialize)]
struct Fact {
    name: String,
    value: String,
}

fn message_card(message: &NotificationMessage) -> MessageCard {
    let mut sections: Vec<Section> = message
        .segments
        .iter()
        .map(|segment| Section::Text {
            text: segment.text().to_string(),
        })
        .collect();

    if !message.fields.is_empty() {
        sections.push(Section::Facts {
            facts: message
                .fields
                .iter()
                .map(|(name, value)| Fact {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        });
    }

    MessageCard {
        title: non_empty(&message.title),
        text: non_empty(&message.text),
        sections,
    }
}

// ---- Adaptive Card ----

#[derive(Debug, Serialize)]
struct CardEnvelope {
    #[serde(rename = "type")]
    kind: &'static str,
    attachments: Vec<CardAttachment>,
}

#[derive(Debug, Serialize)]
struct CardAttachment {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    content: AdaptiveCard,
}

#[derive(Debug, Serialize)]
struct AdaptiveCard {
    #[serde(rename = "type")]
    kind: &'static str,
    version: &'static str,
    body: Vec<CardBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum CardBlock {
    TextBlock {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        wrap: Option<bool>,
    },
    FactSet {
        facts: Vec<AdaptiveFact>,
    },
}

#[derive(Debug, Serialize)]
struct AdaptiveFact {
    title: String,
    value: String,
}

fn adaptive_envelope(message: &NotificationMessage) -> CardEnvelope {
    let mut body = Vec::new();

    if let Some(title) = non_empty(&message.title) {
        body.push(CardBlock::TextBlock {
            text: title,
            weight: Some("Bolder"),
            size: Some("Medium"),
            wrap: None,
        });
    }
    if let Some(text) = non_empty(&message.text) {
        body.push(CardBlock::TextBlock {
            text,
            weight: None,
            size: None,
            wrap: Some(true),
        });
    }

    // Only plain segments surface here; code blocks are dropped on this
    // path (the connector path renders every segment)
    let plain: String = message
        .segments
        .iter()
        .filter(|segment| segment.is_plain())
        .map(TextSegment::text)
        .collect();
    if !plain.is_empty() {
        body.push(CardBlock::TextBlock {
            text: plain,
            weight: None,
            size: None,
            wrap: Some(true),
        });
    }

    if !message.fields.is_empty() {
        body.push(CardBlock::FactSet {
            facts: message
                .fields
                .iter()
                .map(|(title, value)| AdaptiveFact {
                    title: title.clone(),
                    value: value.clone(),
                })
                .collect(),
        });
    }

    CardEnvelope {
        kind: "message",
        attachments: vec![CardAttachment {
            content_type: "application/vnd.microsoft.card.adaptive",
            content: AdaptiveCard {
                kind: "AdaptiveCard",
                version: "1.2",
                body,
            },
        }],
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}
