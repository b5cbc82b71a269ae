//! Notification Message Model
//!
//! The intermediate form between an event and a wire payload: an optional
//! title and body, an ordered list of text segments, and an ordered
//! label/value field mapping. Built fresh per event, immutable once built.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered label -> display value mapping.
///
/// Insertion order is preserved; inserting an existing label overwrites the
/// value in place (last write wins), so a journal touching one property
/// twice yields a single field.
pub type Fields = IndexMap<String, String>;

/// A typed slice of body text.
///
/// Splitting a description on block-quote delimiters yields a sequence of
/// segments whose order reconstructs the body order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TextSegment {
    /// Markup-escaped running text
    Plain(String),
    /// Fenced code text, kept raw
    CodeBlock(String),
}

impl TextSegment {
    /// The rendered text of the segment
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::CodeBlock(text) => text,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

/// A formatted notification, ready for payload building
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub segments: Vec<TextSegment>,
    #[serde(default)]
    pub fields: Fields,
}

impl NotificationMessage {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the body segments
    pub fn with_segments(mut self, segments: Vec<TextSegment>) -> Self {
        self.segments = segments;
        self
    }

    /// Set the field mapping
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
