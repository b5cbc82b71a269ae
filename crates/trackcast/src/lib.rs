//! Trackcast Domain Library
//!
//! Core domain types and interfaces for the trackcast notification engine:
//! formatting project-management events (issues, wiki pages, changesets)
//! into chat messages and delivering them to incoming-webhook endpoints.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure domain models and logic
//!   - `entities/`: Read-only input models (Project, Issue, Journal, WikiPage,
//!     Changeset) and the notification message model
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `ReferenceDirectory`: read-only id lookups against the host's store
//!   - `ObjectRouter`: fully-qualified object URLs
//!   - `Localizer`: localized labels and message templates
//!   - `NotificationSink`: outbound payload delivery
//!
//! Integration crates (e.g. trackcast-integration-teams) implement the
//! formatting and delivery against these ports.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Attachment, Changeset, CustomField, CustomFieldValue, Fields, HookEvent, Issue, Journal,
    JournalDetail, JournalDetailKind, NotificationMessage, NotifyError, Project, TextSegment,
    WikiPage,
};
pub use ports::{DefaultLocale, Localizer, NotificationSink, ObjectRouter, ReferenceDirectory};
