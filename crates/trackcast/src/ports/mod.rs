//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the notification engine interacts
//! with its external collaborators: the host's persistence layer, its URL
//! routing and localization services, and the outbound HTTP transport.
//!
//! Implementations of these traits live in integration crates.

pub mod directory;
pub mod locale;
pub mod router;
pub mod sink;

// Re-exports
pub use directory::*;
pub use locale::*;
pub use router::*;
pub use sink::*;
