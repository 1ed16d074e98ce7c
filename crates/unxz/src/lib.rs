//! Extraction of `.tar.xz` archives.
//!
//! # Architecture
//!
//! - `format.rs` - xz stream detection
//! - `path.rs` - Destination path resolution and leading-component stripping
//! - `entry.rs` - Entry kinds and pending entries read from the tar stream
//! - `permissions.rs` - Best-effort mode application
//! - `extract/` - Entry materialization, deferred hard links, orchestration
//! - `options.rs`, `report.rs` - Configuration and extraction summary

pub use entry::{EntryKind, PendingEntry};
pub use error::{Error, Result};
pub use extract::{DeferredLink, LinkQueue, Unxz, extract_from_reader, write_entry};
pub use options::{ExtractOptions, Progress};
pub use path::{resolve_entry_path, strip_leading_component};
pub use permissions::MODE_BITS_SUPPORTED;
pub use report::{ExtractReport, ExtractedEntry};

pub mod entry;
mod error;
pub mod extract;
pub mod format;
pub mod options;
mod path;
mod permissions;
mod report;
