//! Extraction pipeline for `.tar.xz` archives.
//!
//! Entries are written in stream order. Hard links are queued and created
//! only after the last entry, so a link may appear before its target.
//! Nothing is rolled back on failure: whatever was written stays on disk.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use xz2::read::XzDecoder;

use crate::entry::PendingEntry;
use crate::error::{Error, Result};
use crate::format;
use crate::options::{ExtractOptions, Progress};
use crate::report::ExtractReport;

mod links;
mod materialize;

pub use links::{DeferredLink, LinkQueue};
pub use materialize::write_entry;

/// One extraction of an archive on disk into a destination directory.
#[derive(Clone)]
pub struct Unxz {
    source: PathBuf,
    destination: PathBuf,
    options: ExtractOptions,
}

impl Unxz {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strip_leading_component(mut self, strip: bool) -> Self {
        self.options.strip_leading_component = strip;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn extract(&self) -> Result<ExtractReport> {
        let file = File::open(&self.source).map_err(|source| Error::Open {
            path: self.source.clone(),
            source,
        })?;
        tracing::debug!(source = %self.source.display(), "opened archive");

        extract_from_reader(BufReader::new(file), &self.destination, &self.options)
    }
}

/// Extract an xz-compressed tar stream into `destination`.
///
/// The stream is checked for the xz magic before the destination is created.
pub fn extract_from_reader<R: Read + Seek>(
    mut reader: R,
    destination: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    if !format::detect_from_reader(&mut reader)? {
        return Err(Error::NotXz);
    }

    std::fs::create_dir_all(destination).map_err(|e| Error::DirectoryCreationFailed {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut archive = tar::Archive::new(XzDecoder::new(reader));
    let mut links = LinkQueue::new();
    let mut report = ExtractReport::new(destination);

    for entry in archive.entries().map_err(Error::corrupted)? {
        let entry = entry.map_err(Error::corrupted)?;
        let mut pending = PendingEntry::from_tar(entry)?;

        let Some(extracted) = materialize::write_entry(&mut pending, destination, options, &mut links)?
        else {
            continue;
        };
        report.record(extracted);

        options.report_progress(|| Progress {
            entries_processed: report.entry_count,
            bytes_processed: report.total_bytes,
            current_file: Some(pending.name.clone()),
        });
    }

    tracing::debug!(count = links.len(), "resolving deferred hard links");
    report.hard_links = links.resolve()?;

    tracing::info!(
        destination = %destination.display(),
        entries = report.entry_count,
        bytes = report.total_bytes,
        hard_links = report.hard_links,
        "extraction finished"
    );
    Ok(report)
}
