use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::entry::{EntryKind, PendingEntry};
use crate::error::{Error, Result};
use crate::options::ExtractOptions;
use crate::path::resolve_entry_path;
use crate::permissions::apply_mode;
use crate::report::ExtractedEntry;

use super::links::LinkQueue;

/// Write one entry under `destination`.
///
/// Hard links are only recorded in `links`; global headers produce nothing
/// and yield `None`.
pub fn write_entry<R: Read>(
    pending: &mut PendingEntry<R>,
    destination: &Path,
    options: &ExtractOptions,
    links: &mut LinkQueue,
) -> Result<Option<ExtractedEntry>> {
    let strip = options.strip_leading_component;
    let target_path = resolve_entry_path(&pending.name, destination, strip);

    let size = match &pending.kind {
        EntryKind::Directory => {
            ensure_directory(&target_path)?;
            0
        }
        EntryKind::File => {
            let mode = pending.mode.filter(|_| options.preserve_permissions);
            write_file(&mut pending.reader, &target_path, mode)?
        }
        EntryKind::HardLink { target } => {
            links.defer(target_path.clone(), resolve_entry_path(target, destination, strip));
            0
        }
        EntryKind::Symlink { target } => {
            write_symlink(target, &target_path)?;
            0
        }
        EntryKind::GlobalHeader => {
            tracing::debug!(entry = %pending.name.display(), "skipping global extended header");
            return Ok(None);
        }
        EntryKind::Unsupported(flag) => {
            return Err(Error::InvalidHeaderType {
                entry: pending.name.clone(),
                flag: *flag,
            });
        }
    };

    tracing::debug!(entry = %pending.name.display(), path = %target_path.display(), kind = ?pending.kind, "extracted entry");

    Ok(Some(ExtractedEntry {
        original_path: pending.name.clone(),
        target_path,
        kind: pending.kind.clone(),
        size,
        mode: pending.mode,
    }))
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(reader: &mut impl Read, target_path: &Path, mode: Option<u32>) -> Result<u64> {
    ensure_parent(target_path)?;

    let extraction_failed = |source: io::Error| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source,
    };

    let mut file = File::create(target_path).map_err(extraction_failed)?;

    // Read failures come from the decoder, not the destination.
    let mut buffer = [0u8; 8192];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::corrupted(e)),
        };
        file.write_all(&buffer[..n]).map_err(extraction_failed)?;
        written += n as u64;
    }

    if let Some(mode) = mode {
        apply_mode(&file, target_path, mode)?;
    }

    Ok(written)
}

#[cfg(unix)]
fn write_symlink(target: &Path, link: &Path) -> Result<()> {
    ensure_parent(link)?;
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::SymlinkCreationFailed {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source: e,
    })
}

#[cfg(windows)]
fn write_symlink(target: &Path, link: &Path) -> Result<()> {
    use std::os::windows::fs::{symlink_dir, symlink_file};

    ensure_parent(link)?;
    let resolved = link.parent().map(|p| p.join(target)).unwrap_or_else(|| target.to_path_buf());
    let is_dir_target = resolved.is_dir() || target.to_string_lossy().ends_with('/');
    let result = if is_dir_target {
        symlink_dir(target, link)
    } else {
        symlink_file(target, link)
    };
    result.map_err(|e| Error::SymlinkCreationFailed {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source: e,
    })
}
