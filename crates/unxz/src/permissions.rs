//! Application of tar header modes to extracted files.
//!
//! # Platform Behavior
//!
//! **Unix**: the header's permission bits (including setuid, setgid and sticky)
//! are applied to the open file handle.
//!
//! **Other platforms**: only the write bits are meaningful; a mode without any
//! write bit marks the file read-only. A failure to change permissions there
//! never aborts an extraction.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Whether this platform stores POSIX permission bits.
pub const MODE_BITS_SUPPORTED: bool = cfg!(unix);

const MODE_MASK: u32 = 0o7777;

/// Apply `mode` to an open file, tolerating failures the platform cannot
/// avoid.
pub fn apply_mode(file: &File, path: &Path, mode: u32) -> Result<()> {
    match set_mode(file, mode & MODE_MASK) {
        Ok(()) => Ok(()),
        Err(e) if is_tolerated(&e) => {
            tracing::debug!(path = %path.display(), mode, error = %e, "permission change not supported, skipping");
            Ok(())
        }
        Err(source) => Err(Error::PermissionFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_tolerated(err: &io::Error) -> bool {
    !MODE_BITS_SUPPORTED || err.kind() == io::ErrorKind::Unsupported
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(file: &File, mode: u32) -> io::Result<()> {
    let mut perms = file.metadata()?.permissions();
    perms.set_readonly(mode & 0o222 == 0);
    file.set_permissions(perms)
}
