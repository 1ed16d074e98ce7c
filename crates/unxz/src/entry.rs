use std::io::Read;
use std::path::{Path, PathBuf};

use tar::EntryType;

use crate::error::{Error, Result};

/// What an archive entry materializes as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Target is a root-relative archive name.
    HardLink { target: PathBuf },
    /// Target is stored and written verbatim.
    Symlink { target: PathBuf },
    GlobalHeader,
    Unsupported(u8),
}

impl EntryKind {
    /// Map a tar type flag onto a kind.
    ///
    /// `link_name` is only consulted for link types, which fail with
    /// [`Error::MissingLinkTarget`] when it is absent.
    pub fn from_header(
        entry_type: EntryType,
        name: &Path,
        link_name: Option<PathBuf>,
    ) -> Result<Self> {
        let link_target = |link_name: Option<PathBuf>| {
            link_name.ok_or_else(|| Error::MissingLinkTarget {
                entry: name.to_path_buf(),
            })
        };

        Ok(match entry_type {
            EntryType::Directory => Self::Directory,
            EntryType::Regular => Self::File,
            EntryType::Link => Self::HardLink {
                target: link_target(link_name)?,
            },
            EntryType::Symlink => Self::Symlink {
                target: link_target(link_name)?,
            },
            EntryType::XGlobalHeader => Self::GlobalHeader,
            other => Self::Unsupported(other.as_byte()),
        })
    }
}

/// An entry read from the archive but not yet written.
pub struct PendingEntry<R> {
    pub name: PathBuf,
    pub kind: EntryKind,
    pub mode: Option<u32>,
    pub size: u64,
    pub reader: R,
}

impl<R: Read> PendingEntry<R> {
    pub fn new(name: impl Into<PathBuf>, kind: EntryKind, reader: R) -> Self {
        Self {
            name: name.into(),
            kind,
            mode: None,
            size: 0,
            reader,
        }
    }

    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}

impl<'a, R: Read + 'a> PendingEntry<tar::Entry<'a, R>> {
    /// Read the header of a tar entry, keeping the entry itself as the
    /// content reader.
    pub fn from_tar(entry: tar::Entry<'a, R>) -> Result<Self> {
        let name = entry
            .path()
            .map_err(|source| Error::InvalidPath { source })?
            .into_owned();

        let header = entry.header();
        let entry_type = header.entry_type();
        let mode = header.mode().map_err(Error::corrupted)?;
        let size = header.size().unwrap_or(0);

        let link_name = match entry_type {
            EntryType::Link | EntryType::Symlink => entry
                .link_name()
                .map_err(|source| Error::InvalidPath { source })?
                .map(|target| target.into_owned()),
            _ => None,
        };
        let kind = EntryKind::from_header(entry_type, &name, link_name)?;

        Ok(Self {
            name,
            kind,
            mode: Some(mode),
            size,
            reader: entry,
        })
    }
}
