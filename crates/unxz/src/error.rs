use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open archive '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("source is not an xz stream")]
    NotXz,

    #[error("archive is corrupted: {source}")]
    Corrupted { source: io::Error },

    #[error("entry path is not valid: {source}")]
    InvalidPath { source: io::Error },

    #[error("link entry '{entry}' has no target")]
    MissingLinkTarget { entry: PathBuf },

    #[error("invalid tar header type {flag:#04x} for entry '{entry}'")]
    InvalidHeaderType { entry: PathBuf, flag: u8 },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to set permissions on '{path}': {source}")]
    PermissionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create symlink '{link}' -> '{target}': {source}")]
    SymlinkCreationFailed {
        target: PathBuf,
        link: PathBuf,
        source: io::Error,
    },

    #[error("failed to create hard link '{link}' -> '{target}': {source}")]
    HardlinkCreationFailed {
        target: PathBuf,
        link: PathBuf,
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn corrupted(source: io::Error) -> Self {
        Self::Corrupted { source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
