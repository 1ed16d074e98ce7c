use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::materialize::ensure_parent;

/// A hard link waiting for its target to exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredLink {
    pub link: PathBuf,
    pub target: PathBuf,
}

/// Hard links recorded during one extraction, created once the entry stream
/// is drained.
#[derive(Debug, Default)]
pub struct LinkQueue {
    pending: Vec<DeferredLink>,
}

impl LinkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, link: PathBuf, target: PathBuf) {
        tracing::debug!(link = %link.display(), target = %target.display(), "deferring hard link");
        self.pending.push(DeferredLink { link, target });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeferredLink> {
        self.pending.iter()
    }

    /// Create every recorded link in recording order.
    ///
    /// Stops at the first failure; links created before it are left in place.
    pub fn resolve(self) -> Result<usize> {
        let mut created = 0;
        for DeferredLink { link, target } in self.pending {
            create_hard_link(&target, &link)?;
            created += 1;
        }
        Ok(created)
    }
}

fn create_hard_link(target: &Path, link: &Path) -> Result<()> {
    ensure_parent(link)?;
    std::fs::hard_link(target, link).map_err(|source| Error::HardlinkCreationFailed {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source,
    })?;
    tracing::debug!(link = %link.display(), target = %target.display(), "created hard link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn queue_starts_empty() {
        let queue = LinkQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn defer_keeps_recording_order() {
        let mut queue = LinkQueue::new();
        queue.defer("out/dir/c.txt".into(), "out/c.txt".into());
        queue.defer("out/dir/dir/e.txt".into(), "out/dir/e.txt".into());

        let links: Vec<_> = queue.iter().map(|l| l.link.clone()).collect();
        assert_eq!(
            links,
            vec![PathBuf::from("out/dir/c.txt"), PathBuf::from("out/dir/dir/e.txt")]
        );
    }

    #[test]
    fn resolve_creates_links_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("c.txt");
        fs::write(&target, "world").unwrap();

        let mut queue = LinkQueue::new();
        queue.defer(dir.path().join("dir/dir/c.txt"), target.clone());

        assert_eq!(queue.resolve().unwrap(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("dir/dir/c.txt")).unwrap(), "world");
    }

    #[test]
    fn resolve_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("c.txt");
        fs::write(&target, "world").unwrap();

        let mut queue = LinkQueue::new();
        queue.defer(dir.path().join("first.txt"), target.clone());
        queue.defer(dir.path().join("broken.txt"), dir.path().join("missing.txt"));
        queue.defer(dir.path().join("last.txt"), target);

        let err = queue.resolve().unwrap_err();
        assert!(matches!(err, Error::HardlinkCreationFailed { .. }));
        assert!(dir.path().join("first.txt").exists());
        assert!(!dir.path().join("last.txt").exists());
    }
}
