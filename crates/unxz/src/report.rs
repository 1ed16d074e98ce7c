use std::path::PathBuf;

use crate::entry::EntryKind;

/// Summary of one finished extraction.
#[derive(Clone, Debug)]
pub struct ExtractReport {
    pub destination: PathBuf,
    pub entry_count: usize,
    pub total_bytes: u64,
    pub hard_links: usize,
    pub entries: Vec<ExtractedEntry>,
}

#[derive(Clone, Debug)]
pub struct ExtractedEntry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub mode: Option<u32>,
}

impl ExtractReport {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            entry_count: 0,
            total_bytes: 0,
            hard_links: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, entry: ExtractedEntry) {
        self.entry_count += 1;
        self.total_bytes += entry.size;
        self.entries.push(entry);
    }

    pub fn files(&self) -> impl Iterator<Item = &ExtractedEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::File))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind, size: u64) -> ExtractedEntry {
        ExtractedEntry {
            original_path: PathBuf::from(name),
            target_path: PathBuf::from("out").join(name),
            kind,
            size,
            mode: None,
        }
    }

    #[test]
    fn record_accumulates_counts() {
        let mut report = ExtractReport::new("out");
        report.record(entry("a.txt", EntryKind::File, 0));
        report.record(entry("b.txt", EntryKind::File, 5));
        report.record(entry("dir", EntryKind::Directory, 0));

        assert_eq!(report.entry_count, 3);
        assert_eq!(report.total_bytes, 5);
        assert_eq!(report.files().count(), 2);
        assert_eq!(report.hard_links, 0);
    }
}
