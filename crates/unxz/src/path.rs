use std::path::{Path, PathBuf};

/// Drop everything up to and including the first `/` of an entry name.
///
/// Names without a `/` come back unchanged, so a top-level file stays at the
/// destination root. A bare wrapper directory (`pkg/`) becomes empty and
/// therefore resolves to the destination root itself.
pub fn strip_leading_component(name: &Path) -> PathBuf {
    if !name.as_os_str().as_encoded_bytes().contains(&b'/') {
        return name.to_path_buf();
    }
    let mut components = name.components();
    components.next();
    components.as_path().to_path_buf()
}

/// Compute where an archive entry lands under `destination`.
///
/// The name is joined as stored; `..` segments and absolute names are not
/// rewritten.
pub fn resolve_entry_path(name: &Path, destination: &Path, strip: bool) -> PathBuf {
    if strip {
        destination.join(strip_leading_component(name))
    } else {
        destination.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest() -> &'static Path {
        Path::new("out")
    }

    #[test]
    fn join_without_stripping() {
        let resolved = resolve_entry_path(Path::new("pkg/a.txt"), dest(), false);
        assert_eq!(resolved, Path::new("out/pkg/a.txt"));
    }

    #[test]
    fn strip_wrapper_folder() {
        let resolved = resolve_entry_path(Path::new("pkgname/a.txt"), dest(), true);
        assert_eq!(resolved, Path::new("out/a.txt"));
    }

    #[test]
    fn strip_keeps_names_without_slash() {
        let resolved = resolve_entry_path(Path::new("a.txt"), dest(), true);
        assert_eq!(resolved, Path::new("out/a.txt"));
    }

    #[test]
    fn strip_only_first_segment() {
        assert_eq!(
            strip_leading_component(Path::new("pkg/dir/dir/e.txt")),
            Path::new("dir/dir/e.txt")
        );
    }

    #[test]
    fn strip_bare_wrapper_directory() {
        assert_eq!(strip_leading_component(Path::new("pkg/")), Path::new(""));
        assert_eq!(
            resolve_entry_path(Path::new("pkg/"), dest(), true),
            dest().join("")
        );
    }

    #[test]
    fn parent_segments_are_not_normalized() {
        let resolved = resolve_entry_path(Path::new("dir/../x.txt"), dest(), false);
        assert_eq!(resolved, Path::new("out/dir/../x.txt"));
    }
}
