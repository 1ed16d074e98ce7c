use std::io::{self, Read, Seek};

/// Stream header magic of the xz container format.
pub const XZ_MAGIC: [u8; 6] = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];

pub fn is_xz(data: &[u8]) -> bool {
    data.starts_with(&XZ_MAGIC)
}

/// Peek at the start of `reader` and rewind it.
///
/// Sources shorter than the magic are reported as not xz rather than as an
/// unexpected end of file.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = Vec::with_capacity(XZ_MAGIC.len());
    reader.by_ref().take(XZ_MAGIC.len() as u64).read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(is_xz(&header))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn detect_xz_magic() {
        let data = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, 0x00, 0x04];
        assert!(is_xz(&data));
    }

    #[test]
    fn reject_gzip_magic() {
        assert!(!is_xz(&[0x1F, 0x8B, 0x08, 0x00]));
    }

    #[test]
    fn short_input_is_not_xz() {
        let mut cursor = Cursor::new(vec![0xFD, 0x37]);
        assert!(!detect_from_reader(&mut cursor).unwrap());
    }

    #[test]
    fn detection_rewinds_reader() {
        let mut cursor = Cursor::new(XZ_MAGIC.to_vec());
        assert!(detect_from_reader(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 0);
    }
}
