/// UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Check whether the buffer starts with a UTF-8 BOM.
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[..3] == UTF8_BOM
}

/// Strip exactly one leading UTF-8 BOM, if present.
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    if has_utf8_bom(bytes) { &bytes[3..] } else { bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_utf8_bom() {
        assert!(has_utf8_bom(&[0xEF, 0xBB, 0xBF, b'a']));
        assert!(has_utf8_bom(&[0xEF, 0xBB, 0xBF]));
        assert!(!has_utf8_bom(b"abc"));
        assert!(!has_utf8_bom(&[0xEF, 0xBB]));
        assert!(!has_utf8_bom(&[]));
    }

    #[test]
    fn test_strip_utf8_bom() {
        assert_eq!(strip_utf8_bom(&[0xEF, 0xBB, 0xBF, b'a']), b"a");
        assert_eq!(strip_utf8_bom(b"abc"), b"abc");
        // Only the leading BOM is stripped, and only once
        assert_eq!(
            strip_utf8_bom(&[0xEF, 0xBB, 0xBF, 0xEF, 0xBB, 0xBF]),
            &[0xEF, 0xBB, 0xBF]
        );
    }
}
