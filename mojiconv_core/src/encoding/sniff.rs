//! Charset sniffing heuristic.
//!
//! Kept behind a single function so the underlying heuristic can be
//! swapped without touching the canonicalization rules in the detector.

/// Raw sniffing outcome, before canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Ascii,
    Utf8,
    Sjis,
    EucJp,
}

/// Best-effort charset guess for a byte buffer.
///
/// ASCII and UTF-8 are recognized by validation; the Shift_JIS vs
/// EUC-JP call is delegated to a statistical detector. `None` means
/// the buffer fits none of the supported charsets.
pub fn sniff(bytes: &[u8]) -> Option<Charset> {
    if bytes.iter().all(|&b| b < 0x80) {
        return Some(Charset::Ascii);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(Charset::Utf8);
    }

    let mut detector = shift_or_euc::Detector::new(false);
    match detector.feed(bytes, true) {
        Some(encoding) if encoding == encoding_rs::SHIFT_JIS => Some(Charset::Sjis),
        Some(encoding) if encoding == encoding_rs::EUC_JP => Some(Charset::EucJp),
        _ => None,
    }
}
