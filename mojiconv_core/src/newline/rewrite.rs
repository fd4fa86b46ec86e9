//! Newline rewriting.

use super::NewlineTarget;

/// Replace every line terminator with the target sequence.
///
/// Matching is leftmost-longest: a CRLF or LFCR pair is consumed as one
/// unit and never split into two single-character replacements. Content
/// between terminators is copied through untouched. Rewriting
/// already-normalized text with the same target is a no-op.
pub fn rewrite_newline(text: &str, target: NewlineTarget) -> String {
    let terminator = target.as_str();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\r' && b != b'\n' {
            i += 1;
            continue;
        }
        // Terminators are ASCII, so these slice bounds are char boundaries
        out.push_str(&text[start..i]);
        out.push_str(terminator);
        let paired = i + 1 < bytes.len()
            && ((b == b'\r' && bytes[i + 1] == b'\n') || (b == b'\n' && bytes[i + 1] == b'\r'));
        i += if paired { 2 } else { 1 };
        start = i;
    }
    out.push_str(&text[start..]);
    out
}
