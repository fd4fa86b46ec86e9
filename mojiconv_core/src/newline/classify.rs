//! Newline classification by position-wise pattern counts.

use super::NewlineKind;

/// Classify the newline style of a text.
///
/// Total function: every string, including the empty string, maps to
/// exactly one kind. Four pattern categories are counted over the whole
/// text — isolated LF, isolated CR, CRLF pairs and LFCR pairs — where
/// "isolated" means not immediately adjacent to the other terminator
/// character (text boundaries count as not adjacent). A text showing
/// exactly one category gets that kind; two or more co-occurring
/// categories classify as `Mix`.
pub fn classify_newline(text: &str) -> NewlineKind {
    // Terminators are ASCII, so byte positions are scalar positions.
    let bytes = text.as_bytes();
    let mut lone_lf = 0usize;
    let mut lone_cr = 0usize;
    let mut crlf = 0usize;
    let mut lfcr = 0usize;

    for i in 0..bytes.len() {
        match bytes[i] {
            b'\n' => {
                let cr_before = i > 0 && bytes[i - 1] == b'\r';
                let cr_after = i + 1 < bytes.len() && bytes[i + 1] == b'\r';
                if cr_after {
                    lfcr += 1;
                }
                if !cr_before && !cr_after {
                    lone_lf += 1;
                }
            }
            b'\r' => {
                let lf_before = i > 0 && bytes[i - 1] == b'\n';
                let lf_after = i + 1 < bytes.len() && bytes[i + 1] == b'\n';
                if lf_after {
                    crlf += 1;
                }
                if !lf_before && !lf_after {
                    lone_cr += 1;
                }
            }
            _ => {}
        }
    }

    let nonzero = [lone_lf, lone_cr, crlf, lfcr]
        .iter()
        .filter(|&&count| count > 0)
        .count();
    match nonzero {
        0 => NewlineKind::None,
        1 if lone_lf > 0 => NewlineKind::Lf,
        1 if lone_cr > 0 => NewlineKind::Cr,
        1 if crlf > 0 => NewlineKind::Crlf,
        1 => NewlineKind::Lfcr,
        _ => NewlineKind::Mix,
    }
}
