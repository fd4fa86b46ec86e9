use std::fmt;
use std::str::FromStr;

pub mod sniff;

pub use sniff::{Charset, sniff};

use crate::ConvertError;
use crate::bom::has_utf8_bom;

/// One of the four canonical encodings detection may produce.
///
/// ASCII-only content is folded into `Utf8`; BOM presence is what
/// distinguishes `Utf8Bom` from `Utf8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingKind {
    Utf8,
    Utf8Bom,
    Sjis,
    EucJp,
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingKind::Utf8 => write!(f, "UTF8"),
            EncodingKind::Utf8Bom => write!(f, "UTF8BOM"),
            EncodingKind::Sjis => write!(f, "SJIS"),
            EncodingKind::EucJp => write!(f, "EUCJP"),
        }
    }
}

impl FromStr for EncodingKind {
    type Err = ConvertError;

    /// Case-insensitive, accepts common alias spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UTF8" | "UTF-8" => Ok(EncodingKind::Utf8),
            "UTF8BOM" | "UTF-8BOM" | "UTF8 BOM" | "UTF-8 BOM" => Ok(EncodingKind::Utf8Bom),
            "SJIS" | "SHIFT-JIS" | "SHIFT_JIS" | "SHIFTJIS" => Ok(EncodingKind::Sjis),
            "EUCJP" | "EUC-JP" => Ok(EncodingKind::EucJp),
            _ => Err(ConvertError::InvalidEncodingOption(s.to_string())),
        }
    }
}

/// Detect the canonical encoding of a raw byte buffer.
///
/// The sniffing heuristic yields a raw charset guess; this function
/// applies the canonicalization rules on top of it:
/// - empty input fails with `EmptyInput`
/// - ASCII folds into `Utf8`
/// - `Utf8` with a leading BOM becomes `Utf8Bom`
/// - Shift_JIS and EUC-JP pass through
/// - anything the heuristic cannot place fails with `UnsupportedEncoding`
pub fn detect_encoding(bytes: &[u8]) -> Result<EncodingKind, ConvertError> {
    if bytes.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    match sniff(bytes) {
        Some(Charset::Ascii) => Ok(EncodingKind::Utf8),
        Some(Charset::Utf8) => {
            if has_utf8_bom(bytes) {
                Ok(EncodingKind::Utf8Bom)
            } else {
                Ok(EncodingKind::Utf8)
            }
        }
        Some(Charset::Sjis) => Ok(EncodingKind::Sjis),
        Some(Charset::EucJp) => Ok(EncodingKind::EucJp),
        None => Err(ConvertError::UnsupportedEncoding),
    }
}
