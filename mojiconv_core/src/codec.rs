//! Byte <-> string conversion for the four canonical encodings.
//!
//! Shift_JIS and EUC-JP go through encoding_rs' static code-page tables;
//! UTF-8 goes through the standard library.

use crate::bom::{UTF8_BOM, strip_utf8_bom};
use crate::encoding::EncodingKind;
use crate::{ConvertError, ConvertResult};

/// Decode raw bytes into a string.
///
/// `Utf8Bom` strips exactly one leading BOM; plain `Utf8` keeps any
/// U+FEFF it happens to contain. Malformed sequences decode to U+FFFD
/// rather than failing, matching the best-effort nature of detection.
pub fn decode(bytes: &[u8], encoding: EncodingKind) -> String {
    match encoding {
        EncodingKind::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        EncodingKind::Utf8Bom => String::from_utf8_lossy(strip_utf8_bom(bytes)).into_owned(),
        EncodingKind::Sjis => decode_with(encoding_rs::SHIFT_JIS, bytes),
        EncodingKind::EucJp => decode_with(encoding_rs::EUC_JP, bytes),
    }
}

fn decode_with(table: &'static encoding_rs::Encoding, bytes: &[u8]) -> String {
    let (text, _had_errors) = table.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encode a string into raw bytes in the given encoding.
///
/// Fails with `UnsupportedCharacter` when the target code page has no
/// mapping for a character in the text; output is all-or-nothing.
/// Encoding to `Utf8Bom` prepends the 3-byte BOM.
pub fn encode(text: &str, encoding: EncodingKind) -> ConvertResult<Vec<u8>> {
    match encoding {
        EncodingKind::Utf8 => Ok(text.as_bytes().to_vec()),
        EncodingKind::Utf8Bom => {
            let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
            bytes.extend_from_slice(&UTF8_BOM);
            bytes.extend_from_slice(text.as_bytes());
            Ok(bytes)
        }
        EncodingKind::Sjis => encode_with(encoding_rs::SHIFT_JIS, text, encoding),
        EncodingKind::EucJp => encode_with(encoding_rs::EUC_JP, text, encoding),
    }
}

fn encode_with(
    table: &'static encoding_rs::Encoding,
    text: &str,
    encoding: EncodingKind,
) -> ConvertResult<Vec<u8>> {
    let (bytes, _, had_unmappable) = table.encode(text);
    if had_unmappable {
        return Err(ConvertError::UnsupportedCharacter(encoding));
    }
    Ok(bytes.into_owned())
}
