//! The conversion pipeline: detect, decode, classify, plan, rewrite,
//! encode. All pure computation over in-memory buffers; file I/O stays
//! with the caller.

use crate::codec;
use crate::encoding::{EncodingKind, detect_encoding};
use crate::newline::{NewlineKind, classify_newline, rewrite_newline};
use crate::plan::{ConversionRequest, plan};
use crate::{ConvertError, ConvertResult};

/// Detected encoding and newline style of a buffer, without conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    pub encoding: EncodingKind,
    pub newline: NewlineKind,
}

/// The terminal artifact of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source_encoding: EncodingKind,
    pub source_newline: NewlineKind,
    pub output_encoding: EncodingKind,
    pub output_newline: NewlineKind,
    /// The exact bytes to persist.
    pub bytes: Vec<u8>,
}

/// Detect the encoding and newline style of a buffer.
pub fn inspect(bytes: &[u8]) -> ConvertResult<Inspection> {
    let encoding = detect_encoding(bytes)?;
    let text = codec::decode(bytes, encoding);
    let newline = classify_newline(&text);
    Ok(Inspection { encoding, newline })
}

/// Convert a buffer to the requested encoding/newline pair.
///
/// Either a full report comes back or the call fails before any bytes
/// are produced; there is no partial output. `NoConversionNeeded` is
/// returned when both axes already match the request — callers decide
/// whether that is a success or a soft failure.
pub fn convert(bytes: &[u8], request: &ConversionRequest) -> ConvertResult<ConversionReport> {
    let source_encoding = detect_encoding(bytes)?;
    let text = codec::decode(bytes, source_encoding);
    let source_newline = classify_newline(&text);

    let plan = plan(source_encoding, source_newline, request);
    if plan.is_noop() {
        return Err(ConvertError::NoConversionNeeded {
            encoding: source_encoding,
            newline: source_newline,
        });
    }

    let output_text = if plan.needs_newline_change {
        rewrite_newline(&text, request.newline)
    } else {
        text
    };
    let output_newline = if plan.needs_newline_change {
        request.newline.as_kind()
    } else {
        source_newline
    };
    let output_bytes = codec::encode(&output_text, request.encoding)?;

    Ok(ConversionReport {
        source_encoding,
        source_newline,
        output_encoding: request.encoding,
        output_newline,
        bytes: output_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newline::NewlineTarget;

    fn request(encoding: EncodingKind, newline: NewlineTarget) -> ConversionRequest {
        ConversionRequest { encoding, newline }
    }

    #[test]
    fn test_inspect_utf8_lf() {
        let inspection = inspect(b"a\nb\nc").unwrap();
        assert_eq!(inspection.encoding, EncodingKind::Utf8);
        assert_eq!(inspection.newline, NewlineKind::Lf);
    }

    #[test]
    fn test_inspect_utf8_bom_crlf() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"a\r\nb");
        let inspection = inspect(&bytes).unwrap();
        assert_eq!(inspection.encoding, EncodingKind::Utf8Bom);
        assert_eq!(inspection.newline, NewlineKind::Crlf);
    }

    #[test]
    fn test_inspect_empty_fails() {
        assert_eq!(inspect(&[]), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_convert_sjis_cr_to_utf8_lf() {
        let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("日本語あ\r日本語い");
        let report = convert(&bytes, &request(EncodingKind::Utf8, NewlineTarget::Lf)).unwrap();
        assert_eq!(report.source_encoding, EncodingKind::Sjis);
        assert_eq!(report.source_newline, NewlineKind::Cr);
        assert_eq!(report.output_encoding, EncodingKind::Utf8);
        assert_eq!(report.output_newline, NewlineKind::Lf);
        assert_eq!(report.bytes, "日本語あ\n日本語い".as_bytes());
    }

    #[test]
    fn test_convert_lfcr_source_always_rewrites() {
        let report = convert(b"x\n\ry", &request(EncodingKind::Utf8, NewlineTarget::Lf)).unwrap();
        assert_eq!(report.source_newline, NewlineKind::Lfcr);
        assert_eq!(report.bytes, b"x\ny");
    }

    #[test]
    fn test_convert_to_utf8_bom_prepends_bom() {
        let report = convert(
            b"a\nb",
            &request(EncodingKind::Utf8Bom, NewlineTarget::Lf),
        )
        .unwrap();
        assert_eq!(&report.bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&report.bytes[3..], b"a\nb");
    }

    #[test]
    fn test_convert_noop_is_signaled() {
        assert_eq!(
            convert(b"a\nb", &request(EncodingKind::Utf8, NewlineTarget::Lf)),
            Err(ConvertError::NoConversionNeeded {
                encoding: EncodingKind::Utf8,
                newline: NewlineKind::Lf,
            })
        );
    }

    #[test]
    fn test_convert_no_lines_source_matches_any_newline() {
        assert_eq!(
            convert(b"no lines", &request(EncodingKind::Utf8, NewlineTarget::Crlf)),
            Err(ConvertError::NoConversionNeeded {
                encoding: EncodingKind::Utf8,
                newline: NewlineKind::None,
            })
        );
    }

    #[test]
    fn test_convert_output_reconverts_as_noop() {
        let req = request(EncodingKind::Sjis, NewlineTarget::Crlf);
        let report = convert("日本語あ\n日本語い".as_bytes(), &req).unwrap();
        // Running the same request on the converted output is a no-op
        assert_eq!(
            convert(&report.bytes, &req),
            Err(ConvertError::NoConversionNeeded {
                encoding: EncodingKind::Sjis,
                newline: NewlineKind::Crlf,
            })
        );
    }

    #[test]
    fn test_convert_unmappable_character_fails_without_output() {
        assert_eq!(
            convert("sushi 🍣\n".as_bytes(), &request(EncodingKind::Sjis, NewlineTarget::Crlf)),
            Err(ConvertError::UnsupportedCharacter(EncodingKind::Sjis))
        );
    }
}
