//! Conversion planning: compare detected state against the request.

use crate::encoding::EncodingKind;
use crate::newline::{NewlineKind, NewlineTarget};

/// A validated conversion target, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub encoding: EncodingKind,
    pub newline: NewlineTarget,
}

/// What a conversion actually has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPlan {
    pub needs_encoding_change: bool,
    pub needs_newline_change: bool,
}

impl ConversionPlan {
    /// Neither axis needs work.
    pub fn is_noop(self) -> bool {
        !self.needs_encoding_change && !self.needs_newline_change
    }
}

/// Decide what work a conversion needs. Pure decision logic, no failure
/// path.
///
/// A source with no line breaks is compatible with any target newline.
/// `Mix` and `Lfcr` sources can never equal a target, so they always
/// get a rewrite.
pub fn plan(
    source_encoding: EncodingKind,
    source_newline: NewlineKind,
    request: &ConversionRequest,
) -> ConversionPlan {
    ConversionPlan {
        needs_encoding_change: source_encoding != request.encoding,
        needs_newline_change: source_newline != NewlineKind::None
            && source_newline != request.newline.as_kind(),
    }
}
