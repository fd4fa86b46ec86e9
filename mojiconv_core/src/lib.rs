//! # mojiconv_core - Encoding and newline conversion core
//!
//! Detects the character encoding and newline style of a raw byte buffer
//! and, on request, re-encodes the content into a different
//! encoding/newline pair, returning an exact byte buffer ready to persist.
//!
//! Modules:
//! - `bom` for UTF-8 BOM handling
//! - `encoding` for charset sniffing and the four canonical kinds
//! - `codec` for byte <-> string conversion
//! - `newline` for newline classification and rewriting
//! - `plan` and `pipeline` for deciding and running a conversion

mod bom;
mod codec;
mod encoding;
mod newline;
mod pipeline;
mod plan;

pub use codec::{decode, encode};
pub use encoding::{EncodingKind, detect_encoding};
pub use newline::{NewlineKind, NewlineTarget, classify_newline, rewrite_newline};
pub use pipeline::{ConversionReport, Inspection, convert, inspect};
pub use plan::{ConversionPlan, ConversionRequest, plan};

use thiserror::Error;

/// Errors that can occur during detection and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Source buffer is zero-length, there is nothing to detect
    #[error("input data is empty")]
    EmptyInput,
    /// Charset sniffing produced something outside the supported set
    #[error("unsupported encoding detected")]
    UnsupportedEncoding,
    /// A character in the source has no representation in the target code page
    #[error("character not representable in {0}")]
    UnsupportedCharacter(EncodingKind),
    /// Unrecognized encoding option string
    #[error("invalid encoding option: {0}")]
    InvalidEncodingOption(String),
    /// Unrecognized newline option string
    #[error("invalid newline option: {0}")]
    InvalidNewlineOption(String),
    /// Source already matches the requested encoding and newline
    #[error("already [{encoding}] [{newline}], no conversion needed")]
    NoConversionNeeded {
        encoding: EncodingKind,
        newline: NewlineKind,
    },
}

/// Result type for detection and conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
