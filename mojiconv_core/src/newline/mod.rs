use std::fmt;
use std::str::FromStr;

mod classify;
mod rewrite;

pub use classify::classify_newline;
pub use rewrite::rewrite_newline;

use crate::ConvertError;

/// Newline style detected in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineKind {
    /// No line terminators at all
    None,
    /// Line Feed (Unix/Linux/macOS) - \n
    Lf,
    /// Carriage Return (old macOS) - \r
    Cr,
    /// Carriage Return + Line Feed (Windows) - \r\n
    Crlf,
    /// Line Feed + Carriage Return; recognized but anomalous
    Lfcr,
    /// Two or more distinct terminator styles co-occur
    Mix,
}

impl fmt::Display for NewlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewlineKind::None => write!(f, "NONE"),
            NewlineKind::Lf => write!(f, "LF"),
            NewlineKind::Cr => write!(f, "CR"),
            NewlineKind::Crlf => write!(f, "CRLF"),
            NewlineKind::Lfcr => write!(f, "LFCR"),
            NewlineKind::Mix => write!(f, "MIX"),
        }
    }
}

/// Newline style a conversion may target.
///
/// Deliberately narrower than `NewlineKind`: a rewrite can only aim at
/// one of the three conventional terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineTarget {
    Lf,
    Cr,
    Crlf,
}

impl NewlineTarget {
    /// The terminator sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            NewlineTarget::Lf => "\n",
            NewlineTarget::Cr => "\r",
            NewlineTarget::Crlf => "\r\n",
        }
    }

    /// The classification a text rewritten to this target will have.
    pub fn as_kind(self) -> NewlineKind {
        match self {
            NewlineTarget::Lf => NewlineKind::Lf,
            NewlineTarget::Cr => NewlineKind::Cr,
            NewlineTarget::Crlf => NewlineKind::Crlf,
        }
    }
}

impl fmt::Display for NewlineTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_kind().fmt(f)
    }
}

impl FromStr for NewlineTarget {
    type Err = ConvertError;

    /// Case-insensitive, accepts common alias spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LF" => Ok(NewlineTarget::Lf),
            "CR" => Ok(NewlineTarget::Cr),
            "CRLF" | "CR-LF" | "CR+LF" | "CR LF" => Ok(NewlineTarget::Crlf),
            _ => Err(ConvertError::InvalidNewlineOption(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_str() {
        assert_eq!("lf".parse::<NewlineTarget>(), Ok(NewlineTarget::Lf));
        assert_eq!("CR".parse::<NewlineTarget>(), Ok(NewlineTarget::Cr));
        assert_eq!("cr+lf".parse::<NewlineTarget>(), Ok(NewlineTarget::Crlf));
        assert_eq!("CR LF".parse::<NewlineTarget>(), Ok(NewlineTarget::Crlf));
        assert_eq!(
            "lfcr".parse::<NewlineTarget>(),
            Err(ConvertError::InvalidNewlineOption("lfcr".to_string()))
        );
    }

    #[test]
    fn test_target_terminators() {
        assert_eq!(NewlineTarget::Lf.as_str(), "\n");
        assert_eq!(NewlineTarget::Cr.as_str(), "\r");
        assert_eq!(NewlineTarget::Crlf.as_str(), "\r\n");
    }
}
