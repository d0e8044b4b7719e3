// error.rs - Idiomatic Rust error type over the raw status codes.

use std::fmt;

use crate::types::*;

/// Error type for the normalization and transformation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeError {
    /// Memory for the output buffer could not be allocated.
    Memory,
    /// Input or output exceeds the signed-size ceiling.
    Overflow,
    /// Ill-formed UTF-8 in the input stream.
    InvalidUtf8,
    /// An unassigned codepoint was rejected (`OPTION_REJECTNA`).
    NotAssigned,
    /// The option combination is not valid.
    InvalidOptions,
    /// Other error not covered by specific variants.
    Other(i32),
}

impl fmt::Display for UnicodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnicodeError::Other(code) => write!(f, "error code {}", code),
            other => f.write_str(errmsg(other.code() as isize)),
        }
    }
}

impl std::error::Error for UnicodeError {}

impl From<i32> for UnicodeError {
    fn from(code: i32) -> Self {
        match code as isize {
            ERR_NOMEM => UnicodeError::Memory,
            ERR_OVERFLOW => UnicodeError::Overflow,
            ERR_INVALIDUTF8 => UnicodeError::InvalidUtf8,
            ERR_NOTASSIGNED => UnicodeError::NotAssigned,
            ERR_INVALIDOPTS => UnicodeError::InvalidOptions,
            _ => UnicodeError::Other(code),
        }
    }
}

impl From<isize> for UnicodeError {
    fn from(code: isize) -> Self {
        UnicodeError::from(code as i32)
    }
}

impl UnicodeError {
    /// Returns the raw status code for this error.
    pub fn code(&self) -> i32 {
        (match self {
            UnicodeError::Memory => ERR_NOMEM,
            UnicodeError::Overflow => ERR_OVERFLOW,
            UnicodeError::InvalidUtf8 => ERR_INVALIDUTF8,
            UnicodeError::NotAssigned => ERR_NOTASSIGNED,
            UnicodeError::InvalidOptions => ERR_INVALIDOPTS,
            UnicodeError::Other(code) => return *code,
        }) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_invalid_utf8() {
        let err = UnicodeError::from(ERR_INVALIDUTF8);
        assert!(matches!(err, UnicodeError::InvalidUtf8));
        assert_eq!(err.code() as isize, ERR_INVALIDUTF8);
        assert_eq!(err.to_string(), "ill-formed UTF-8 in input");
    }

    #[test]
    fn from_memory() {
        let err = UnicodeError::from(ERR_NOMEM);
        assert!(matches!(err, UnicodeError::Memory));
    }

    #[test]
    fn from_unknown_code() {
        let err = UnicodeError::from(-9999);
        assert!(matches!(err, UnicodeError::Other(-9999)));
        assert_eq!(err.to_string(), "error code -9999");
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(UnicodeError::InvalidOptions);
        assert_eq!(err.to_string(), "invalid option combination");
    }
}
