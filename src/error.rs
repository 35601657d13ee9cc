//! Defines the error types raised by failed checks.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// The category of a failed check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// An unspecified failure. The default for the generic check.
    Generic,
    /// A value did not satisfy the expected shape or type.
    Type,
    /// A value was the `undefined` sentinel.
    Reference,
    /// A value was outside its acceptable range or domain.
    Range,
    /// A caller-named category the engine attaches no meaning to.
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    /// Builds a custom category, e.g. `ErrorKind::custom("SyntaxError")`.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        ErrorKind::Custom(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            ErrorKind::Generic => "Error",
            ErrorKind::Type => "TypeError",
            ErrorKind::Reference => "ReferenceError",
            ErrorKind::Range => "RangeError",
            ErrorKind::Custom(name) => name.as_ref(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned by every built-in check.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}{}", detail(.message))]
pub struct CheckError {
    pub kind: ErrorKind,
    /// `None` when the caller supplied no message.
    pub message: Option<String>,
}

impl CheckError {
    pub fn new(kind: ErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::Generic, None, "Error")]
    #[case(ErrorKind::Type, Some("bad"), "TypeError: bad")]
    #[case(ErrorKind::Reference, Some("gone"), "ReferenceError: gone")]
    #[case(ErrorKind::Range, None, "RangeError")]
    #[case(ErrorKind::custom("SyntaxError"), Some("eof"), "SyntaxError: eof")]
    fn test_display(#[case] kind: ErrorKind, #[case] message: Option<&str>, #[case] expected: &str) {
        let err = CheckError::new(kind, message.map(String::from));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_error_report_serializes() {
        let err = CheckError::new(ErrorKind::Range, Some("too big".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "Range");
        assert_eq!(json["message"], "too big");

        let back: CheckError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
