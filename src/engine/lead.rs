//! Role resolution for the positional form of the generic check.
use super::{Constructor, Raise};
use crate::error::ErrorKind;
use crate::value::Value;

/// The second argument of a positional check.
///
/// Strings are messages and select the default category. Error types consume
/// the next positional value as their message.
pub trait Lead {
    type Raise: Raise;

    /// Splits the positional arguments into the error type, the message and
    /// the template arguments.
    fn split<'r>(self, rest: &'r [Value]) -> (Self::Raise, Option<String>, &'r [Value]);
}

impl Lead for &str {
    type Raise = ErrorKind;

    fn split<'r>(self, rest: &'r [Value]) -> (ErrorKind, Option<String>, &'r [Value]) {
        (ErrorKind::Generic, Some(self.to_owned()), rest)
    }
}

impl Lead for String {
    type Raise = ErrorKind;

    fn split<'r>(self, rest: &'r [Value]) -> (ErrorKind, Option<String>, &'r [Value]) {
        (ErrorKind::Generic, Some(self), rest)
    }
}

impl Lead for ErrorKind {
    type Raise = ErrorKind;

    fn split<'r>(self, rest: &'r [Value]) -> (ErrorKind, Option<String>, &'r [Value]) {
        let (message, args) = message_then_args(rest);
        (self, message, args)
    }
}

impl<E, F> Lead for Constructor<F>
where
    F: FnOnce(Option<String>) -> E,
{
    type Raise = Self;

    fn split<'r>(self, rest: &'r [Value]) -> (Self, Option<String>, &'r [Value]) {
        let (message, args) = message_then_args(rest);
        (self, message, args)
    }
}

// An undefined message slot means "no message".
fn message_then_args(rest: &[Value]) -> (Option<String>, &[Value]) {
    match rest.split_first() {
        Some((Value::Undefined, args)) => (None, args),
        Some((Value::String(text), args)) => (Some(text.clone()), args),
        Some((other, args)) => (Some(other.to_string()), args),
        None => (None, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_lead_keeps_all_args() {
        let rest = vec![Value::from("a"), Value::from("b")];
        let (kind, message, args) = Lead::split("%s%s", &rest);
        assert_eq!(kind, ErrorKind::Generic);
        assert_eq!(message.as_deref(), Some("%s%s"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_error_type_lead_takes_message_slot() {
        let rest = vec![Value::from("%s!"), Value::from("a")];
        let (kind, message, args) = Lead::split(ErrorKind::Type, &rest);
        assert_eq!(kind, ErrorKind::Type);
        assert_eq!(message.as_deref(), Some("%s!"));
        assert_eq!(args, &[Value::from("a")]);
    }

    #[test]
    fn test_undefined_message_slot() {
        let rest = vec![Value::Undefined, Value::from("a")];
        let (_, message, args) = Lead::split(ErrorKind::Range, &rest);
        assert_eq!(message, None);
        assert_eq!(args.len(), 1);
    }
}
