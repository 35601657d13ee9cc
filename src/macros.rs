//! Terse call forms.

/// The generic check with positional arguments.
///
/// ```
/// use its_core::{its, ErrorKind};
///
/// assert_eq!(its!(0 < 10), Ok(true));
///
/// let err = its!(0 > 10, "%s went %s!", "something", "wrong").unwrap_err();
/// assert_eq!(err.to_string(), "Error: something went wrong!");
///
/// let err = its!(0 > 10, ErrorKind::Range).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::Range);
///
/// let err = its!(type: false, "expected %s", "a list").unwrap_err();
/// assert_eq!(err.to_string(), "TypeError: expected a list");
///
/// let err = its!(range: 1 < 0).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::Range);
/// ```
#[macro_export]
macro_rules! its {
    (type: $expr:expr $(, $msg:expr $(, $arg:expr)*)? $(,)?) => {
        $crate::check_type(
            $expr,
            $crate::__its_message!($($msg)?),
            &[$($($crate::Value::from($arg)),*)?],
        )
    };
    (range: $expr:expr $(, $msg:expr $(, $arg:expr)*)? $(,)?) => {
        $crate::check_range(
            $expr,
            $crate::__its_message!($($msg)?),
            &[$($($crate::Value::from($arg)),*)?],
        )
    };
    ($expr:expr $(,)?) => {
        $crate::check($expr, $crate::ErrorKind::Generic, ::core::option::Option::None, &[])
    };
    ($expr:expr, $lead:expr $(, $arg:expr)* $(,)?) => {
        $crate::its($expr, $lead, &[$($crate::Value::from($arg)),*])
    };
}

/// A typed check by kind name.
///
/// ```
/// use its_core::{must, Value};
///
/// assert_eq!(must!(Array, &Value::from(vec![1, 2])), Ok(true));
///
/// let err = must!(String, &Value::from(7), "%s is not text", 7).unwrap_err();
/// assert_eq!(err.to_string(), "TypeError: 7 is not text");
/// ```
#[macro_export]
macro_rules! must {
    ($kind:ident, $value:expr $(, $msg:expr $(, $arg:expr)*)? $(,)?) => {
        $crate::must_be(
            $crate::CheckKind::$kind,
            $value,
            $crate::__its_message!($($msg)?),
            &[$($($crate::Value::from($arg)),*)?],
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __its_message {
    () => {
        ::core::option::Option::None
    };
    ($msg:expr) => {
        ::core::option::Option::Some(&*$msg)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CheckError, Constructor, ErrorKind, Value};

    #[derive(Debug, PartialEq)]
    struct Custom(Option<String>);

    #[test]
    fn test_generic_forms() {
        assert_eq!(its!(true, "ignored", 1, 2), Ok(true));
        assert_eq!(its!(false), Err(CheckError::new(ErrorKind::Generic, None)));
        assert_eq!(
            its!(false, "boom"),
            Err(CheckError::new(ErrorKind::Generic, Some("boom".into())))
        );
        assert_eq!(
            its!(false, "%s went %s!", "something", "wrong",),
            Err(CheckError::new(ErrorKind::Generic, Some("something went wrong!".into())))
        );
    }

    #[test]
    fn test_error_type_forms() {
        assert_eq!(its!(false, Constructor(Custom)), Err(Custom(None)));
        assert_eq!(
            its!(false, Constructor(Custom), "%s went %s!", "something", "wrong"),
            Err(Custom(Some("something went wrong!".into())))
        );
        assert_eq!(
            its!(false, ErrorKind::Range, "boom"),
            Err(CheckError::new(ErrorKind::Range, Some("boom".into())))
        );
    }

    #[test]
    fn test_typed_forms() {
        assert_eq!(its!(type: true), Ok(true));
        let name = String::from("owner");
        let err = its!(type: false, format!("%s must be set ({})", 1), name.as_str()).unwrap_err();
        assert_eq!(err.message(), Some("owner must be set (1)"));
        assert_eq!(its!(range: 2 > 1, "unused"), Ok(true));
    }

    #[test]
    fn test_must_forms() {
        let list = Value::from(vec!["a"]);
        assert_eq!(must!(Array, &list), Ok(true));
        assert_eq!(must!(Object, &list, "arrays are objects"), Ok(true));
        let err = must!(Func, &list, "%s is not callable", &list).unwrap_err();
        assert_eq!(err.message(), Some("a is not callable"));
    }
}
