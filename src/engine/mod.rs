//! The assertion engine.
//!
//! Every check in the crate ends up in [`check`]: it returns the expression
//! untouched when it holds, and otherwise resolves the message and builds the
//! error selected by a [`Raise`] implementation.
//!
//! Callers choose the error category with a typed parameter rather than by
//! passing a differently typed positional argument. The terse positional
//! style is still available through [`its`] (and the `its!` macro), where the
//! *type* of the second argument decides its role: a string is always a
//! message, an [`ErrorKind`] or [`Constructor`] is always an error type.

pub use self::lead::Lead;

mod lead;

use crate::error::{CheckError, ErrorKind, Result};
use crate::template::Formatter;
use crate::value::Value;

/// Builds the error a failed check returns.
pub trait Raise {
    type Error;

    /// Category name recorded in the failure log.
    fn category(&self) -> &str;

    fn raise(self, message: Option<String>) -> Self::Error;
}

impl Raise for ErrorKind {
    type Error = CheckError;

    fn category(&self) -> &str {
        self.name()
    }

    fn raise(self, message: Option<String>) -> CheckError {
        CheckError::new(self, message)
    }
}

/// A caller-supplied error constructor.
///
/// ```
/// use its_core::{check, Constructor};
///
/// #[derive(Debug, PartialEq)]
/// struct OutOfStock(Option<String>);
///
/// let err = check(false, Constructor(OutOfStock), Some("sku %s"), &["A-1".into()]).unwrap_err();
/// assert_eq!(err, OutOfStock(Some("sku A-1".into())));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Constructor<F>(pub F);

impl<E, F> Raise for Constructor<F>
where
    F: FnOnce(Option<String>) -> E,
{
    type Error = E;

    fn category(&self) -> &str {
        std::any::type_name::<E>()
    }

    fn raise(self, message: Option<String>) -> E {
        (self.0)(message)
    }
}

/// Resolves the final message of a failed check.
///
/// The template is only rendered when substitution values were supplied;
/// otherwise it is used verbatim, placeholders and all.
pub(crate) fn resolve_message(
    formatter: &Formatter,
    message: Option<&str>,
    args: &[Value],
) -> Option<String> {
    match message {
        Some(template) if !args.is_empty() => Some(formatter.render(template, args)),
        Some(text) => Some(text.to_owned()),
        None => None,
    }
}

/// The generic check.
///
/// Returns `Ok(expression)` when `expression` is true. Otherwise returns the
/// error built by `raise` with the resolved message.
///
/// ```
/// use its_core::{check, ErrorKind};
///
/// assert_eq!(check(0 < 10, ErrorKind::Generic, None, &[]), Ok(true));
///
/// let err = check(0 > 10, ErrorKind::Range, Some("%s went %s!"), &["something".into(), "wrong".into()])
///     .unwrap_err();
/// assert_eq!(err.kind, ErrorKind::Range);
/// assert_eq!(err.message(), Some("something went wrong!"));
/// ```
pub fn check<R: Raise>(
    expression: bool,
    raise: R,
    message: Option<&str>,
    args: &[Value],
) -> std::result::Result<bool, R::Error> {
    Formatter::default().check(expression, raise, message, args)
}

impl Formatter {
    /// The generic check, rendering its message with this formatter.
    ///
    /// ```
    /// use its_core::{ErrorKind, Formatter};
    ///
    /// let fmt: Formatter = serde_json::from_str(r#"{ "placeholder": "{}", "missing": "?" }"#).unwrap();
    /// let err = fmt.check(false, ErrorKind::Type, Some("{} of {}"), &[3.into()]).unwrap_err();
    /// assert_eq!(err.message(), Some("3 of ?"));
    /// ```
    pub fn check<R: Raise>(
        &self,
        expression: bool,
        raise: R,
        message: Option<&str>,
        args: &[Value],
    ) -> std::result::Result<bool, R::Error> {
        if expression {
            return Ok(expression);
        }
        Err(fail(self, raise, message, args))
    }
}

fn fail<R: Raise>(formatter: &Formatter, raise: R, message: Option<&str>, args: &[Value]) -> R::Error {
    let message = resolve_message(formatter, message, args);
    tracing::debug!(
        target: "its_core",
        category = raise.category(),
        message = message.as_deref().unwrap_or_default(),
        "check failed"
    );
    raise.raise(message)
}

/// The generic check in positional form.
///
/// `lead` is either the message (any string) followed by its template
/// arguments, or an error type followed by the message and then the template
/// arguments.
///
/// ```
/// use its_core::{its, ErrorKind};
///
/// let err = its(false, "%s went %s!", &["something".into(), "wrong".into()]).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::Generic);
///
/// let err = its(false, ErrorKind::Range, &["%s!".into(), "boom".into()]).unwrap_err();
/// assert_eq!(err.to_string(), "RangeError: boom!");
/// ```
pub fn its<L: Lead>(
    expression: bool,
    lead: L,
    rest: &[Value],
) -> std::result::Result<bool, <L::Raise as Raise>::Error> {
    if expression {
        return Ok(expression);
    }
    let (raise, message, args) = lead.split(rest);
    check(false, raise, message.as_deref(), args)
}

/// Fails with a type error when `expression` is false.
///
/// The single type-mismatch primitive every `must_be_*` check funnels into.
pub fn check_type(expression: bool, message: Option<&str>, args: &[Value]) -> Result<bool> {
    check(expression, ErrorKind::Type, message, args)
}

/// Fails with a reference error when `value` is the `Undefined` sentinel.
/// Returns the value itself otherwise; `Null` and `0` are defined.
pub fn check_defined<'v>(value: &'v Value, message: Option<&str>, args: &[Value]) -> Result<&'v Value> {
    check(!value.is_undefined(), ErrorKind::Reference, message, args)?;
    Ok(value)
}

/// [`check_defined`] for Rust values, with `None` as the sentinel.
pub fn check_some<T>(value: Option<T>, message: Option<&str>, args: &[Value]) -> Result<T> {
    value.ok_or_else(|| fail(&Formatter::default(), ErrorKind::Reference, message, args))
}

/// Fails with a range error when `expression` is false.
pub fn check_range(expression: bool, message: Option<&str>, args: &[Value]) -> Result<bool> {
    check(expression, ErrorKind::Range, message, args)
}
