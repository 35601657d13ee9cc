//! One-argument type predicates over [`Value`].
use crate::value::{Boxed, Value};

pub(crate) fn is_undefined(value: &Value) -> bool {
    value.is_undefined()
}

pub(crate) fn is_null(value: &Value) -> bool {
    value.is_null()
}

pub(crate) fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Boxed(Boxed::Bool(_)))
}

/// A list-like sequence. `Arguments` is array-like but does not qualify.
pub(crate) fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Anything non-primitive, so arrays, functions, dates, regexps, argument
/// captures and boxed primitives are all objects.
pub(crate) fn is_object(value: &Value) -> bool {
    value.is_non_primitive()
}

pub(crate) fn is_args(value: &Value) -> bool {
    matches!(value, Value::Arguments(_))
}

pub(crate) fn is_func(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub(crate) fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Boxed(Boxed::String(_)))
}

/// NaN and the infinities are numbers.
pub(crate) fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_) | Value::Boxed(Boxed::Number(_)))
}

pub(crate) fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub(crate) fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp { .. })
}
