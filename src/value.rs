//! The dynamically typed values that typed checks classify.
//!
//! `Value` is the subject of every `must_be_*` check and the argument type for
//! message templates. It mirrors the shapes a loosely typed host hands to an
//! assertion library: the `Undefined` sentinel (distinct from `Null`), boxed
//! primitives, and the `Arguments` capture of a variadic call.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A callable subject, known only by name.
///
/// Checks only need to recognise a value as a function, so no body is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A boxed primitive (`new String("x")` and friends).
#[derive(Debug, Clone, PartialEq)]
pub enum Boxed {
    Bool(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The "value not provided" sentinel.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Boxed(Boxed),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Function(Function),
    Date(SystemTime),
    /// A pattern-matcher; holds the pattern source and flags.
    RegExp { source: String, flags: String },
    /// The capture of a variadic call's arguments. Array-like, but not an array.
    Arguments(Vec<Value>),
}

impl Value {
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Function::new(name))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp { source: source.into(), flags: flags.into() }
    }

    /// Builds a date from milliseconds since the Unix epoch.
    pub fn date_from_millis(millis: i64) -> Self {
        let offset = Duration::from_millis(millis.unsigned_abs());
        let at = if millis >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        };
        Value::Date(at)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for everything that is not a primitive. Boxed primitives count.
    pub fn is_non_primitive(&self) -> bool {
        !matches!(
            self,
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// The text a message template substitutes for this value.
    ///
    /// `Undefined` and `Null` substitute as nothing, like an array join.
    pub(crate) fn template_text(&self) -> String {
        match self {
            Value::Undefined | Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form past the same bounds as JS `String(n)`, e.g. `1e+21`.
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{n}")
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str(&item.template_text())?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) | Value::Boxed(Boxed::Bool(b)) => write!(f, "{b}"),
            Value::Number(n) | Value::Boxed(Boxed::Number(n)) => write_number(f, *n),
            Value::String(s) | Value::Boxed(Boxed::String(s)) => f.write_str(s),
            Value::Array(items) => write_joined(f, items),
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Arguments(_) => f.write_str("[object Arguments]"),
            Value::Function(func) => write!(f, "function {}()", func.name()),
            Value::Date(at) => match at.duration_since(UNIX_EPOCH) {
                Ok(d) => write!(f, "{}", d.as_millis()),
                Err(e) => write!(f, "-{}", e.duration().as_millis()),
            },
            Value::RegExp { source, flags } => write!(f, "/{source}/{flags}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<SystemTime> for Value {
    fn from(at: SystemTime) -> Self {
        Value::Date(at)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

/// `None` becomes the `Undefined` sentinel.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
