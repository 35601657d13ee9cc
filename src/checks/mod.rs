//! The typed check family.
//!
//! A fixed table pairs each [`CheckKind`] with its name and predicate. Every
//! `must_be_*` function evaluates its predicate and forwards the result into
//! [`check_type`], so all of them share the same message handling and fail
//! with a type error.

use self::predicates as p;
use crate::engine::check_type;
use crate::error::Result;
use crate::value::Value;
use serde::{Deserialize, Serialize};

mod predicates;

/// The shapes a value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Undefined,
    Null,
    Boolean,
    Array,
    Object,
    Args,
    Func,
    String,
    Number,
    Date,
    RegExp,
}

struct CheckDef {
    kind: CheckKind,
    name: &'static str,
    predicate: fn(&Value) -> bool,
}

// Indexed by `CheckKind` discriminant.
static CHECKS: [CheckDef; 11] = [
    CheckDef { kind: CheckKind::Undefined, name: "undefined", predicate: p::is_undefined },
    CheckDef { kind: CheckKind::Null, name: "null", predicate: p::is_null },
    CheckDef { kind: CheckKind::Boolean, name: "boolean", predicate: p::is_boolean },
    CheckDef { kind: CheckKind::Array, name: "array", predicate: p::is_array },
    CheckDef { kind: CheckKind::Object, name: "object", predicate: p::is_object },
    CheckDef { kind: CheckKind::Args, name: "args", predicate: p::is_args },
    CheckDef { kind: CheckKind::Func, name: "func", predicate: p::is_func },
    CheckDef { kind: CheckKind::String, name: "string", predicate: p::is_string },
    CheckDef { kind: CheckKind::Number, name: "number", predicate: p::is_number },
    CheckDef { kind: CheckKind::Date, name: "date", predicate: p::is_date },
    CheckDef { kind: CheckKind::RegExp, name: "regexp", predicate: p::is_regexp },
];

impl CheckKind {
    pub const ALL: [CheckKind; 11] = [
        CheckKind::Undefined,
        CheckKind::Null,
        CheckKind::Boolean,
        CheckKind::Array,
        CheckKind::Object,
        CheckKind::Args,
        CheckKind::Func,
        CheckKind::String,
        CheckKind::Number,
        CheckKind::Date,
        CheckKind::RegExp,
    ];

    fn def(self) -> &'static CheckDef {
        &CHECKS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        CHECKS.iter().find(|d| d.name == name).map(|d| d.kind)
    }

    /// Evaluates the predicate without failing.
    pub fn matches(self, value: &Value) -> bool {
        (self.def().predicate)(value)
    }
}

/// Fails with a type error unless `value` matches `kind`.
pub fn must_be(kind: CheckKind, value: &Value, message: Option<&str>, args: &[Value]) -> Result<bool> {
    check_type(kind.matches(value), message, args)
}

macro_rules! named_checks {
    ($($(#[$doc:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(value: &Value, message: Option<&str>, args: &[Value]) -> Result<bool> {
                must_be(CheckKind::$kind, value, message, args)
            }
        )*
    };
}

named_checks! {
    must_be_undefined => Undefined;
    /// Passes only when the value *is* null. See [`must_not_be_null`] for the inverse.
    must_be_null => Null;
    must_be_boolean => Boolean;
    /// Passes for `Value::Array` only.
    must_be_array => Array;
    /// Passes for every non-primitive value, arrays and functions included.
    must_be_object => Object;
    must_be_args => Args;
    must_be_func => Func;
    must_be_string => String;
    must_be_number => Number;
    must_be_date => Date;
    must_be_regexp => RegExp;
}

/// Fails with a type error when `value` is null.
pub fn must_not_be_null(value: &Value, message: Option<&str>, args: &[Value]) -> Result<bool> {
    check_type(!value.is_null(), message, args)
}
