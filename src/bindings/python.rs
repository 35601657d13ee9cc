use crate::checks::{self, CheckKind};
use crate::engine;
use crate::error::{CheckError, ErrorKind};
use crate::value::{Function, Value};
use pyo3::exceptions::{PyAssertionError, PyNameError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDateTime, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};
use std::collections::BTreeMap;

/// Maps a failed check onto the closest builtin Python exception.
fn to_py_err(err: CheckError) -> PyErr {
    let message = err.message.unwrap_or_default();
    match err.kind {
        ErrorKind::Generic => PyAssertionError::new_err(message),
        ErrorKind::Type => PyTypeError::new_err(message),
        ErrorKind::Reference => PyNameError::new_err(message),
        ErrorKind::Range => PyValueError::new_err(message),
        ErrorKind::Custom(name) => PyAssertionError::new_err(format!("{name}: {message}")),
    }
}

/// Converts a Python object into a check subject.
///
/// `None` is null, tuples are argument captures, and any other callable is an
/// function known by name.
fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    // bool first: it is a subclass of int.
    if obj.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(obj.extract()?));
    }
    if obj.is_instance_of::<PyInt>() || obj.is_instance_of::<PyFloat>() {
        return Ok(Value::Number(obj.extract()?));
    }
    if obj.is_instance_of::<PyString>() {
        return Ok(Value::String(obj.extract()?));
    }
    if obj.is_instance_of::<PyList>() {
        return Ok(Value::Array(collect(obj)?));
    }
    if obj.is_instance_of::<PyTuple>() {
        return Ok(Value::Arguments(collect(obj)?));
    }
    if obj.is_instance_of::<PyDict>() {
        let mut map = BTreeMap::new();
        for item in obj.call_method0("items")?.try_iter()? {
            let (key, value): (Bound<'_, PyAny>, Bound<'_, PyAny>) = item?.extract()?;
            map.insert(key.str()?.to_string(), to_value(&value)?);
        }
        return Ok(Value::Object(map));
    }
    if obj.is_instance_of::<PyDateTime>() {
        let seconds: f64 = obj.call_method0("timestamp")?.extract()?;
        return Ok(Value::date_from_millis((seconds * 1000.0) as i64));
    }
    let pattern = obj.py().import("re")?.getattr("Pattern")?;
    if obj.is_instance(&pattern)? {
        let source = obj.getattr("pattern")?.str()?.to_string();
        let flags: i64 = obj.getattr("flags")?.extract()?;
        return Ok(Value::regexp(source, pattern_flags(flags)));
    }
    if obj.is_callable() {
        let name = obj
            .getattr("__name__")
            .ok()
            .and_then(|n| n.extract::<String>().ok())
            .unwrap_or_else(|| "anonymous".to_string());
        return Ok(Value::Function(Function::new(name)));
    }
    Ok(Value::Object(BTreeMap::new()))
}

/// Spells `re` flag bits as inline flag letters, e.g. `re.I | re.M` as `"im"`.
fn pattern_flags(bits: i64) -> String {
    const LETTERS: [(i64, char); 7] = [
        (256, 'a'),
        (2, 'i'),
        (4, 'L'),
        (8, 'm'),
        (16, 's'),
        (32, 'u'),
        (64, 'x'),
    ];
    LETTERS.iter().filter(|(bit, _)| bits & bit != 0).map(|(_, letter)| *letter).collect()
}

fn collect(obj: &Bound<'_, PyAny>) -> PyResult<Vec<Value>> {
    obj.try_iter()?.map(|item| to_value(&item?)).collect()
}

/// Template arguments substitute as Python's own `str()` of each object.
fn template_args(args: &Bound<'_, PyTuple>) -> PyResult<Vec<Value>> {
    args.iter().map(|a| Ok(Value::String(a.str()?.to_string()))).collect()
}

#[pyfunction]
#[pyo3(name = "check", signature = (expression, message=None, *args))]
pub fn py_check(expression: bool, message: Option<String>, args: &Bound<'_, PyTuple>) -> PyResult<bool> {
    let args = template_args(args)?;
    engine::check(expression, ErrorKind::Generic, message.as_deref(), &args).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "check_type", signature = (expression, message=None, *args))]
pub fn py_check_type(expression: bool, message: Option<String>, args: &Bound<'_, PyTuple>) -> PyResult<bool> {
    let args = template_args(args)?;
    engine::check_type(expression, message.as_deref(), &args).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(name = "check_range", signature = (expression, message=None, *args))]
pub fn py_check_range(expression: bool, message: Option<String>, args: &Bound<'_, PyTuple>) -> PyResult<bool> {
    let args = template_args(args)?;
    engine::check_range(expression, message.as_deref(), &args).map_err(to_py_err)
}

/// Python has no undefined sentinel; `None` stands in for "not provided".
#[pyfunction]
#[pyo3(name = "check_defined", signature = (value, message=None, *args))]
pub fn py_check_defined<'py>(
    value: Bound<'py, PyAny>,
    message: Option<String>,
    args: &Bound<'py, PyTuple>,
) -> PyResult<Bound<'py, PyAny>> {
    let args = template_args(args)?;
    let subject = if value.is_none() { Value::Undefined } else { to_value(&value)? };
    engine::check_defined(&subject, message.as_deref(), &args).map_err(to_py_err)?;
    Ok(value)
}

#[pyfunction]
#[pyo3(name = "must_be", signature = (kind, value, message=None, *args))]
pub fn py_must_be(
    kind: &str,
    value: &Bound<'_, PyAny>,
    message: Option<String>,
    args: &Bound<'_, PyTuple>,
) -> PyResult<bool> {
    let kind = CheckKind::from_name(kind)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown check '{}'", kind)))?;
    let args = template_args(args)?;
    checks::must_be(kind, &to_value(value)?, message.as_deref(), &args).map_err(to_py_err)
}

#[cfg(all(test, feature = "auto-initialize"))]
mod tests {
    use super::*;
    use pyo3::exceptions::PyException;
    use std::ffi::CStr;

    fn eval<'py>(py: Python<'py>, code: &CStr) -> Bound<'py, PyAny> {
        py.eval(code, None, None).unwrap()
    }

    fn tuple<'py>(py: Python<'py>, code: &CStr) -> Bound<'py, PyTuple> {
        eval(py, code).downcast_into::<PyTuple>().unwrap()
    }

    fn message(py: Python<'_>, err: &PyErr) -> String {
        err.value(py).to_string()
    }

    #[test]
    fn test_subject_conversions() {
        Python::attach(|py| {
            assert_eq!(to_value(&eval(py, c"None")).unwrap(), Value::Null);
            assert_eq!(to_value(&eval(py, c"True")).unwrap(), Value::Bool(true));
            assert_eq!(to_value(&eval(py, c"3")).unwrap(), Value::Number(3.0));
            assert_eq!(to_value(&eval(py, c"'x'")).unwrap(), Value::from("x"));
            assert_eq!(to_value(&eval(py, c"[1, 'a']")).unwrap(), Value::Array(vec![1.into(), "a".into()]));
            assert_eq!(
                to_value(&eval(py, c"(1, None)")).unwrap(),
                Value::Arguments(vec![1.into(), Value::Null])
            );
            let Value::Object(map) = to_value(&eval(py, c"{'k': 2}")).unwrap() else { panic!("expected an object") };
            assert_eq!(map["k"], Value::Number(2.0));
            assert_eq!(to_value(&eval(py, c"len")).unwrap(), Value::function("len"));
        });
    }

    #[test]
    fn test_date_and_pattern_conversions() {
        Python::attach(|py| {
            let date = eval(
                py,
                c"__import__('datetime').datetime(1970, 1, 1, 0, 0, 2, tzinfo=__import__('datetime').timezone.utc)",
            );
            assert_eq!(to_value(&date).unwrap(), Value::date_from_millis(2_000));

            let pattern = eval(py, c"__import__('re').compile('a+', __import__('re').I | __import__('re').M)");
            assert_eq!(to_value(&pattern).unwrap(), Value::regexp("a+", "imu"));
        });
    }

    #[test]
    fn test_pattern_flags() {
        assert_eq!(pattern_flags(0), "");
        assert_eq!(pattern_flags(2 | 16), "is");
        assert_eq!(pattern_flags(256 | 64), "ax");
    }

    #[test]
    fn test_checks_pass_through() {
        Python::attach(|py| {
            let none = PyTuple::empty(py);
            assert!(py_check(true, None, &none).unwrap());
            assert!(py_check_type(true, Some("unused".into()), &none).unwrap());
            assert!(py_check_range(true, None, &none).unwrap());
            assert!(py_must_be("array", &eval(py, c"[]"), None, &none).unwrap());
            let zero = py_check_defined(eval(py, c"0"), None, &none).unwrap();
            assert_eq!(zero.extract::<i64>().unwrap(), 0);
        });
    }

    #[test]
    fn test_template_args_use_python_str() {
        Python::attach(|py| {
            let args = tuple(py, c"(__import__('decimal').Decimal('1.5'), (1, 2), None, True)");
            let err = py_check(false, Some("%s %s %s %s".into()), &args).unwrap_err();
            assert!(err.is_instance_of::<PyAssertionError>(py));
            assert_eq!(message(py, &err), "1.5 (1, 2) None True");
        });
    }

    #[test]
    fn test_exception_mapping() {
        Python::attach(|py| {
            let none = PyTuple::empty(py);
            let err = py_check_type(false, Some("t".into()), &none).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert_eq!(message(py, &err), "t");

            let err = py_check_range(false, None, &none).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let err = py_check_defined(eval(py, c"None"), Some("%s missing".into()), &tuple(py, c"('name',)"))
                .unwrap_err();
            assert!(err.is_instance_of::<PyNameError>(py));
            assert_eq!(message(py, &err), "name missing");

            let err = py_must_be("string", &eval(py, c"1"), None, &none).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));

            let err = py_must_be("integer", &eval(py, c"1"), None, &none).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let err = to_py_err(CheckError::new(ErrorKind::custom("SyntaxError"), Some("eof".into())));
            assert!(err.is_instance_of::<PyAssertionError>(py));
            assert!(err.is_instance_of::<PyException>(py));
            assert_eq!(message(py, &err), "SyntaxError: eof");
        });
    }
}
