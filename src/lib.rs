//! Runtime assertions with categorized errors and templated messages.
//!
//! ```
//! use its_core::{check_range, must_be_array, ErrorKind, Value};
//!
//! assert_eq!(check_range(1 > 0, None, &[]), Ok(true));
//!
//! let err = must_be_array(&Value::from("[1, 2]"), Some("%s is not a list"), &["input".into()])
//!     .unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Type);
//! assert_eq!(err.to_string(), "TypeError: input is not a list");
//! ```

#[macro_use]
mod macros;

pub mod checks;
pub mod engine;
pub mod error;
pub mod template;
pub mod value;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use checks::{
    must_be, must_be_args, must_be_array, must_be_boolean, must_be_date, must_be_func, must_be_null,
    must_be_number, must_be_object, must_be_regexp, must_be_string, must_be_undefined, must_not_be_null,
    CheckKind,
};
pub use engine::{check, check_defined, check_range, check_some, check_type, its, Constructor, Lead, Raise};
pub use error::{CheckError, ErrorKind, Result};
pub use template::{render, Formatter};
pub use value::{Boxed, Function, Value};

// --- Python Module Definition ---
/// Defines the `its._core` Python module.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn _core(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use bindings::python::*;
    use pyo3::prelude::*;

    m.add_function(wrap_pyfunction!(py_check, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_type, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_defined, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_range, m)?)?;
    m.add_function(wrap_pyfunction!(py_must_be, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
