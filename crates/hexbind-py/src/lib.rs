//! PyO3 bindings exposing the `hexbind` facades over the h3o engine.
//!
//! Notes
//! - One submodule per representation: `array_int`, `set_int`, `set_str`.
//! - Every catalog operation is bound in each submodule; the bodies are thin
//!   calls into the matching `Facade`, so conversion and validation behave
//!   exactly as in Rust.

use pyo3::prelude::*;

#[macro_use]
mod bindings;
mod array_int;
mod common;
mod set_int;
mod set_str;

#[pymodule]
fn hexbind_native(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", hexbind::VERSION)?;
    m.add_function(wrap_pyfunction!(common::id_to_string, m)?)?;
    m.add_function(wrap_pyfunction!(common::string_to_id, m)?)?;

    let array_int = PyModule::new(py, "array_int")?;
    array_int::register(array_int)?;
    m.add_submodule(array_int)?;

    let set_int = PyModule::new(py, "set_int")?;
    set_int::register(set_int)?;
    m.add_submodule(set_int)?;

    let set_str = PyModule::new(py, "set_str")?;
    set_str::register(set_str)?;
    m.add_submodule(set_str)?;
    Ok(())
}
