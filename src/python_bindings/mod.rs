//! Python bindings that expose the hypercomplex number type via PyO3.
use pyo3::{
    exceptions::{PyIndexError, PyValueError, PyZeroDivisionError},
    prelude::*,
    types::PyModule,
};

use crate::{AlgebraError, Hypercomplex};

/// Python exception class an [`AlgebraError`] surfaces as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExceptionKind {
    Index,
    ZeroDivision,
    Value,
}

fn exception_kind(err: &AlgebraError) -> ExceptionKind {
    match err {
        AlgebraError::IndexOutOfRange { .. } => ExceptionKind::Index,
        AlgebraError::DivisionByZero { .. } => ExceptionKind::ZeroDivision,
        AlgebraError::InvalidOrder { .. }
        | AlgebraError::OrderMismatch { .. }
        | AlgebraError::InvalidInput(_) => ExceptionKind::Value,
    }
}

fn to_py_err(err: AlgebraError) -> PyErr {
    let msg = err.to_string();
    match exception_kind(&err) {
        ExceptionKind::Index => PyIndexError::new_err(msg),
        ExceptionKind::ZeroDivision => PyZeroDivisionError::new_err(msg),
        ExceptionKind::Value => PyValueError::new_err(msg),
    }
}

/// Python-facing wrapper around [`Hypercomplex`].
#[pyclass(name = "Hypercomplex")]
#[derive(Debug, Clone)]
pub struct PyHypercomplex {
    inner: Hypercomplex,
}

impl From<Hypercomplex> for PyHypercomplex {
    fn from(inner: Hypercomplex) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyHypercomplex {
    #[new]
    /// Create a zero-valued number of the given order.
    pub fn new(order: usize) -> PyResult<Self> {
        Hypercomplex::new(order).map(Self::from).map_err(to_py_err)
    }

    /// Build a number from its flat components.
    ///
    /// Args:
    ///     components: List of floats whose length is a power of two >= 2.
    #[staticmethod]
    pub fn from_components(components: Vec<f64>) -> PyResult<Self> {
        Hypercomplex::from_components(&components)
            .map(Self::from)
            .map_err(to_py_err)
    }

    /// Algebra order (number of components).
    #[getter]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    fn __len__(&self) -> usize {
        self.inner.order()
    }

    fn __getitem__(&self, index: isize) -> PyResult<f64> {
        self.inner.get(checked_index(index)?).map_err(to_py_err)
    }

    fn __setitem__(&mut self, index: isize, value: f64) -> PyResult<()> {
        self.inner.set(checked_index(index)?, value).map_err(to_py_err)
    }

    fn __add__(&self, other: PyRef<'_, Self>) -> PyResult<Self> {
        self.inner.add(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn __sub__(&self, other: PyRef<'_, Self>) -> PyResult<Self> {
        self.inner.sub(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn __mul__(&self, other: PyRef<'_, Self>) -> PyResult<Self> {
        self.inner
            .multiply(&other.inner)
            .map(Self::from)
            .map_err(to_py_err)
    }

    fn __neg__(&self) -> Self {
        self.inner.negate().into()
    }

    fn __eq__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner == other.inner
    }

    /// Cayley-Dickson conjugate.
    pub fn conjugate(&self) -> Self {
        self.inner.conjugate().into()
    }

    /// Sum of squared components.
    pub fn norm(&self) -> f64 {
        self.inner.norm()
    }

    /// Square root of the norm.
    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    /// Multiply every component by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        self.inner.scale(factor).into()
    }

    /// Unit-magnitude copy; raises ZeroDivisionError on zero.
    pub fn normalize(&self) -> PyResult<Self> {
        self.inner.normalize().map(Self::from).map_err(to_py_err)
    }

    /// Multiplicative inverse; raises ZeroDivisionError on zero.
    pub fn inverse(&self) -> PyResult<Self> {
        self.inner.inverse().map(Self::from).map_err(to_py_err)
    }

    /// Sandwich product `by * self * by^-1`.
    pub fn rotate(&self, by: PyRef<'_, Self>) -> PyResult<Self> {
        self.inner.rotate(&by.inner).map(Self::from).map_err(to_py_err)
    }

    /// Flat components in index order.
    pub fn components(&self) -> Vec<f64> {
        self.inner.components()
    }

    fn __repr__(&self) -> String {
        format!("Hypercomplex({})", self.inner)
    }
}

/// Negative indices are rejected rather than wrapped.
fn checked_index(index: isize) -> PyResult<usize> {
    usize::try_from(index)
        .map_err(|_| PyIndexError::new_err(format!("component index {} is negative", index)))
}

/// Create Python module.
#[pymodule]
pub fn cayley_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHypercomplex>()?;
    Ok(())
}
