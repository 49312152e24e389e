use polars::prelude::*;

use std::slice::Iter;

use crate::error::{OrdBoostError, Result};


/// A single named column of a [`Pool`](super::Pool).
///
/// Values are always stored as `f64`.
/// Categorical columns hold ordinal codes produced when the pool
/// was built and carry the `categorical` flag so that downstream
/// consumers can tell the two apart.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature name.
    pub(crate) name: String,
    /// Feature values, one per example.
    pub(crate) values: Vec<f64>,
    /// Whether the values are ordinal codes of a categorical column.
    pub(crate) categorical: bool,
}


impl Feature {
    /// Construct an empty numerical feature with the given name.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            categorical: false,
        }
    }


    /// Construct a numerical feature from a name and its values.
    pub fn from_values<T: ToString>(name: T, values: Vec<f64>) -> Self {
        Self { name: name.to_string(), values, categorical: false }
    }


    /// Construct a categorical feature from a name and ordinal codes.
    pub fn from_codes<T: ToString>(name: T, codes: Vec<f64>) -> Self {
        Self { name: name.to_string(), values: codes, categorical: true }
    }


    /// Convert a `polars::Series` into a numerical feature.
    /// The series must have dtype `f64` and contain no nulls.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let values = series.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OrdBoostError::ShapeMismatch(
                format!("column {name:?} contains null values")
            ))?;

        Ok(Self { name, values, categorical: false })
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// The number of examples in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Whether the feature holds no examples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Whether the feature is categorical.
    pub fn is_categorical(&self) -> bool {
        self.categorical
    }


    /// The value at row `i`.
    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }


    /// A slice over all values of this feature.
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    /// An iterator over the values of this feature.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.values.push(x);
    }
}
