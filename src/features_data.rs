//! Raw column container for mixed numerical/categorical data.

use std::collections::{HashMap, HashSet};

use crate::error::{OrdBoostError, Result};
use crate::pool::{Feature, Pool};


/// A raw, column-oriented container of numerical and categorical
/// feature data, prior to any encoding.
///
/// `FeaturesData` is the staging area for building a [`Pool`] out of
/// data that mixes `f64` columns with string-valued categorical
/// columns.
/// Converting into a pool ordinal-encodes every categorical column
/// (codes are assigned in first-seen order, per column) and marks the
/// resulting columns as categorical.
/// All numerical columns come first in the resulting pool,
/// in the order given, followed by the categorical ones.
/// # Example
/// ```
/// use ordboost::FeaturesData;
///
/// let data = FeaturesData::new(
///     vec![vec![0.5, 1.5, 2.5]],
///     vec![vec!["red".into(), "blue".into(), "red".into()]],
/// ).unwrap();
/// let pool = data.into_pool(vec![-1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(pool.shape(), (3, 2));
/// assert_eq!(pool.cat_feature_indices(), vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeaturesData {
    num_columns: Vec<Vec<f64>>,
    cat_columns: Vec<Vec<String>>,
    num_names: Vec<String>,
    cat_names: Vec<String>,
    n_row: usize,
}


impl FeaturesData {
    /// Construct from numerical and categorical columns.
    /// All columns must have the same length.
    /// Columns are given default names
    /// (`num_0`, `num_1`, ..., `cat_0`, `cat_1`, ...);
    /// use [`FeaturesData::with_names`] to replace them.
    pub fn new(
        num_columns: Vec<Vec<f64>>,
        cat_columns: Vec<Vec<String>>,
    ) -> Result<Self>
    {
        let n_row = num_columns.first()
            .map(Vec::len)
            .or_else(|| cat_columns.first().map(Vec::len))
            .unwrap_or(0);

        let ragged_num = num_columns.iter().any(|c| c.len() != n_row);
        let ragged_cat = cat_columns.iter().any(|c| c.len() != n_row);
        if ragged_num || ragged_cat {
            return Err(OrdBoostError::ShapeMismatch(
                "all feature columns must have the same length".to_string()
            ));
        }

        let num_names = (0..num_columns.len())
            .map(|i| format!("num_{i}"))
            .collect();
        let cat_names = (0..cat_columns.len())
            .map(|i| format!("cat_{i}"))
            .collect();

        Ok(Self { num_columns, cat_columns, num_names, cat_names, n_row })
    }


    /// Replace the default column names.
    /// The name counts must match the column counts and all names,
    /// across both groups, must be distinct.
    pub fn with_names<T: ToString>(
        mut self,
        num_names: &[T],
        cat_names: &[T],
    ) -> Result<Self>
    {
        if num_names.len() != self.num_columns.len()
            || cat_names.len() != self.cat_columns.len()
        {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "{} + {} names given for {} + {} columns",
                num_names.len(), cat_names.len(),
                self.num_columns.len(), self.cat_columns.len(),
            )));
        }

        let num_names = num_names.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();
        let cat_names = cat_names.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        for name in num_names.iter().chain(&cat_names) {
            if !seen.insert(name.as_str()) {
                return Err(OrdBoostError::InvalidParameter {
                    name: "names",
                    reason: format!("duplicate column name {name:?}"),
                });
            }
        }

        self.num_names = num_names;
        self.cat_names = cat_names;
        Ok(self)
    }


    /// The number of rows.
    pub fn num_row(&self) -> usize {
        self.n_row
    }


    /// The number of columns, numerical and categorical combined.
    pub fn num_col(&self) -> usize {
        self.num_columns.len() + self.cat_columns.len()
    }


    /// Convert into a [`Pool`] with the given target column.
    /// Categorical columns are ordinal-encoded in first-seen order.
    pub fn into_pool(self, target: Vec<f64>) -> Result<Pool> {
        if target.len() != self.n_row {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "the target has {} rows while the data has {}",
                target.len(), self.n_row,
            )));
        }

        let mut features = Vec::with_capacity(self.num_col());

        for (name, values) in self.num_names.into_iter()
            .zip(self.num_columns)
        {
            features.push(Feature::from_values(name, values));
        }

        for (name, values) in self.cat_names.into_iter()
            .zip(self.cat_columns)
        {
            features.push(Feature::from_codes(name, encode(&values)));
        }

        let n_feature = features.len();
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(Pool {
            name_to_index,
            features,
            target,
            weights: None,
            n_sample: self.n_row,
            n_feature,
        })
    }
}


/// Ordinal codes in first-seen order.
fn encode(values: &[String]) -> Vec<f64> {
    let mut codes = HashMap::new();
    values.iter()
        .map(|v| {
            let next = codes.len() as f64;
            *codes.entry(v.as_str()).or_insert(next)
        })
        .collect()
}
