use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;

use polars::prelude::*;
use rayon::prelude::*;

use super::feature::Feature;
use crate::error::{OrdBoostError, Result};


/// Struct `Pool` holds a batch of training/evaluation data
/// in column-major order.
///
/// A pool consists of named feature columns,
/// an optional target column,
/// optional per-example weights,
/// and a record of which columns are categorical.
/// # Example
/// ```no_run
/// use ordboost::pool::PoolBuilder;
///
/// let pool = PoolBuilder::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("label")
///     .read()
///     .unwrap();
/// let (n_sample, n_feature) = pool.shape();
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    pub(crate) name_to_index: HashMap<String, usize>,
    pub(crate) features: Vec<Feature>,
    pub(crate) target: Vec<f64>,
    pub(crate) weights: Option<Vec<f64>>,
    pub(crate) n_sample: usize,
    pub(crate) n_feature: usize,
}


impl Pool {
    /// Construct a pool from named columns and a target column.
    /// Every column must have the same length as `target`.
    /// An empty `target` means "no target attached yet";
    /// in that case only the columns must agree with each other.
    pub fn from_columns<T>(columns: Vec<(T, Vec<f64>)>, target: Vec<f64>)
        -> Result<Self>
        where T: ToString,
    {
        let features = columns.into_iter()
            .map(|(name, values)| Feature::from_values(name, values))
            .collect::<Vec<_>>();

        let n_sample = if target.is_empty() {
            features.first().map(Feature::len).unwrap_or(0)
        } else {
            target.len()
        };

        for feat in &features {
            if feat.len() != n_sample {
                return Err(OrdBoostError::ShapeMismatch(format!(
                    "column {:?} has {} rows, expected {}",
                    feat.name(), feat.len(), n_sample,
                )));
            }
        }

        let n_feature = features.len();
        let name_to_index = Self::build_index(&features);

        Ok(Self {
            name_to_index,
            features,
            target,
            weights: None,
            n_sample,
            n_feature,
        })
    }


    /// Convert a `polars::DataFrame` and `polars::Series` into a pool.
    /// This method takes ownership of `data` and `target`.
    /// All columns, including the target, must have dtype `f64`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();
        let target = target.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OrdBoostError::ShapeMismatch(
                "the target column contains null values".to_string()
            ))?;

        if target.len() != n_sample {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "the target has {} rows while the frame has {}",
                target.len(), n_sample,
            )));
        }

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        let name_to_index = Self::build_index(&features);

        Ok(Self {
            name_to_index,
            features,
            target,
            weights: None,
            n_sample,
            n_feature,
        })
    }


    /// Read a CSV file into a pool.
    /// The resulting pool has an empty target;
    /// pick one of the columns with [`Pool::set_target`].
    ///
    /// If `has_header` is `false`,
    /// columns are named `Feat. [1]`, `Feat. [2]`, and so on.
    pub fn from_csv<P>(file: P, mut has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut features: Vec<Feature> = Vec::new();
        let mut n_sample = 0_usize;
        let mut line_number = 0_usize;

        for line in lines {
            let line = line?;
            line_number += 1;

            if has_header && features.is_empty() && n_sample == 0 {
                if line.trim().is_empty() {
                    return Err(OrdBoostError::ShapeMismatch(
                        "the header line is empty".to_string()
                    ));
                }
                features = line.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
                continue;
            }

            let row = line.split(',')
                .map(|cell| {
                    cell.trim()
                        .parse::<f64>()
                        .map_err(|_| OrdBoostError::CsvParse {
                            line: line_number,
                            text: cell.trim().to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            // Rows of a headerless file name their columns on the fly.
            if !has_header {
                features = (1..=row.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect::<Vec<_>>();
                has_header = true;
            }

            if row.len() != features.len() {
                return Err(OrdBoostError::ShapeMismatch(format!(
                    "line {line_number} has {} cells, expected {}",
                    row.len(), features.len(),
                )));
            }

            for (feat, x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
            n_sample += 1;
        }

        let n_feature = features.len();
        let name_to_index = Self::build_index(&features);

        Ok(Self {
            name_to_index,
            features,
            target: Vec::new(),
            weights: None,
            n_sample,
            n_feature,
        })
    }


    /// Use the feature column named `target` as the target column.
    /// The column is removed from the feature set.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| OrdBoostError::UnknownColumn(target.to_string()))?;

        self.target = self.features.remove(pos).values;
        self.n_feature -= 1;
        self.name_to_index = Self::build_index(&self.features);

        Ok(self)
    }


    /// Attach per-example weights.
    /// `weights` must have one entry per example,
    /// every entry must be non-negative,
    /// and at least one entry must be positive.
    pub fn set_weights(mut self, weights: Vec<f64>) -> Result<Self> {
        if weights.len() != self.n_sample {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "{} weights given for {} examples",
                weights.len(), self.n_sample,
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(OrdBoostError::InvalidParameter {
                name: "weights",
                reason: "weights must be finite and non-negative".to_string(),
            });
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(OrdBoostError::InvalidParameter {
                name: "weights",
                reason: "at least one weight must be positive".to_string(),
            });
        }
        self.weights = Some(weights);
        Ok(self)
    }


    /// Mark the features at the given indices as categorical.
    pub fn set_cat_features(mut self, indices: &[usize]) -> Result<Self> {
        let n_feature = self.n_feature;
        for &i in indices {
            let feat = self.features.get_mut(i)
                .ok_or_else(|| OrdBoostError::InvalidParameter {
                    name: "cat_features",
                    reason: format!(
                        "index {i} is out of range for {n_feature} features"
                    ),
                })?;
            feat.categorical = true;
        }
        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice over the target values.
    /// Empty until a target is attached.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the per-example weights, if any were attached.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }


    /// Returns a slice over the feature columns.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature at column index `i`.
    pub fn feature(&self, i: usize) -> &Feature {
        &self.features[i]
    }


    /// Returns the feature with the given name, if it exists.
    pub fn feature_by_name(&self, name: &str) -> Option<&Feature> {
        self.name_to_index.get(name).map(|&i| &self.features[i])
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<String> {
        self.features.iter()
            .map(|feat| feat.name().to_string())
            .collect()
    }


    /// Returns the indices of the categorical features.
    pub fn cat_feature_indices(&self) -> Vec<usize> {
        self.features.iter()
            .enumerate()
            .filter_map(|(i, feat)| feat.is_categorical().then_some(i))
            .collect()
    }


    /// Build a new pool out of the examples at the given row indices.
    /// Rows may repeat; order is preserved.
    pub fn subset(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| {
                let values = rows.iter()
                    .map(|&i| feat.values[i])
                    .collect::<Vec<_>>();
                Feature {
                    name: feat.name.clone(),
                    values,
                    categorical: feat.categorical,
                }
            })
            .collect::<Vec<_>>();

        let target = if self.target.is_empty() {
            Vec::new()
        } else {
            rows.iter().map(|&i| self.target[i]).collect()
        };

        let weights = self.weights.as_ref().map(|w| {
            rows.iter().map(|&i| w[i]).collect::<Vec<_>>()
        });

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            weights,
            n_sample: rows.len(),
            n_feature: self.n_feature,
        }
    }


    fn build_index(features: &[Feature]) -> HashMap<String, usize> {
        features.iter()
            .enumerate()
            .map(|(i, feat)| (feat.name().to_string(), i))
            .collect::<HashMap<_, _>>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy_pool() -> Pool {
        let columns = vec![
            ("x0", vec![0.0, 1.0, 2.0, 3.0]),
            ("x1", vec![1.0, 0.0, 1.0, 0.0]),
        ];
        Pool::from_columns(columns, vec![-1.0, -1.0, 1.0, 1.0]).unwrap()
    }


    #[test]
    fn from_columns_builds_shape() {
        let pool = toy_pool();
        assert_eq!(pool.shape(), (4, 2));
        assert_eq!(pool.feature(0).name(), "x0");
        assert_eq!(pool.feature_by_name("x1").unwrap().value(2), 1.0);
    }


    #[test]
    fn ragged_columns_are_rejected() {
        let columns = vec![("x0", vec![0.0, 1.0])];
        let err = Pool::from_columns(columns, vec![1.0]).unwrap_err();
        assert!(matches!(err, OrdBoostError::ShapeMismatch(_)));
    }


    #[test]
    fn set_target_moves_a_column() {
        let columns = vec![
            ("x0", vec![0.0, 1.0]),
            ("label", vec![-1.0, 1.0]),
        ];
        let pool = Pool::from_columns(columns, Vec::new()).unwrap();
        let pool = pool.set_target("label").unwrap();
        assert_eq!(pool.shape(), (2, 1));
        assert_eq!(pool.target(), &[-1.0, 1.0]);
        assert!(pool.feature_by_name("label").is_none());
    }


    #[test]
    fn unknown_target_column_errors() {
        let err = toy_pool().set_target("nope").unwrap_err();
        assert!(matches!(err, OrdBoostError::UnknownColumn(_)));
    }


    #[test]
    fn weights_must_match_sample_count() {
        let err = toy_pool().set_weights(vec![1.0]).unwrap_err();
        assert!(matches!(err, OrdBoostError::ShapeMismatch(_)));
    }


    #[test]
    fn all_zero_weights_are_rejected() {
        let err = toy_pool().set_weights(vec![0.0; 4]).unwrap_err();
        assert!(matches!(err, OrdBoostError::InvalidParameter { .. }));
    }


    #[test]
    fn subset_picks_rows_in_order() {
        let pool = toy_pool();
        let sub = pool.subset(&[3, 0]);
        assert_eq!(sub.shape(), (2, 2));
        assert_eq!(sub.feature(0).values(), &[3.0, 0.0]);
        assert_eq!(sub.target(), &[1.0, -1.0]);
    }
}
