//! K-fold cross validation over a [`Pool`].

use rand::prelude::*;
use colored::Colorize;

use crate::error::{OrdBoostError, Result};
use crate::model::{OrdBoost, TrainParams};
use crate::pool::Pool;


const WIDTH: usize = 9;


/// A struct that generates train/test pool pairs and
/// runs one model per fold.
/// # Example
/// ```no_run
/// use ordboost::pool::PoolBuilder;
/// use ordboost::model::TrainParams;
/// use ordboost::cross_validation::CrossValidation;
///
/// let pool = PoolBuilder::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let summary = CrossValidation::new(&pool)
///     .n_folds(5)
///     .seed(777)
///     .verbose(true)
///     .run(&TrainParams::default())
///     .unwrap();
/// println!("mean test loss: {}", summary.mean_test());
/// ```
pub struct CrossValidation<'a> {
    n_folds: usize,
    seed: u64,
    verbose: bool,
    pool: &'a Pool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation`.
    #[inline]
    pub fn new(pool: &'a Pool) -> Self {
        Self {
            n_folds: 5,
            seed: 1234,
            verbose: false,
            pool,
        }
    }


    /// Set the number of folds.
    /// Default value is `5`.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Set the seed used to shuffle the examples.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints a line per fold.
    /// Default value is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Run cross validation with the given parameters.
    /// Trains one model per fold and collects
    /// the train/test losses into a [`CvSummary`].
    pub fn run(&self, params: &TrainParams) -> Result<CvSummary> {
        let n_sample = self.pool.shape().0;

        if self.n_folds < 2 {
            return Err(OrdBoostError::InvalidParameter {
                name: "n_folds",
                reason: format!(
                    "at least 2 folds are required, got {}", self.n_folds
                ),
            });
        }
        if self.n_folds > n_sample {
            return Err(OrdBoostError::InvalidParameter {
                name: "n_folds",
                reason: format!(
                    "{} folds requested for {n_sample} examples",
                    self.n_folds,
                ),
            });
        }

        let mut ix = (0..n_sample).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(self.seed);
        ix.shuffle(&mut rng);

        let mut train_losses = Vec::with_capacity(self.n_folds);
        let mut test_losses = Vec::with_capacity(self.n_folds);

        for fold in 0..self.n_folds {
            let (train, test) = self.fold_at(&ix, fold);

            if self.verbose {
                println!(
                    "{}    {}    {}",
                    format!("  [{: >3}'th fold]", fold + 1).bold().red(),
                    format!("[TRAIN {:>WIDTH$}]", train.shape().0)
                        .bold().green(),
                    format!("[TEST {:>WIDTH$}]", test.shape().0)
                        .bold().yellow(),
                );
            }

            let mut model = OrdBoost::with_params(*params);
            model.fit(&train)?;

            train_losses.push(model.evaluate(&train)?);
            test_losses.push(model.evaluate(&test)?);
        }

        Ok(CvSummary { train_losses, test_losses })
    }


    /// Returns the training/test pools for the `i`th fold.
    /// Fold sizes differ by at most one example.
    fn fold_at(&self, ix: &[usize], i: usize) -> (Pool, Pool) {
        let n_sample = ix.len();
        let base = n_sample / self.n_folds;
        let extra = n_sample % self.n_folds;

        // The first `extra` folds take one example more.
        let start = i * base + i.min(extra);
        let end = start + base + usize::from(i < extra);

        let test = &ix[start..end];
        let train = ix[..start].iter()
            .chain(&ix[end..])
            .copied()
            .collect::<Vec<_>>();

        (self.pool.subset(&train), self.pool.subset(test))
    }
}


/// Per-fold losses collected by a cross validation run.
#[derive(Debug, Clone)]
pub struct CvSummary {
    /// The training loss of each fold's model on its training pool.
    pub train_losses: Vec<f64>,
    /// The loss of each fold's model on its held-out pool.
    pub test_losses: Vec<f64>,
}


impl CvSummary {
    /// The mean training loss over all folds.
    pub fn mean_train(&self) -> f64 {
        mean(&self.train_losses)
    }


    /// The mean held-out loss over all folds.
    pub fn mean_test(&self) -> f64 {
        mean(&self.test_losses)
    }
}


fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}


/// Run k-fold cross validation over the pool.
///
/// Shuffles the examples with a fixed seed,
/// trains one model per fold with the given parameters,
/// and returns the per-fold losses.
/// Shorthand for [`CrossValidation::run`] with default settings;
/// use the builder for a custom seed or verbose reporting.
pub fn cv(pool: &Pool, params: &TrainParams, n_folds: usize)
    -> Result<CvSummary>
{
    CrossValidation::new(pool)
        .n_folds(n_folds)
        .run(params)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn linear_pool(n: usize) -> Pool {
        let x = (0..n).map(|i| i as f64).collect::<Vec<_>>();
        let y = x.iter().map(|v| 2.0 * v).collect::<Vec<_>>();
        Pool::from_columns(vec![("x", x)], y).unwrap()
    }


    #[test]
    fn folds_partition_the_sample() {
        let pool = linear_pool(23);
        let cv = CrossValidation::new(&pool).n_folds(5);
        let ix = (0..23).collect::<Vec<_>>();

        let mut total_test = 0;
        for i in 0..5 {
            let (train, test) = cv.fold_at(&ix, i);
            assert_eq!(train.shape().0 + test.shape().0, 23);
            total_test += test.shape().0;
        }
        assert_eq!(total_test, 23);
    }


    #[test]
    fn summary_has_one_entry_per_fold() {
        let pool = linear_pool(40);
        let params = TrainParams {
            iterations: 10,
            ..TrainParams::default()
        };

        let summary = cv(&pool, &params, 4).unwrap();
        assert_eq!(summary.train_losses.len(), 4);
        assert_eq!(summary.test_losses.len(), 4);
        assert!(summary.mean_train().is_finite());
        assert!(summary.mean_test().is_finite());
    }


    #[test]
    fn too_few_folds_is_an_error() {
        let pool = linear_pool(10);
        let err = cv(&pool, &TrainParams::default(), 1).unwrap_err();
        assert!(matches!(err, OrdBoostError::InvalidParameter { .. }));
    }


    #[test]
    fn more_folds_than_examples_is_an_error() {
        let pool = linear_pool(3);
        let err = cv(&pool, &TrainParams::default(), 4).unwrap_err();
        assert!(matches!(err, OrdBoostError::InvalidParameter { .. }));
    }
}
