use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::error::{OrdBoostError, Result};
use crate::fstr::FstrType;
use crate::pool::Pool;
use super::loss::Loss;
use super::params::TrainParams;
use super::stump::Stump;


/// The base gradient boosted model.
///
/// An `OrdBoost` model is an initial constant score plus a sum of
/// shrunken depth-one regression trees, fit by steepest descent on
/// the configured loss.
/// Use [`OrdBoostClassifier`](super::OrdBoostClassifier) or
/// [`OrdBoostRegressor`](super::OrdBoostRegressor) unless you need
/// raw scores or a hand-picked loss.
/// # Example
/// ```no_run
/// use ordboost::{OrdBoost, Pool};
/// use ordboost::model::Loss;
///
/// let pool = Pool::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("y")
///     .unwrap();
///
/// let mut model = OrdBoost::new()
///     .iterations(200)
///     .learning_rate(0.05)
///     .loss(Loss::SquaredError);
/// model.fit(&pool).unwrap();
/// let scores = model.predict_raw(&pool).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdBoost {
    params: TrainParams,
    bias: f64,
    stumps: Vec<Stump>,
    eval_history: Vec<f64>,
    feature_names: Vec<String>,
    fitted: bool,
}


impl OrdBoost {
    /// Construct a model with default parameters.
    pub fn new() -> Self {
        Self::with_params(TrainParams::default())
    }


    /// Construct a model from the given parameters.
    pub fn with_params(params: TrainParams) -> Self {
        Self {
            params,
            bias: 0.0,
            stumps: Vec::new(),
            eval_history: Vec::new(),
            feature_names: Vec::new(),
            fitted: false,
        }
    }


    /// Set the number of boosting rounds.
    /// This method panics if `iterations` is zero.
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "`iterations` must be positive");
        self.params.iterations = iterations;
        self
    }


    /// Set the learning rate.
    /// This method panics if the rate is outside `(0, 1]`.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        assert!(
            0.0 < rate && rate <= 1.0,
            "`learning_rate` must be in (0, 1]",
        );
        self.params.learning_rate = rate;
        self
    }


    /// Set the loss to minimize.
    pub fn loss(mut self, loss: Loss) -> Self {
        self.params.loss = loss;
        self
    }


    /// The current parameters.
    pub fn params(&self) -> &TrainParams {
        &self.params
    }


    /// Whether [`OrdBoost::fit`] has completed on this model.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }


    /// Fit the model to the given pool.
    /// Re-fitting discards the previous ensemble.
    pub fn fit(&mut self, pool: &Pool) -> Result<()> {
        let (n_sample, n_feature) = pool.shape();
        if n_sample == 0 || n_feature == 0 {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "cannot fit on a pool of shape ({n_sample}, {n_feature})"
            )));
        }

        let target = pool.target();
        if target.len() != n_sample {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "the pool has no usable target \
                 ({} target values for {n_sample} examples); \
                 attach one with `Pool::set_target`",
                target.len(),
            )));
        }

        let weights = pool.weights()
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![1.0; n_sample]);

        let loss = self.params.loss;
        self.bias = loss.init_score(target, &weights);
        self.stumps = Vec::with_capacity(self.params.iterations);
        self.eval_history = Vec::with_capacity(self.params.iterations);

        let mut predictions = vec![self.bias; n_sample];

        for _ in 0..self.params.iterations {
            let residuals = loss.neg_gradients(target, &predictions);
            let stump = Stump::fit(pool, &residuals, &weights);

            let column = pool.feature(stump.feature).values();
            predictions.iter_mut()
                .zip(column)
                .for_each(|(p, &x)| {
                    *p += self.params.learning_rate * stump.predict(x);
                });

            self.eval_history.push(loss.eval(target, &predictions, &weights));
            self.stumps.push(stump);
        }

        self.feature_names = pool.feature_names();
        self.fitted = true;
        Ok(())
    }


    /// Raw (untransformed) scores for every example in the pool.
    /// The pool's columns must match the ones the model was fit on,
    /// by name and order.
    pub fn predict_raw(&self, pool: &Pool) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(OrdBoostError::NotFitted);
        }

        let (n_sample, n_feature) = pool.shape();
        if n_feature != self.feature_names.len() {
            return Err(OrdBoostError::ShapeMismatch(format!(
                "the model was fit on {} features, the pool has {n_feature}",
                self.feature_names.len(),
            )));
        }
        if pool.feature_names() != self.feature_names {
            return Err(OrdBoostError::ShapeMismatch(
                "the pool's feature names or their order differ \
                 from the ones the model was fit on".to_string()
            ));
        }

        let lr = self.params.learning_rate;
        let scores = (0..n_sample)
            .into_par_iter()
            .map(|i| {
                self.bias
                    + self.stumps.iter()
                        .map(|s| lr * s.predict(pool.feature(s.feature).value(i)))
                        .sum::<f64>()
            })
            .collect::<Vec<_>>();

        Ok(scores)
    }


    /// The mean loss of the model on the given pool.
    pub fn evaluate(&self, pool: &Pool) -> Result<f64> {
        let target = pool.target();
        if target.len() != pool.shape().0 {
            return Err(OrdBoostError::ShapeMismatch(
                "the pool has no usable target".to_string()
            ));
        }

        let predictions = self.predict_raw(pool)?;
        let weights = pool.weights()
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![1.0; target.len()]);

        Ok(self.params.loss.eval(target, &predictions, &weights))
    }


    /// The training loss recorded after each boosting round.
    pub fn eval_history(&self) -> &[f64] {
        &self.eval_history[..]
    }


    /// The names of the features the model was fit on,
    /// in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Per-feature importance values of the requested kind.
    ///
    /// [`FstrType::PredictionValuesChange`] is computed from the split
    /// gains recorded during training and needs no pool; pass `None`.
    /// [`FstrType::LossFunctionChange`] measures, for each feature,
    /// how much the loss on `pool` degrades when every tree split on
    /// that feature is dropped from the ensemble.
    /// `PredictionValuesChange` values are normalized to sum to 100.
    pub fn feature_importance(
        &self,
        fstr_type: FstrType,
        pool: Option<&Pool>,
    ) -> Result<Vec<f64>>
    {
        if !self.fitted {
            return Err(OrdBoostError::NotFitted);
        }

        match fstr_type {
            FstrType::PredictionValuesChange => {
                let mut importance = vec![0.0; self.feature_names.len()];
                for stump in &self.stumps {
                    importance[stump.feature] += stump.gain;
                }
                let total = importance.iter().sum::<f64>();
                if total > 0.0 {
                    importance.iter_mut()
                        .for_each(|v| *v *= 100.0 / total);
                }
                Ok(importance)
            },
            FstrType::LossFunctionChange => {
                let pool = pool.ok_or(OrdBoostError::InvalidParameter {
                    name: "pool",
                    reason: "LossFunctionChange requires a pool".to_string(),
                })?;
                self.loss_function_change(pool)
            },
            FstrType::Interaction => {
                Err(OrdBoostError::Unsupported("interaction importance"))
            },
            FstrType::ShapValues => {
                Err(OrdBoostError::Unsupported("SHAP values"))
            },
        }
    }


    /// Save the model as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }


    /// Load a model saved by [`OrdBoost::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let model = serde_json::from_str(&json)?;
        Ok(model)
    }


    fn loss_function_change(&self, pool: &Pool) -> Result<Vec<f64>> {
        let full = self.evaluate(pool)?;
        let target = pool.target();
        let weights = pool.weights()
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![1.0; target.len()]);
        let lr = self.params.learning_rate;

        let importance = (0..self.feature_names.len())
            .into_par_iter()
            .map(|j| {
                let predictions = (0..pool.shape().0)
                    .map(|i| {
                        self.bias
                            + self.stumps.iter()
                                .filter(|s| s.feature != j)
                                .map(|s| {
                                    let x = pool.feature(s.feature).value(i);
                                    lr * s.predict(x)
                                })
                                .sum::<f64>()
                    })
                    .collect::<Vec<_>>();
                let without =
                    self.params.loss.eval(target, &predictions, &weights);
                without - full
            })
            .collect::<Vec<_>>();

        Ok(importance)
    }
}


impl Default for OrdBoost {
    fn default() -> Self {
        Self::new()
    }
}
