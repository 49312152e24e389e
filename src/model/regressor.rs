use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::fstr::FstrType;
use crate::pool::Pool;
use super::base::OrdBoost;
use super::loss::Loss;


/// A regressor predicting real-valued targets.
///
/// Wraps [`OrdBoost`] with the squared error loss.
/// # Example
/// ```no_run
/// use ordboost::{OrdBoostRegressor, Pool};
///
/// let pool = Pool::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("price")
///     .unwrap();
///
/// let mut reg = OrdBoostRegressor::new().learning_rate(0.05);
/// reg.fit(&pool).unwrap();
/// let predictions = reg.predict(&pool).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdBoostRegressor {
    inner: OrdBoost,
}


impl OrdBoostRegressor {
    /// Construct a regressor with default parameters.
    pub fn new() -> Self {
        Self { inner: OrdBoost::new().loss(Loss::SquaredError) }
    }


    /// Set the number of boosting rounds.
    /// This method panics if `iterations` is zero.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.inner = self.inner.iterations(iterations);
        self
    }


    /// Set the learning rate.
    /// This method panics if the rate is outside `(0, 1]`.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.inner = self.inner.learning_rate(rate);
        self
    }


    /// Fit the regressor.
    pub fn fit(&mut self, pool: &Pool) -> Result<()> {
        self.inner.fit(pool)
    }


    /// The predicted value for every example.
    pub fn predict(&self, pool: &Pool) -> Result<Vec<f64>> {
        self.inner.predict_raw(pool)
    }


    /// Per-feature importance values.
    /// See [`OrdBoost::feature_importance`].
    pub fn feature_importance(
        &self,
        fstr_type: FstrType,
        pool: Option<&Pool>,
    ) -> Result<Vec<f64>>
    {
        self.inner.feature_importance(fstr_type, pool)
    }


    /// The training loss recorded after each boosting round.
    pub fn eval_history(&self) -> &[f64] {
        self.inner.eval_history()
    }


    /// A view of the underlying base model.
    pub fn model(&self) -> &OrdBoost {
        &self.inner
    }


    /// Unwrap into the underlying base model.
    pub fn into_model(self) -> OrdBoost {
        self.inner
    }
}


impl Default for OrdBoostRegressor {
    fn default() -> Self {
        Self::new()
    }
}
