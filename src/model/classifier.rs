use serde::{Serialize, Deserialize};

use crate::error::{OrdBoostError, Result};
use crate::fstr::FstrType;
use crate::pool::Pool;
use super::base::OrdBoost;
use super::loss::Loss;


/// A binary classifier over labels in `{-1, +1}`.
///
/// Wraps [`OrdBoost`] with the logistic loss and exposes
/// probability and label predictions instead of raw scores.
/// # Example
/// ```no_run
/// use ordboost::{OrdBoostClassifier, Pool};
///
/// let pool = Pool::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
///
/// let mut clf = OrdBoostClassifier::new().iterations(100);
/// clf.fit(&pool).unwrap();
/// let labels = clf.predict(&pool).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdBoostClassifier {
    inner: OrdBoost,
}


impl OrdBoostClassifier {
    /// Construct a classifier with default parameters.
    pub fn new() -> Self {
        Self { inner: OrdBoost::new().loss(Loss::Logistic) }
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


    /// Fit the classifier.
    /// Every target value in the pool must be `-1.0` or `+1.0`.
    pub fn fit(&mut self, pool: &Pool) -> Result<()> {
        let bad = pool.target()
            .iter()
            .find(|&&y| y != -1.0 && y != 1.0);
        if let Some(&y) = bad {
            return Err(OrdBoostError::InvalidParameter {
                name: "target",
                reason: format!(
                    "classification targets must be -1 or +1, found {y}"
                ),
            });
        }
        self.inner.fit(pool)
    }


    /// The probability of the `+1` label for every example.
    pub fn predict_proba(&self, pool: &Pool) -> Result<Vec<f64>> {
        let scores = self.inner.predict_raw(pool)?;
        let probabilities = scores.into_iter()
            .map(|f| 1.0 / (1.0 + (-f).exp()))
            .collect();
        Ok(probabilities)
    }


    /// The predicted label, `-1.0` or `+1.0`, for every example.
    pub fn predict(&self, pool: &Pool) -> Result<Vec<f64>> {
        let scores = self.inner.predict_raw(pool)?;
        let labels = scores.into_iter()
            .map(|f| if f < 0.0 { -1.0 } else { 1.0 })
            .collect();
        Ok(labels)
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


impl Default for OrdBoostClassifier {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn separable_pool() -> Pool {
        let x = (0..30).map(f64::from).collect::<Vec<_>>();
        let y = x.iter()
            .map(|&v| if v < 15.0 { -1.0 } else { 1.0 })
            .collect::<Vec<_>>();
        Pool::from_columns(vec![("x", x)], y).unwrap()
    }


    #[test]
    fn separable_data_is_classified_perfectly() {
        let pool = separable_pool();
        let mut clf = OrdBoostClassifier::new().iterations(30);
        clf.fit(&pool).unwrap();

        let labels = clf.predict(&pool).unwrap();
        assert_eq!(labels, pool.target().to_vec());
    }


    #[test]
    fn probabilities_lie_in_the_unit_interval() {
        let pool = separable_pool();
        let mut clf = OrdBoostClassifier::new().iterations(10);
        clf.fit(&pool).unwrap();

        let probabilities = clf.predict_proba(&pool).unwrap();
        assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[29] > 0.5);
    }


    #[test]
    fn non_binary_targets_are_rejected() {
        let pool = Pool::from_columns(
            vec![("x", vec![0.0, 1.0])],
            vec![-1.0, 3.0],
        ).unwrap();
        let err = OrdBoostClassifier::new().fit(&pool).unwrap_err();
        assert!(matches!(err, OrdBoostError::InvalidParameter { .. }));
    }
}
