use serde::{Serialize, Deserialize};

use std::fmt;


// Beyond this point `exp` would overflow long before mattering,
// so the softplus is just its argument.
const SOFTPLUS_CUTOFF: f64 = 30.0;
const PROB_CLAMP: f64 = 1e-12;


/// The type of loss a model minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    /// Least squared error, for regression.
    SquaredError,


    /// Logistic loss over labels in `{-1, +1}`,
    /// for binary classification.
    Logistic,
}


impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loss = match self {
            Self::SquaredError => "Squared error loss",
            Self::Logistic => "Logistic loss",
        };
        write!(f, "{loss}")
    }
}


impl Loss {
    /// The constant score that minimizes the loss
    /// before any boosting round has run.
    pub(crate) fn init_score(&self, target: &[f64], weights: &[f64]) -> f64 {
        let total = weights.iter().sum::<f64>();
        match self {
            Self::SquaredError => {
                target.iter()
                    .zip(weights)
                    .map(|(y, w)| w * y)
                    .sum::<f64>()
                    / total
            },
            Self::Logistic => {
                let positive = target.iter()
                    .zip(weights)
                    .filter_map(|(y, w)| (*y > 0.0).then_some(w))
                    .sum::<f64>();
                let p = (positive / total)
                    .clamp(PROB_CLAMP, 1.0 - PROB_CLAMP);
                (p / (1.0 - p)).ln()
            },
        }
    }


    /// The negative gradient of the loss at the current predictions.
    /// The next weak hypothesis is fit to these values.
    pub(crate) fn neg_gradients(
        &self,
        target: &[f64],
        predictions: &[f64],
    ) -> Vec<f64>
    {
        match self {
            Self::SquaredError => {
                target.iter()
                    .zip(predictions)
                    .map(|(y, p)| y - p)
                    .collect::<Vec<_>>()
            },
            Self::Logistic => {
                target.iter()
                    .zip(predictions)
                    .map(|(y, f)| y / (1.0 + (y * f).exp()))
                    .collect::<Vec<_>>()
            },
        }
    }


    /// The weighted mean loss of the predictions.
    pub(crate) fn eval(
        &self,
        target: &[f64],
        predictions: &[f64],
        weights: &[f64],
    ) -> f64
    {
        let total = weights.iter().sum::<f64>();
        let sum = match self {
            Self::SquaredError => {
                target.iter()
                    .zip(predictions)
                    .zip(weights)
                    .map(|((y, p), w)| w * (y - p).powi(2))
                    .sum::<f64>()
            },
            Self::Logistic => {
                target.iter()
                    .zip(predictions)
                    .zip(weights)
                    .map(|((y, f), w)| w * softplus(-y * f))
                    .sum::<f64>()
            },
        };
        sum / total
    }
}


/// Numerically stable `ln(1 + exp(z))`.
fn softplus(z: f64) -> f64 {
    if z > SOFTPLUS_CUTOFF {
        z
    } else {
        z.exp().ln_1p()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_error_init_is_weighted_mean() {
        let target = [1.0, 3.0];
        let bias = Loss::SquaredError.init_score(&target, &[1.0, 1.0]);
        assert!((bias - 2.0).abs() < 1e-12);

        let bias = Loss::SquaredError.init_score(&target, &[3.0, 1.0]);
        assert!((bias - 1.5).abs() < 1e-12);
    }


    #[test]
    fn logistic_init_is_log_odds() {
        let target = [1.0, 1.0, 1.0, -1.0];
        let bias = Loss::Logistic.init_score(&target, &[1.0; 4]);
        assert!((bias - (3f64).ln()).abs() < 1e-12);
    }


    #[test]
    fn logistic_gradients_vanish_on_confident_predictions() {
        let grads = Loss::Logistic.neg_gradients(&[1.0], &[1_000.0]);
        assert!(grads[0].abs() < 1e-12);

        let grads = Loss::Logistic.neg_gradients(&[1.0], &[-1_000.0]);
        assert!((grads[0] - 1.0).abs() < 1e-12);
    }


    #[test]
    fn softplus_is_stable_for_large_arguments() {
        assert_eq!(softplus(1_000.0), 1_000.0);
        assert!((softplus(0.0) - std::f64::consts::LN_2).abs() < 1e-12);
    }
}
