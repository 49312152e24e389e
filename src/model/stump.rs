use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::cmp::Ordering;

use crate::pool::Pool;


/// A depth-one regression tree:
/// one split on one feature, a constant value on each side.
///
/// Examples with a feature value strictly below `threshold`
/// fall to `left`; everything else falls to `right`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Stump {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
    pub(crate) left: f64,
    pub(crate) right: f64,
    pub(crate) gain: f64,
}


impl Stump {
    /// Fit a stump to the residuals by exhaustive split search,
    /// minimizing the weighted squared error.
    /// Candidate thresholds are the midpoints between
    /// consecutive distinct feature values;
    /// features are searched in parallel.
    pub(crate) fn fit(pool: &Pool, residuals: &[f64], weights: &[f64])
        -> Self
    {
        let best = pool.features()
            .par_iter()
            .enumerate()
            .filter_map(|(j, feat)| {
                best_split(feat.values(), residuals, weights)
                    .map(|split| (j, split))
            })
            .max_by(|(_, a), (_, b)| {
                a.gain.partial_cmp(&b.gain).unwrap_or(Ordering::Equal)
            });

        match best {
            Some((feature, split)) => Self {
                feature,
                threshold: split.threshold,
                left: split.left,
                right: split.right,
                gain: split.gain,
            },
            // Every feature is constant, or no split has positive
            // weight on both sides.
            // Predict the weighted mean residual everywhere.
            None => {
                let total = weights.iter().sum::<f64>();
                let mean = if total > 0.0 {
                    residuals.iter()
                        .zip(weights)
                        .map(|(r, w)| w * r)
                        .sum::<f64>()
                        / total
                } else {
                    0.0
                };
                Self {
                    feature: 0,
                    threshold: f64::NEG_INFINITY,
                    left: mean,
                    right: mean,
                    gain: 0.0,
                }
            },
        }
    }


    /// The stump's output for a single feature value.
    pub(crate) fn predict(&self, x: f64) -> f64 {
        if x < self.threshold { self.left } else { self.right }
    }
}


struct Split {
    threshold: f64,
    left: f64,
    right: f64,
    gain: f64,
}


/// The best split of one feature, or `None` if the feature
/// takes a single value.
///
/// With `S_w`, `S_wr` the weight and weighted-residual sums of a side,
/// the weighted squared error of predicting the side mean is minimized
/// exactly when `S_wr^2 / S_w` summed over both sides is maximized,
/// so only prefix sums over the sorted feature are needed.
fn best_split(xs: &[f64], residuals: &[f64], weights: &[f64])
    -> Option<Split>
{
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let mut order = (0..n).collect::<Vec<_>>();
    order.sort_by(|&i, &j| {
        xs[i].partial_cmp(&xs[j]).unwrap_or(Ordering::Equal)
    });

    let total_w = weights.iter().sum::<f64>();
    let total_wr = residuals.iter()
        .zip(weights)
        .map(|(r, w)| w * r)
        .sum::<f64>();
    let base = total_wr.powi(2) / total_w;

    let mut left_w = 0.0;
    let mut left_wr = 0.0;
    let mut best: Option<Split> = None;

    for k in 0..n - 1 {
        let i = order[k];
        left_w += weights[i];
        left_wr += weights[i] * residuals[i];

        let (lo, hi) = (xs[i], xs[order[k + 1]]);
        if lo == hi {
            continue;
        }

        let right_w = total_w - left_w;
        let right_wr = total_wr - left_wr;

        // A side whose weights sum to zero has no defined mean;
        // the candidate would poison the search with NaN.
        if left_w <= 0.0 || right_w <= 0.0 {
            continue;
        }
        let gain =
            left_wr.powi(2) / left_w
            + right_wr.powi(2) / right_w
            - base;

        if best.as_ref().map_or(true, |b| gain > b.gain) {
            best = Some(Split {
                threshold: 0.5 * (lo + hi),
                left: left_wr / left_w,
                right: right_wr / right_w,
                gain,
            });
        }
    }

    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_step_function_at_the_jump() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let rs = [-1.0, -1.0, 1.0, 1.0];
        let ws = [1.0; 4];

        let split = best_split(&xs, &rs, &ws).unwrap();
        assert!((split.threshold - 1.5).abs() < 1e-12);
        assert!((split.left - (-1.0)).abs() < 1e-12);
        assert!((split.right - 1.0).abs() < 1e-12);
        assert!(split.gain > 0.0);
    }


    #[test]
    fn constant_feature_has_no_split() {
        let xs = [2.0, 2.0, 2.0];
        let rs = [1.0, -1.0, 0.0];
        assert!(best_split(&xs, &rs, &[1.0; 3]).is_none());
    }


    #[test]
    fn weights_move_the_side_means() {
        let xs = [0.0, 0.0, 1.0];
        let rs = [2.0, 0.0, 5.0];
        let ws = [3.0, 1.0, 1.0];

        let split = best_split(&xs, &rs, &ws).unwrap();
        assert!((split.left - 1.5).abs() < 1e-12);
        assert!((split.right - 5.0).abs() < 1e-12);
    }


    #[test]
    fn zero_weight_side_is_never_chosen() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let rs = [9.0, -1.0, -1.0, 1.0];
        // The first example carries no weight, so the split
        // isolating it has an undefined left mean.
        let ws = [0.0, 1.0, 1.0, 1.0];

        let split = best_split(&xs, &rs, &ws).unwrap();
        assert!(split.threshold.is_finite());
        assert!(split.left.is_finite());
        assert!(split.right.is_finite());
        assert!(split.gain.is_finite());
        assert!(split.threshold > 0.5);
    }


    #[test]
    fn all_zero_weights_fall_back_to_a_zero_stump() {
        let pool = Pool::from_columns(
            vec![("x", vec![0.0, 1.0])],
            vec![1.0, 2.0],
        ).unwrap();

        let stump = Stump::fit(&pool, &[1.0, 2.0], &[0.0, 0.0]);
        assert!(stump.predict(0.0).is_finite());
        assert_eq!(stump.predict(0.0), 0.0);
    }


    #[test]
    fn fit_falls_back_on_all_constant_features() {
        let pool = Pool::from_columns(
            vec![("x", vec![1.0, 1.0])],
            vec![0.0, 4.0],
        ).unwrap();

        let stump = Stump::fit(&pool, &[0.0, 4.0], &[1.0, 1.0]);
        assert_eq!(stump.gain, 0.0);
        assert!((stump.predict(1.0) - 2.0).abs() < 1e-12);
        assert!((stump.predict(-10.0) - 2.0).abs() < 1e-12);
    }
}
