//! One-shot training entry point.

use crate::error::Result;
use crate::model::{OrdBoost, TrainParams};
use crate::pool::Pool;


/// Train a model on the pool in one call.
///
/// Builds an [`OrdBoost`] from the parameters, fits it,
/// and returns it.
/// # Example
/// ```no_run
/// use ordboost::{train, Pool};
/// use ordboost::model::{Loss, TrainParams};
///
/// let pool = Pool::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("y")
///     .unwrap();
///
/// let params = TrainParams {
///     iterations: 200,
///     learning_rate: 0.05,
///     loss: Loss::SquaredError,
/// };
/// let model = train(&pool, &params).unwrap();
/// ```
pub fn train(pool: &Pool, params: &TrainParams) -> Result<OrdBoost> {
    let mut model = OrdBoost::with_params(*params);
    model.fit(pool)?;
    Ok(model)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_a_fitted_model() {
        let x = (0..10).map(f64::from).collect::<Vec<_>>();
        let y = x.clone();
        let pool = Pool::from_columns(vec![("x", x)], y).unwrap();

        let params = TrainParams {
            iterations: 5,
            ..TrainParams::default()
        };
        let model = train(&pool, &params).unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.eval_history().len(), 5);
    }
}
