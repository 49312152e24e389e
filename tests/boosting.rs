//! End-to-end tests for `train` and `cv`.

use ordboost::{cv, train, FstrType, Pool};
use ordboost::model::{Loss, TrainParams};


fn regression_pool() -> Pool {
    let x0 = (0..60).map(f64::from).collect::<Vec<_>>();
    let x1 = (0..60).map(|i| f64::from(i % 3)).collect::<Vec<_>>();
    let y = x0.iter()
        .zip(&x1)
        .map(|(a, b)| if *a < 30.0 { b + 1.0 } else { b + 6.0 })
        .collect::<Vec<_>>();
    Pool::from_columns(vec![("x0", x0), ("x1", x1)], y).unwrap()
}


#[test]
fn train_produces_a_model_that_beats_the_constant_baseline() {
    let pool = regression_pool();
    let params = TrainParams {
        iterations: 150,
        learning_rate: 0.2,
        loss: Loss::SquaredError,
    };

    let model = train(&pool, &params).unwrap();

    let history = model.eval_history();
    assert_eq!(history.len(), 150);
    // The first round already improves on the constant fit,
    // and the last round improves on the first.
    assert!(history[149] < history[0]);
    assert!(model.evaluate(&pool).unwrap() < 0.5);
}


#[test]
fn importance_singles_out_the_informative_feature() {
    let pool = regression_pool();
    let params = TrainParams {
        iterations: 60,
        learning_rate: 0.2,
        loss: Loss::SquaredError,
    };
    let model = train(&pool, &params).unwrap();

    let importance = model
        .feature_importance(FstrType::PredictionValuesChange, None)
        .unwrap();
    // `x0` carries the big jump; `x1` only a small offset.
    assert!(importance[0] > importance[1]);

    let loss_change = model
        .feature_importance(FstrType::LossFunctionChange, Some(&pool))
        .unwrap();
    assert!(loss_change[0] > loss_change[1]);
    // Dropping the dominant feature must hurt.
    assert!(loss_change[0] > 0.0);
}


#[test]
fn cv_generalizes_on_an_easy_problem() {
    let pool = regression_pool();
    let params = TrainParams {
        iterations: 80,
        learning_rate: 0.2,
        loss: Loss::SquaredError,
    };

    let summary = cv(&pool, &params, 5).unwrap();
    assert_eq!(summary.train_losses.len(), 5);
    assert_eq!(summary.test_losses.len(), 5);
    assert!(summary.mean_train().is_finite());
    // The target ranges over [1, 8]; guessing its mean would give a
    // loss above 6. Five folds of an easy problem must do far better.
    assert!(summary.mean_test() < 3.0);
}


#[test]
fn classification_end_to_end_through_train() {
    let x = (0..40).map(f64::from).collect::<Vec<_>>();
    let y = x.iter()
        .map(|&v| if v < 20.0 { -1.0 } else { 1.0 })
        .collect::<Vec<_>>();
    let pool = Pool::from_columns(vec![("x", x)], y).unwrap();

    let params = TrainParams {
        iterations: 40,
        learning_rate: 0.3,
        loss: Loss::Logistic,
    };
    let model = train(&pool, &params).unwrap();

    let scores = model.predict_raw(&pool).unwrap();
    let correct = scores.iter()
        .zip(pool.target())
        .filter(|(f, y)| f.signum() == y.signum())
        .count();
    assert_eq!(correct, 40);
}
