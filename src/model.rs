//! Gradient boosted models over a [`Pool`](crate::Pool).

// Provides the training parameter struct.
pub(crate) mod params;
// Provides the loss functions.
pub(crate) mod loss;
// Provides the depth-one regression tree used as the weak learner.
pub(crate) mod stump;
// Provides the base model.
pub(crate) mod base;
// Provides the task-specific wrappers.
pub(crate) mod classifier;
pub(crate) mod regressor;


pub use params::TrainParams;
pub use loss::Loss;
pub use base::OrdBoost;
pub use classifier::OrdBoostClassifier;
pub use regressor::OrdBoostRegressor;
