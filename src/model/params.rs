use serde::{Serialize, Deserialize};

use super::loss::Loss;


/// Parameters shared by [`train`](crate::train),
/// [`cv`](crate::cv), and the model builders.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainParams {
    /// The number of boosting rounds.
    /// Default is `100`.
    pub iterations: usize,
    /// The shrinkage applied to every weak hypothesis.
    /// Must be in `(0, 1]`. Default is `0.1`.
    pub learning_rate: f64,
    /// The loss to minimize.
    /// Default is [`Loss::SquaredError`].
    pub loss: Loss,
}


impl Default for TrainParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            learning_rate: 0.1,
            loss: Loss::SquaredError,
        }
    }
}
