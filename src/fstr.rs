//! Feature strength (importance) kinds a model can report.

use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::error::OrdBoostError;


/// The kind of feature importance to compute.
///
/// Passed to
/// [`OrdBoost::feature_importance`](crate::OrdBoost::feature_importance).
/// The names follow the CatBoost spelling so that strings coming from
/// configuration written for that library parse unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FstrType {
    /// How much, on average, the prediction changes when the
    /// feature value changes.
    /// Computed from the split gains recorded during training;
    /// requires no data.
    PredictionValuesChange,


    /// How much the loss on a given pool degrades when the
    /// contribution of the feature is removed from the model.
    LossFunctionChange,


    /// Pairwise interaction strength between features.
    Interaction,


    /// Per-example SHAP values.
    ShapValues,
}


impl fmt::Display for FstrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PredictionValuesChange => "PredictionValuesChange",
            Self::LossFunctionChange => "LossFunctionChange",
            Self::Interaction => "Interaction",
            Self::ShapValues => "ShapValues",
        };
        write!(f, "{name}")
    }
}


impl FromStr for FstrType {
    type Err = OrdBoostError;


    /// Parses case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fstr_type = match s.to_lowercase().as_str() {
            "predictionvalueschange" => Self::PredictionValuesChange,
            "lossfunctionchange" => Self::LossFunctionChange,
            "interaction" => Self::Interaction,
            "shapvalues" => Self::ShapValues,
            _ => return Err(OrdBoostError::UnknownFstrType(s.to_string())),
        };
        Ok(fstr_type)
    }
}
