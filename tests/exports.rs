//! Tests for the crate's curated public surface.

use ordboost::{
    FeaturesData,
    FstrType,
    Pool,
    OrdBoost,
    OrdBoostClassifier,
    OrdBoostRegressor,
    OrdBoostError,
    EXPORTS,
    VERSION,
};
use ordboost::cross_validation::CvSummary;
use ordboost::error::Result;
use ordboost::model::TrainParams;


const MANDATORY: [&str; 9] = [
    "FeaturesData",
    "FstrType",
    "Pool",
    "OrdBoost",
    "OrdBoostClassifier",
    "OrdBoostRegressor",
    "OrdBoostError",
    "cv",
    "train",
];


#[test]
fn version_is_a_nonempty_string() {
    assert!(!VERSION.is_empty());
}


#[test]
fn mandatory_names_come_first_in_fixed_order() {
    assert!(EXPORTS.len() >= MANDATORY.len());
    assert_eq!(&EXPORTS[..MANDATORY.len()], &MANDATORY[..]);
}


#[cfg(feature = "widget")]
#[test]
fn widget_name_is_appended_last() {
    assert_eq!(EXPORTS.len(), MANDATORY.len() + 1);
    assert_eq!(*EXPORTS.last().unwrap(), "MetricVisualizer");
}


#[cfg(not(feature = "widget"))]
#[test]
fn widget_name_is_absent_without_the_feature() {
    assert_eq!(EXPORTS.len(), MANDATORY.len());
    assert!(!EXPORTS.contains(&"MetricVisualizer"));
}


#[test]
fn every_mandatory_name_is_usable_from_the_root() {
    // The two entry points, referenced through the crate root.
    let _cv: fn(&Pool, &TrainParams, usize) -> Result<CvSummary> =
        ordboost::cv;
    let _train: fn(&Pool, &TrainParams) -> Result<OrdBoost> =
        ordboost::train;

    // The types, constructed through the crate root.
    let data = FeaturesData::new(vec![vec![1.0, 2.0]], Vec::new()).unwrap();
    assert_eq!(data.num_row(), 2);

    let fstr_type = "PredictionValuesChange".parse::<FstrType>().unwrap();
    assert_eq!(fstr_type, FstrType::PredictionValuesChange);

    let pool = Pool::from_columns(
        vec![("x", vec![0.0, 1.0])],
        vec![-1.0, 1.0],
    ).unwrap();
    assert_eq!(pool.shape(), (2, 1));

    let _ = OrdBoost::new();
    let _ = OrdBoostClassifier::new();
    let _ = OrdBoostRegressor::new();

    let err: OrdBoostError = "bogus".parse::<FstrType>().unwrap_err();
    assert!(matches!(err, OrdBoostError::UnknownFstrType(_)));
}


#[cfg(feature = "widget")]
#[test]
fn widget_symbol_is_usable_from_the_root() {
    use ordboost::MetricVisualizer;

    let mut viz = MetricVisualizer::new().title("check");
    viz.add_series("series", &[1.0, 0.5]);
}
