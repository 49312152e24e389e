#![warn(missing_docs)]

//!
//! A gradient boosting crate with a CatBoost-style public surface.
//!
//! The crate root is a thin aggregation layer:
//! it re-exports a fixed, curated set of symbols from the internal
//! modules and publishes that set as [`EXPORTS`].
//! All substantive code lives in the modules below;
//! consumers are expected to reach everything they need
//! through the names bound here.
//!
//! The curated surface consists of:
//!
//! - [`FeaturesData`], a raw column container for mixed
//!   numerical/categorical data,
//! - [`FstrType`], the kinds of feature importance a model can report,
//! - [`Pool`], the dataset type every model trains on,
//! - [`OrdBoost`], the base boosted model,
//!   with [`OrdBoostClassifier`] and [`OrdBoostRegressor`]
//!   as task-specific wrappers,
//! - [`OrdBoostError`], the crate-wide error type,
//! - [`cv`] and [`train`], the two top-level entry points,
//! - [`VERSION`], this crate's version string.
//!
//! When the crate is built with the `widget` feature,
//! [`MetricVisualizer`] is additionally bound and appended
//! to [`EXPORTS`] as its last entry.
//! Building without the feature silently omits both;
//! nothing else in the crate depends on it.

pub mod error;
pub mod fstr;
pub mod features_data;
pub mod pool;
pub mod model;
pub mod cross_validation;
pub mod train;
pub mod version;

#[cfg(feature = "widget")]
pub mod widget;


pub use features_data::FeaturesData;
pub use fstr::FstrType;
pub use pool::Pool;
pub use model::{OrdBoost, OrdBoostClassifier, OrdBoostRegressor};
pub use error::OrdBoostError;
pub use cross_validation::cv;
pub use train::train;
pub use version::VERSION;

#[cfg(feature = "widget")]
pub use widget::MetricVisualizer;


/// The names this crate treats as its curated public surface,
/// in a fixed, stable order.
/// `"MetricVisualizer"` appears as the last entry
/// if and only if the `widget` feature is enabled.
#[cfg(feature = "widget")]
pub const EXPORTS: &[&str] = &[
    "FeaturesData",
    "FstrType",
    "Pool",
    "OrdBoost",
    "OrdBoostClassifier",
    "OrdBoostRegressor",
    "OrdBoostError",
    "cv",
    "train",
    "MetricVisualizer",
];

/// The names this crate treats as its curated public surface,
/// in a fixed, stable order.
/// `"MetricVisualizer"` appears as the last entry
/// if and only if the `widget` feature is enabled.
#[cfg(not(feature = "widget"))]
pub const EXPORTS: &[&str] = &[
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
