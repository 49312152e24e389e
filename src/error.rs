//! The crate-wide error type.
//!
//! Every fallible public operation in this crate returns
//! [`OrdBoostError`] through the [`Result`] alias below.

use std::io;

use polars::prelude::PolarsError;
use thiserror::Error;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, OrdBoostError>;


/// The error type returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum OrdBoostError {
    /// An underlying I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),


    /// A `polars` operation failed,
    /// e.g. a target column with a non-`f64` dtype.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),


    /// A CSV cell could not be parsed as a number.
    #[error("failed to parse {text:?} as a number at line {line}")]
    CsvParse {
        /// One-based line number of the offending row.
        line: usize,
        /// The cell content that failed to parse.
        text: String,
    },


    /// A parameter was set to a value outside its valid range.
    #[error("invalid value for parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },


    /// Two pieces of data that must agree in shape do not.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),


    /// A column name was not found in the pool.
    #[error("no column named {0:?}")]
    UnknownColumn(String),


    /// A prediction or importance query hit a model
    /// that has not been fit yet.
    #[error("the model has not been fit")]
    NotFitted,


    /// A string did not name any known feature importance type.
    #[error("unknown feature importance type {0:?}")]
    UnknownFstrType(String),


    /// The requested operation is recognized but not implemented.
    #[error("{0} is not supported yet")]
    Unsupported(&'static str),


    /// Model (de)serialization failed.
    #[error("model serialization error: {0}")]
    Json(#[from] serde_json::Error),


    /// Rendering a metric plot failed.
    #[cfg(feature = "widget")]
    #[error("visualization error: {0}")]
    Widget(String),
}
