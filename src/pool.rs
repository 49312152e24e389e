//! Struct [`Pool`] holds the dataset a model trains on.

// Provides the feature (column) struct.
pub(crate) mod feature;
// Provides the pool struct.
pub(crate) mod pool_struct;
// Provides a builder that reads a file into a pool.
pub(crate) mod pool_builder;


pub use feature::Feature;
pub use pool_struct::Pool;
pub use pool_builder::PoolBuilder;
