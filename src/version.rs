//! Surfaces the crate version as a plain string constant.

/// The version of this crate, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
