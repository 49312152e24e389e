use std::path::Path;

use super::pool_struct::Pool;
use crate::error::{OrdBoostError, Result};


/// A builder that reads a CSV file into a [`Pool`].
/// # Example
/// ```no_run
/// use ordboost::pool::PoolBuilder;
///
/// let pool = PoolBuilder::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .cat_features(&["color"])
///     .read()
///     .unwrap();
/// ```
pub struct PoolBuilder<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
    cat_features: Vec<String>,
}


impl<P, S> PoolBuilder<P, S> {
    /// Construct a new instance of [`PoolBuilder`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
            cat_features: Vec::new(),
        }
    }


    /// Set the flag whether the file has a header row or not.
    /// Default is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Name the columns that hold categorical values.
    pub fn cat_features<T: ToString>(mut self, names: &[T]) -> Self {
        self.cat_features = names.iter()
            .map(|n| n.to_string())
            .collect();
        self
    }
}


impl<P, S> Default for PoolBuilder<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> PoolBuilder<P, S>
    where P: AsRef<Path>,
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> PoolBuilder<P, S>
    where S: AsRef<str>,
{
    /// Set the column name used as the target.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> PoolBuilder<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Reads the file based on the arguments and returns a [`Pool`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Pool> {
        let file = self.file.ok_or(OrdBoostError::InvalidParameter {
            name: "file",
            reason: "no file name was given".to_string(),
        })?;

        let mut pool = Pool::from_csv(file, self.has_header)?;

        if let Some(target) = self.target {
            pool = pool.set_target(target.as_ref())?;
        }

        if !self.cat_features.is_empty() {
            let indices = self.cat_features.iter()
                .map(|name| {
                    pool.name_to_index
                        .get(name)
                        .copied()
                        .ok_or_else(|| {
                            OrdBoostError::UnknownColumn(name.clone())
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            pool = pool.set_cat_features(&indices)?;
        }

        Ok(pool)
    }
}
