use std::fmt;

use log::warn;

use crate::error::ConfigError;

/// Typed form of the `dims` operator argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DimsConfig {
    pub dims: Vec<i64>,
}

impl DimsConfig {
    pub fn new(dims: Vec<i64>) -> Self {
        DimsConfig { dims }
    }
}

impl From<Vec<i64>> for DimsConfig {
    fn from(dims: Vec<i64>) -> Self {
        DimsConfig { dims }
    }
}

impl From<&[i64]> for DimsConfig {
    fn from(dims: &[i64]) -> Self {
        DimsConfig {
            dims: dims.to_vec(),
        }
    }
}

/// Validated axis ids: non-empty, strictly increasing, all non-negative.
///
/// Built once when an operator is constructed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSet {
    axes: Vec<usize>,
    duplicates_removed: usize,
}

impl AxisSet {
    /// Sorts and deduplicates `raw_axes`.
    ///
    /// Repeated ids are not an error: they are collapsed and a warning is logged.
    ///
    /// # Errors
    /// * `ConfigError::Empty` if `raw_axes` is empty.
    /// * `ConfigError::NegativeAxis` if the smallest id is negative.
    pub fn build(raw_axes: &[i64]) -> Result<Self, ConfigError> {
        if raw_axes.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut sorted = raw_axes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let duplicates_removed = raw_axes.len() - sorted.len();
        if duplicates_removed > 0 {
            warn!("Parameter `dims` has repeated dimensions.");
        }

        // Sorted, so checking the front covers every element.
        let first = sorted[0];
        if first < 0 {
            return Err(ConfigError::NegativeAxis { axis: first });
        }

        let axes = sorted
            .into_iter()
            .map(|axis| usize::try_from(axis).map_err(|_| ConfigError::NegativeAxis { axis }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AxisSet {
            axes,
            duplicates_removed,
        })
    }

    pub fn from_config(config: &DimsConfig) -> Result<Self, ConfigError> {
        Self::build(&config.dims)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Largest axis id, `None` only for an empty set.
    pub fn max_axis(&self) -> Option<usize> {
        self.axes.last().copied()
    }

    pub fn contains(&self, axis: usize) -> bool {
        self.axes.binary_search(&axis).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.axes.iter().copied()
    }

    /// How many repeated ids were collapsed during `build`.
    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }
}

impl fmt::Display for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.axes)
    }
}

#[cfg(test)]
#[path = "axes_test.rs"]
mod tests;
