//! JSON configuration for elimination runs

use crate::Result;
use crate::precision::Precision;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pivot search strategy used when the current pivot is exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotSearch {
    /// Row with the largest signed value in the pivot column.
    ///
    /// Negative candidates never win over a zero pivot; the larger-candidate
    /// exchange of the elimination loop then compares magnitudes.
    #[default]
    SignedMaximum,
    /// Row with the largest absolute value in the pivot column
    Magnitude,
}

/// Behaviour of back-substitution on a row with more than one unsolved unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionPolicy {
    /// Every extra unknown is fixed to `1` and folded into the right-hand side
    #[default]
    FreeVariable,
    /// Fail with [`crate::GaussError::InsufficientEquations`]
    Strict,
}

/// Elimination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussConfig {
    /// Enable partial pivoting
    pub pivoting: bool,
    /// Last column holds the right-hand side
    pub augmented: bool,
    /// Simulated precision budget
    pub precision: Precision,
    /// Pivot search used on an exact-zero pivot
    pub pivot_search: PivotSearch,
    /// Policy for under-determined rows
    pub substitution: SubstitutionPolicy,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivoting: true,
            augmented: true,
            precision: Precision::Exact,
            pivot_search: PivotSearch::SignedMaximum,
            substitution: SubstitutionPolicy::FreeVariable,
        }
    }
}

impl GaussConfig {
    /// Set partial pivoting
    pub fn with_pivoting(mut self, pivoting: bool) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Set whether the last column is a right-hand side
    pub fn with_augmented(mut self, augmented: bool) -> Self {
        self.augmented = augmented;
        self
    }

    /// Set the precision budget
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the pivot search strategy
    pub fn with_pivot_search(mut self, pivot_search: PivotSearch) -> Self {
        self.pivot_search = pivot_search;
        self
    }

    /// Set the substitution policy
    pub fn with_substitution(mut self, substitution: SubstitutionPolicy) -> Self {
        self.substitution = substitution;
        self
    }

    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: GaussConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
