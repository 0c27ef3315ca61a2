//! Configuration loading functionality.
//!
//! This module provides the [`PayrollConfig`] type, loadable from a YAML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Engine configuration.
///
/// The one tunable is the rank depth of "high earner" queries: an employee is
/// a high earner when their salary is among the top `high_earner_ranks`
/// distinct values (dense ranking).
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::load("./config/payroll.yaml")?;
/// assert!(config.high_earner_ranks >= 1);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Number of distinct salary values that count as "high earner" ranks.
    #[serde(default = "default_high_earner_ranks")]
    pub high_earner_ranks: usize,
}

fn default_high_earner_ranks() -> usize {
    3
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            high_earner_ranks: default_high_earner_ranks(),
        }
    }
}

impl PayrollConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// `ConfigNotFound` if the file cannot be read, `ConfigParseError` if it
    /// contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
