//! Rate table loading functionality.
//!
//! This module provides the [`RateTableLoader`] type for loading rate tables
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, RateTableConfig};

/// Loads statutory rate tables from YAML files.
///
/// Each legal year lives in its own file; updating the engine for a new year
/// means adding a file, not changing code.
///
/// # File Layout
///
/// ```text
/// config/rates/
/// └── co-2026.yaml   # Colombian rates for 2026
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_cost_engine::config::RateTableLoader;
///
/// let rates = RateTableLoader::load("./config/rates/co-2026.yaml")?;
/// println!("Minimum wage: {}", rates.minimum_wage());
/// # Ok::<(), labor_cost_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RateTableLoader;

impl RateTableLoader {
    /// Loads and validates a rate table from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the validated [`RateTable`] on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The rates fail validation (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RateTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        debug!(path = %path_str, bytes = content.len(), "Read rate table file");

        let rates = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            year = rates.metadata().year,
            jurisdiction = %rates.metadata().jurisdiction,
            "Loaded rate table"
        );
        Ok(rates)
    }

    /// Parses and validates a rate table from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn parse(content: &str, source: &str) -> EngineResult<RateTable> {
        let config: RateTableConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        RateTable::new(config)
    }
}
