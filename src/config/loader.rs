//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! rules from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PricingRules;

/// Loads and provides access to the pricing rules.
///
/// # File Layout
///
/// ```text
/// config/pricing.yaml
/// ├── eligibility   # age and license thresholds
/// ├── season        # high-season month window
/// ├── surcharges    # weekend, racer, license and seasonal surcharges
/// └── discounts     # long-rental discount
/// ```
///
/// Every section and field is optional; omitted values keep their defaults.
///
/// # Example
///
/// ```no_run
/// use rental_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing.yaml")?;
/// println!("Minimum age: {}", loader.rules().eligibility.minimum_age);
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: PricingRules,
}

impl ConfigLoader {
    /// Loads pricing rules from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped values (`ConfigParseError`)
    /// - The loaded rules are inconsistent (`InvalidRules`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules = Self::load_yaml(path.as_ref())?;
        rules.validate()?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded pricing rules");

        Ok(Self { rules })
    }

    /// Wraps an already-built rule table, validating it first.
    pub fn from_rules(rules: PricingRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml(path: &Path) -> EngineResult<PricingRules> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pricing rules.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }
}
