//! Declarative configuration of dependences.
//!
//! A [`DependenceConfig`] names a variant and the parameter values to build it
//! with. It is the form in which model descriptions are stored and exchanged;
//! building the actual variant goes through the family's registry (for bounds,
//! [`crate::bound::from_config`]) so the usual parameter validation applies.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dependence::Dependence;
use crate::error::Result;

/// The serialized description of a single dependence variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependenceConfig {
    /// Variant name within its family, e.g. `"collapsing_linear"`
    pub name: String,

    /// Parameter values; declared defaults fill in anything left out
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl DependenceConfig {
    /// Create a configuration for the named variant
    pub fn new<I, K>(name: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.to_string(),
            parameters: parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Capture the variant name and parameter values of a built dependence
    ///
    /// # Examples
    ///
    /// ```
    /// use ddm_rs::bound::BoundConstant;
    /// use ddm_rs::config::DependenceConfig;
    ///
    /// let bound = BoundConstant::with_b(1.5).unwrap();
    /// let config = DependenceConfig::from_dependence(&bound);
    /// assert_eq!(config.name, "constant");
    /// assert_eq!(config.parameters["B"], 1.5);
    /// ```
    pub fn from_dependence(dependence: &dyn Dependence) -> Self {
        Self::new(dependence.variant_name(), dependence.parameters().iter())
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DependenceConfig = serde_json::from_str(json)?;
        debug!(name = %config.name, "parsed dependence configuration");
        Ok(config)
    }

    /// Write the configuration to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, self)?;
        info!(path = %path.as_ref().display(), name = %self.name, "saved dependence configuration");
        Ok(())
    }

    /// Read a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = Self::from_json(&contents)?;
        info!(path = %path.as_ref().display(), name = %config.name, "loaded dependence configuration");
        Ok(config)
    }
}
