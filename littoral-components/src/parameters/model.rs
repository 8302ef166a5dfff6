//! Aggregate forward model configuration.

use crate::parameters::{ReflectanceParameters, SiopModelParameters};
use littoral_core::errors::{LittoralError, LittoralResult};
use serde::{Deserialize, Serialize};

/// Full configuration of the forward model.
///
/// Loadable from a TOML document; missing sections and keys fall back to
/// the documented defaults, so a configuration only needs to name what it
/// overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardModelParameters {
    pub reflectance: ReflectanceParameters,
    pub siop_model: SiopModelParameters,
}

impl ForwardModelParameters {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(text: &str) -> LittoralResult<Self> {
        toml::from_str(text)
            .map_err(|err| LittoralError::Error(format!("failed to parse parameters: {err}")))
    }
}
