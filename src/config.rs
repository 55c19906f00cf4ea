use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::fourier::decompose::DecomposerConfig;
use crate::path::sampler::SamplerConfig;
use crate::trail::recorder::TrailConfig;

/// Complete configuration for sampling, decomposition and trail recording.
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpicycleConfig {
    /// Path flattening and normalization.
    pub sampler: SamplerConfig,
    /// DFT band and execution.
    pub decomposer: DecomposerConfig,
    /// Trail pacing for renderers.
    pub trail: TrailConfig,
}

impl EpicycleConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> EpicycleResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| EpicycleError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> EpicycleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EpicycleError::serde(e.to_string()))
    }

    /// Validate every section.
    pub fn validate(&self) -> EpicycleResult<()> {
        self.sampler.validate()?;
        self.decomposer.validate()?;
        self.trail.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
