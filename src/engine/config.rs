use crate::foundation::error::{AquaglowError, AquaglowResult};

/// Engine tuning constants, loadable from JSON at startup.
///
/// Defaults reproduce the reference effect; every field is optional in the
/// serialized form.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pixels sampled per image.
    pub sample_count: usize,
    /// Palette size (k for clustering).
    pub cluster_count: usize,
    /// Fixed k-means iteration count; no convergence check.
    pub kmeans_iterations: usize,
    /// Opacity moved toward its target per frame.
    pub opacity_step: f64,
    /// Elapsed-time units added per frame. Motion is frame-count-driven,
    /// independent of wall-clock frame delta.
    pub time_step: f64,
    /// Damping factor applied to the palette average in the base tint.
    pub tint_damping: f64,
    /// Offset toward white added to the damped palette average.
    pub tint_offset: f64,
    /// Seed for the sampling and jitter RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_count: 150,
            cluster_count: 10,
            kmeans_iterations: 10,
            opacity_step: 0.02,
            time_step: 16.0,
            tint_damping: 0.3,
            tint_offset: 180.0,
            seed: 0xA94A_8FE5_CCB1_9BA6,
        }
    }
}

impl EngineConfig {
    /// Check field ranges before engine construction.
    pub fn validate(&self) -> AquaglowResult<()> {
        if self.sample_count == 0 {
            return Err(AquaglowError::validation("sample_count must be > 0"));
        }
        if self.cluster_count == 0 {
            return Err(AquaglowError::validation("cluster_count must be > 0"));
        }
        if self.cluster_count > self.sample_count {
            return Err(AquaglowError::validation(
                "cluster_count must be <= sample_count",
            ));
        }
        if !(self.opacity_step > 0.0 && self.opacity_step <= 1.0) {
            return Err(AquaglowError::validation("opacity_step must be in (0, 1]"));
        }
        if self.time_step <= 0.0 {
            return Err(AquaglowError::validation("time_step must be > 0"));
        }
        Ok(())
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> AquaglowResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AquaglowError::validation(format!("config parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
