//! Pipeline configuration
//!
//! Everything `simulate` needs in one record. Only the seed is required;
//! the rest defaults to an Earth-mass rocky field.

use debris::field::{DEFAULT_PARTICLE_COUNT, DEFAULT_TARGET_MASS};
use debris::ElementDistribution;
use serde::{Deserialize, Serialize};

/// Hints from the formation environment. Carries only what the engine
/// consumes: a context label and the material names the environment
/// emphasizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalHints {
    /// Context label, e.g. `"iron_rich"` or `"hollow"`. Doubles as a
    /// preset-distribution selector when no explicit distribution is set.
    pub context: String,
    /// Material symbols the environment calls out. Unknown symbols are
    /// tolerated and fold into `Other` when used.
    #[serde(default)]
    pub materials: Vec<String>,
}

impl EnvironmentalHints {
    /// Whether the context suggests a hollow interior.
    pub fn is_hollow(&self) -> bool {
        self.context == "hollow"
    }
}

/// Full configuration for one accretion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionConfig {
    pub seed: String,
    /// Explicit material mix for the debris field. `None` selects a
    /// preset by hint context, or the default rocky mix.
    #[serde(default)]
    pub element_distribution: Option<ElementDistribution>,
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    /// Total field mass in kg.
    #[serde(default = "default_target_mass")]
    pub target_mass: f64,
    #[serde(default)]
    pub hints: Option<EnvironmentalHints>,
}

fn default_particle_count() -> usize {
    DEFAULT_PARTICLE_COUNT
}

fn default_target_mass() -> f64 {
    DEFAULT_TARGET_MASS
}

impl AccretionConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        AccretionConfig {
            seed: seed.into(),
            element_distribution: None,
            particle_count: DEFAULT_PARTICLE_COUNT,
            target_mass: DEFAULT_TARGET_MASS,
            hints: None,
        }
    }

    pub fn with_distribution(mut self, distribution: ElementDistribution) -> Self {
        self.element_distribution = Some(distribution);
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_target_mass(mut self, mass: f64) -> Self {
        self.target_mass = mass;
        self
    }

    pub fn with_hints(mut self, hints: EnvironmentalHints) -> Self {
        self.hints = Some(hints);
        self
    }

    /// The distribution the run will actually use: the explicit one if
    /// set, else the preset named by the hint context, else the default
    /// rocky mix.
    pub fn resolved_distribution(&self) -> ElementDistribution {
        if let Some(dist) = &self.element_distribution {
            return dist.clone();
        }
        match &self.hints {
            Some(hints) => ElementDistribution::for_context(&hints.context),
            None => ElementDistribution::default_mix(),
        }
    }
}
