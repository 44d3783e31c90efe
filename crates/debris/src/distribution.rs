//! Element distributions
//!
//! Weighted material mixes used to seed debris fields. Entries are kept in
//! insertion order and sampled with a cumulative walk, so both the weights
//! and their order are part of the deterministic contract. Weights that
//! under-sum fall through to [`Material::Other`]; they are never
//! renormalized.

use planetary::Material;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered list of (material, weight) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDistribution {
    entries: Vec<(Material, f64)>,
}

impl ElementDistribution {
    /// Builds a distribution from material/weight pairs, kept in the given
    /// order. Non-finite or negative weights are dropped.
    pub fn from_pairs(pairs: &[(Material, f64)]) -> Self {
        let entries = pairs
            .iter()
            .copied()
            .filter(|(_, weight)| weight.is_finite() && *weight >= 0.0)
            .collect();
        ElementDistribution { entries }
    }

    /// Builds a distribution from symbol/weight pairs, mapping unknown
    /// symbols to `Other`. Intended for externally supplied mixes.
    pub fn from_symbols(pairs: &[(&str, f64)]) -> Self {
        let mapped: Vec<(Material, f64)> = pairs
            .iter()
            .map(|(symbol, weight)| (Material::from_symbol(symbol), *weight))
            .collect();
        Self::from_pairs(&mapped)
    }

    /// The default mix used when no distribution is supplied: an
    /// iron-silicate rocky blend.
    pub fn default_mix() -> Self {
        Self::from_pairs(&[
            (Material::Fe, 0.35),
            (Material::Si, 0.25),
            (Material::O, 0.20),
            (Material::Mg, 0.10),
            (Material::Ca, 0.05),
            (Material::Other, 0.05),
        ])
    }

    pub fn iron_rich() -> Self {
        Self::from_pairs(&[
            (Material::Fe, 0.60),
            (Material::Si, 0.15),
            (Material::O, 0.10),
            (Material::Mg, 0.05),
            (Material::RareEarth, 0.05),
            (Material::Other, 0.05),
        ])
    }

    pub fn carbon_rich() -> Self {
        Self::from_pairs(&[
            (Material::C, 0.40),
            (Material::Si, 0.20),
            (Material::Fe, 0.15),
            (Material::O, 0.15),
            (Material::H, 0.05),
            (Material::Other, 0.05),
        ])
    }

    pub fn silicate_rich() -> Self {
        Self::from_pairs(&[
            (Material::Si, 0.45),
            (Material::O, 0.25),
            (Material::Mg, 0.15),
            (Material::Fe, 0.10),
            (Material::Ca, 0.05),
        ])
    }

    pub fn volatile_rich() -> Self {
        Self::from_pairs(&[
            (Material::O, 0.30),
            (Material::H, 0.25),
            (Material::C, 0.15),
            (Material::N, 0.15),
            (Material::Si, 0.10),
            (Material::Fe, 0.05),
        ])
    }

    pub fn rare_earth() -> Self {
        Self::from_pairs(&[
            (Material::RareEarth, 0.30),
            (Material::Fe, 0.25),
            (Material::Si, 0.20),
            (Material::O, 0.15),
            (Material::S, 0.05),
            (Material::Other, 0.05),
        ])
    }

    /// Looks up a named preset. Unrecognized labels get the default mix.
    pub fn for_context(label: &str) -> Self {
        match label {
            "iron_rich" => Self::iron_rich(),
            "carbon_rich" => Self::carbon_rich(),
            "silicate_rich" => Self::silicate_rich(),
            "volatile_rich" => Self::volatile_rich(),
            "rare_earth" => Self::rare_earth(),
            _ => Self::default_mix(),
        }
    }

    /// Draws one material. A single uniform draw is walked against the
    /// cumulative weights in entry order; if the weights under-sum, the
    /// walk falls through to `Other`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Material {
        let roll = rng.random::<f64>();
        let mut cumulative = 0.0;
        for (material, weight) in &self.entries {
            cumulative += weight;
            if roll < cumulative {
                return *material;
            }
        }
        Material::Other
    }

    /// Sum of all weights. May be below 1.0; the gap is `Other` mass.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Material, f64)] {
        &self.entries
    }
}

impl Default for ElementDistribution {
    fn default() -> Self {
        Self::default_mix()
    }
}
