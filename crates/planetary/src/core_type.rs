//! Core-type classification
//!
//! Assigns a planet exactly one of eight core archetypes from its bulk
//! composition and the state of its inner core. The cascade is first-match:
//! rule order matters and every planet falls through to `Iron` at worst.

use crate::composition::Composition;
use crate::layer::PlanetaryLayer;
use crate::material::Material;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight core archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreType {
    Molten,
    Iron,
    Diamond,
    LivingWood,
    Ice,
    Water,
    Void,
    Dual,
}

impl CoreType {
    /// Classifies a core from the bulk composition, the stratified inner
    /// core, and whether the formation environment suggested a hollow
    /// interior.
    ///
    /// # Arguments
    /// * `composition` - bulk per-material masses of the settled field
    /// * `inner_core` - the innermost stratified layer
    /// * `hollow_hint` - environmental hint that the interior may be hollow
    pub fn classify(
        composition: &Composition,
        inner_core: &PlanetaryLayer,
        hollow_hint: bool,
    ) -> CoreType {
        let fe = composition.fraction(Material::Fe);
        let c = composition.fraction(Material::C);
        let h = composition.fraction(Material::H);
        let o = composition.fraction(Material::O);
        let volatiles = c + h + o;

        let temperature = inner_core.temperature;
        let density = inner_core.density;

        if temperature > 4000.0 && density < 8000.0 {
            return CoreType::Molten;
        }
        if fe > 0.3 && density > 10000.0 {
            return CoreType::Iron;
        }
        if c > 0.2 && density > 12000.0 {
            return CoreType::Diamond;
        }
        if volatiles > 0.4 && temperature > 2000.0 && temperature < 4000.0 {
            return CoreType::LivingWood;
        }
        if h + o > 0.5 {
            if temperature < 273.0 {
                return CoreType::Ice;
            }
            if temperature < 373.0 {
                return CoreType::Water;
            }
        }
        if density < 5000.0 || hollow_hint {
            return CoreType::Void;
        }
        if fe > 0.15 && volatiles > 0.2 {
            return CoreType::Dual;
        }

        // Fallbacks for compositions that dodge every primary rule
        if fe > 0.2 {
            return CoreType::Iron;
        }
        if c > 0.15 {
            return CoreType::Diamond;
        }
        if temperature > 3500.0 {
            return CoreType::Molten;
        }
        CoreType::Iron
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoreType::Molten => "molten",
            CoreType::Iron => "iron",
            CoreType::Diamond => "diamond",
            CoreType::LivingWood => "living_wood",
            CoreType::Ice => "ice",
            CoreType::Water => "water",
            CoreType::Void => "void",
            CoreType::Dual => "dual",
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
