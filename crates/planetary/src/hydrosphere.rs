//! Hydrosphere synthesis
//!
//! Derives an optional water layer from the bulk volatile inventory and
//! the crust temperature. Water forms stoichiometrically from available
//! hydrogen and oxygen; the crust temperature decides whether it sits as
//! liquid ocean or surface ice.

use crate::composition::Composition;
use crate::material::Material;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum water mass fraction for a hydrosphere to form at all.
const MIN_WATER_FRACTION: f64 = 0.01;

/// Water content of a hydrosphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydroComposition {
    /// Water mass in kg.
    #[serde(rename = "H2O")]
    pub h2o: f64,
}

/// Liquid or frozen surface water layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hydrosphere {
    /// Fraction of the surface covered, in [0.1, 0.95].
    pub coverage: f64,
    /// Average depth in meters.
    pub average_depth: f64,
    pub composition: HydroComposition,
}

/// Synthesizes a hydrosphere from the bulk composition, if the volatile
/// inventory and crust temperature allow one.
///
/// Returns `None` for dry or hot planets. The RNG is only drawn from when
/// a hydrosphere actually forms, so dry planets consume no randomness.
pub fn synthesize_hydrosphere<R: Rng>(
    composition: &Composition,
    crust_temperature: f64,
    radius: f64,
    rng: &mut R,
) -> Option<Hydrosphere> {
    let h = composition.fraction(Material::H);
    let o = composition.fraction(Material::O);

    // Water is H2O: two hydrogens per oxygen, by mass fraction convention
    let water_fraction = h.min(o / 2.0);
    if water_fraction <= MIN_WATER_FRACTION {
        return None;
    }

    let total_mass = composition.total_mass();
    let water_mass = water_fraction * total_mass;

    if crust_temperature > 273.0 && crust_temperature < 373.0 {
        let coverage = (water_fraction * 10.0 + rng.random::<f64>() * 0.2).clamp(0.1, 0.95);
        let surface_area = 4.0 * std::f64::consts::PI * radius * radius;
        let average_depth = if surface_area > 0.0 {
            (water_mass * 0.001 / surface_area).clamp(100.0, 11000.0)
        } else {
            100.0
        };
        return Some(Hydrosphere {
            coverage,
            average_depth,
            composition: HydroComposition { h2o: water_mass },
        });
    }

    if crust_temperature < 273.0 {
        let coverage = (water_fraction * 10.0 + rng.random::<f64>() * 0.2).clamp(0.1, 0.95);
        return Some(Hydrosphere {
            coverage,
            average_depth: 1000.0,
            composition: HydroComposition { h2o: water_mass },
        });
    }

    // Too hot to hold surface water
    None
}
