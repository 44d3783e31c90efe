//! Atmosphere synthesis
//!
//! Derives an optional gas envelope from the bulk volatile inventory.
//! Molecular budgets come from simple stoichiometry over the C/H/O/N
//! fractions; pressure scales with surface gravity. Fully deterministic,
//! no randomness involved.

use crate::composition::Composition;
use crate::material::Material;
use serde::{Deserialize, Serialize};

/// Gravitational constant, m³/(kg·s²).
const G: f64 = 6.67430e-11;

/// Minimum total volatile fraction for an atmosphere to be retained.
const MIN_VOLATILE_FRACTION: f64 = 0.001;

/// Normalized gas mix. Fractions each lie in [0, 1] and sum to 1 within
/// 1e-6, with `other` absorbing the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasFractions {
    #[serde(rename = "N2")]
    pub n2: f64,
    #[serde(rename = "O2")]
    pub o2: f64,
    #[serde(rename = "CO2")]
    pub co2: f64,
    #[serde(rename = "H2O")]
    pub h2o: f64,
    #[serde(rename = "CH4")]
    pub ch4: f64,
    #[serde(rename = "Other")]
    pub other: f64,
}

/// Gas envelope of a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atmosphere {
    /// Surface pressure in Pa.
    pub pressure: f64,
    pub composition: GasFractions,
    /// Envelope thickness in meters.
    pub thickness: f64,
}

/// Synthesizes an atmosphere from the bulk composition, if the volatile
/// inventory supports one. Returns `None` for volatile-poor planets.
pub fn synthesize_atmosphere(composition: &Composition, radius: f64) -> Option<Atmosphere> {
    let c = composition.fraction(Material::C);
    let h = composition.fraction(Material::H);
    let o = composition.fraction(Material::O);
    let n = composition.fraction(Material::N);

    // Stoichiometric budgets over the volatile fractions. CO2 consumes
    // oxygen first; O2 is what oxygen remains after that, never negative.
    let ch4 = c.min(h / 4.0);
    let co2 = c.min(o / 2.0);
    let o2 = ((o - 2.0 * co2) / 2.0).max(0.0);
    let h2o = h.min(o / 2.0);

    let total_volatiles = n + o2 + co2 + h2o * 0.1 + ch4;
    if total_volatiles <= MIN_VOLATILE_FRACTION {
        return None;
    }

    let total_mass = composition.total_mass();
    let gravity = if radius > 0.0 {
        G * total_mass / (radius * radius)
    } else {
        0.0
    };

    // Scale-height pressure model: sea-level air density times a nominal
    // 8500 m scale height under local gravity
    let pressure = (gravity * 1.225 * 8500.0).clamp(1e3, 1e6);
    let thickness = (pressure / 10.0).clamp(5000.0, 100000.0);

    let frac = |gas: f64| (gas / total_volatiles).clamp(0.0, 1.0);
    let n2 = frac(n);
    let o2 = frac(o2);
    let co2 = frac(co2);
    let h2o = frac(h2o * 0.1);
    let ch4 = frac(ch4);
    let other = (1.0 - n2 - o2 - co2 - h2o - ch4).max(0.0);

    Some(Atmosphere {
        pressure,
        composition: GasFractions {
            n2,
            o2,
            co2,
            h2o,
            ch4,
            other,
        },
        thickness,
    })
}
