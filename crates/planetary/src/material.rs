//! Material taxonomy
//!
//! A closed set of materials with fixed reference densities. Every mass in
//! the engine is tagged with exactly one of these; unknown inputs collapse
//! onto [`Material::Other`] rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference material densities in kg/m³ (solid phase at standard
/// conditions; gases use their STP values).
const DENSITY_FE: f64 = 7874.0;
const DENSITY_SI: f64 = 2330.0;
const DENSITY_O: f64 = 1429.0;
const DENSITY_MG: f64 = 1738.0;
const DENSITY_CA: f64 = 1550.0;
const DENSITY_C: f64 = 2267.0;
const DENSITY_H: f64 = 71.0;
const DENSITY_N: f64 = 1.25;
const DENSITY_S: f64 = 3000.0;
const DENSITY_RARE_EARTH: f64 = 6000.0;
const DENSITY_OTHER: f64 = 3000.0;

/// A material category recognized by the accretion engine.
///
/// The set is closed: element distributions, particle tags, deposits, and
/// well compositions all draw from these variants and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Material {
    Fe,
    Si,
    O,
    Mg,
    Ca,
    C,
    H,
    N,
    S,
    RareEarth,
    Other,
}

impl Material {
    /// All variants, in declaration order.
    pub const ALL: [Material; 11] = [
        Material::Fe,
        Material::Si,
        Material::O,
        Material::Mg,
        Material::Ca,
        Material::C,
        Material::H,
        Material::N,
        Material::S,
        Material::RareEarth,
        Material::Other,
    ];

    /// Reference density in kg/m³.
    pub fn density(&self) -> f64 {
        match self {
            Material::Fe => DENSITY_FE,
            Material::Si => DENSITY_SI,
            Material::O => DENSITY_O,
            Material::Mg => DENSITY_MG,
            Material::Ca => DENSITY_CA,
            Material::C => DENSITY_C,
            Material::H => DENSITY_H,
            Material::N => DENSITY_N,
            Material::S => DENSITY_S,
            Material::RareEarth => DENSITY_RARE_EARTH,
            Material::Other => DENSITY_OTHER,
        }
    }

    /// Relative hardness on an open scale, derived from density.
    pub fn hardness(&self) -> f64 {
        self.density() / 1000.0
    }

    /// Short symbol used in serialized records and distribution inputs.
    pub fn symbol(&self) -> &'static str {
        match self {
            Material::Fe => "Fe",
            Material::Si => "Si",
            Material::O => "O",
            Material::Mg => "Mg",
            Material::Ca => "Ca",
            Material::C => "C",
            Material::H => "H",
            Material::N => "N",
            Material::S => "S",
            Material::RareEarth => "RareEarth",
            Material::Other => "Other",
        }
    }

    /// Parses a material symbol. Unrecognized symbols map to `Other` so
    /// externally supplied distributions can never fail to load.
    pub fn from_symbol(symbol: &str) -> Material {
        match symbol {
            "Fe" => Material::Fe,
            "Si" => Material::Si,
            "O" => Material::O,
            "Mg" => Material::Mg,
            "Ca" => Material::Ca,
            "C" => Material::C,
            "H" => Material::H,
            "N" => Material::N,
            "S" => Material::S,
            "RareEarth" => Material::RareEarth,
            _ => Material::Other,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
