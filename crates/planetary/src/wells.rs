//! Primordial wells
//!
//! Places energy-bearing sites in the crust of a freshly formed planet.
//! Well count scales with surface area, positions and types come from a
//! dedicated seed-scoped RNG stream, and each well gets an energy score
//! favoring warm, pressurized, volatile-rich conditions.

use crate::composition::Composition;
use crate::layer::PlanetaryLayer;
use crate::material::Material;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Bounds on how many wells a planet gets.
const MIN_WELLS: usize = 3;
const MAX_WELLS: usize = 12;

/// Minimum bulk fraction for a material to seed well chemistry.
const MIN_SOURCE_FRACTION: f64 = 0.01;

/// The kinds of primordial well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellType {
    ThermalVent,
    ChemicalPool,
    GeothermalSpring,
    MineralRich,
}

/// Where a well sits: surface coordinates plus depth into the crust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellLocation {
    /// Degrees, in [-90, 90].
    pub latitude: f64,
    /// Degrees, in [-180, 180].
    pub longitude: f64,
    /// Meters below the surface.
    pub depth: f64,
}

/// A single primordial well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimordialWell {
    pub id: String,
    pub location: WellLocation,
    #[serde(rename = "type")]
    pub well_type: WellType,
    /// Local temperature in K.
    pub temperature: f64,
    /// Local pressure in Pa.
    pub pressure: f64,
    /// Masses of the materials concentrated at the well, in kg.
    pub composition: BTreeMap<Material, f64>,
    /// Habitability-adjacent energy score in [0, 1].
    pub energy_level: f64,
}

/// Generates the primordial wells for a planet.
///
/// Count is `floor(surface_area * 1e-10 + U(0,5))` clamped to [3, 12].
/// Each well draws latitude, longitude, depth, and type from the RNG in
/// that order, so the stream layout is part of the deterministic contract.
pub fn generate_primordial_wells<R: Rng>(
    crust: &PlanetaryLayer,
    radius: f64,
    seed: &str,
    composition: &Composition,
    rng: &mut R,
) -> Vec<PrimordialWell> {
    let surface_area = 4.0 * PI * radius * radius;
    let raw_count = (surface_area * 1e-10 + rng.random::<f64>() * 5.0).floor() as i64;
    let count = (raw_count.max(MIN_WELLS as i64) as usize).min(MAX_WELLS);

    let crust_thickness = crust.thickness();

    let mut wells = Vec::with_capacity(count);
    for i in 0..count {
        let latitude = (rng.random::<f64>() - 0.5) * 180.0;
        let longitude = (rng.random::<f64>() - 0.5) * 360.0;

        // Degenerate crusts collapse the depth range onto its floor
        let depth_span = (crust_thickness - 100.0).max(0.0);
        let depth = 100.0 + rng.random::<f64>() * depth_span;

        let type_roll = rng.random::<f64>();
        let well_type = if type_roll < 0.3 {
            WellType::ThermalVent
        } else if type_roll < 0.6 {
            WellType::ChemicalPool
        } else if type_roll < 0.85 {
            WellType::GeothermalSpring
        } else {
            WellType::MineralRich
        };

        let depth_fraction = if crust_thickness > 0.0 {
            depth / crust_thickness
        } else {
            0.0
        };
        let temperature = 300.0 + depth_fraction * 1200.0;
        let pressure = 1e5 + depth * 30000.0;

        let well_composition = concentrate_volatiles(composition);
        let energy_level = energy_score(temperature, pressure, composition);

        wells.push(PrimordialWell {
            id: format!("well-{}-{}", seed, i),
            location: WellLocation {
                latitude,
                longitude,
                depth,
            },
            well_type,
            temperature,
            pressure,
            composition: well_composition,
            energy_level,
        });
    }

    wells
}

/// Pulls the life-relevant materials out of the bulk composition at fixed
/// concentration factors. Materials below 1% of the bulk are skipped.
fn concentrate_volatiles(composition: &Composition) -> BTreeMap<Material, f64> {
    let mut concentrated = BTreeMap::new();
    for (material, factor) in [
        (Material::H, 0.1),
        (Material::C, 0.1),
        (Material::N, 0.1),
        (Material::S, 0.05),
        (Material::Fe, 0.05),
    ] {
        if composition.fraction(material) > MIN_SOURCE_FRACTION {
            concentrated.insert(material, composition.mass_of(material) * factor);
        }
    }
    concentrated
}

/// Scores a well's energy potential in [0, 1]. Temperature and pressure
/// contribute triangular closeness terms peaking at 350 K and 5 MPa;
/// volatile abundance contributes the rest.
fn energy_score(temperature: f64, pressure: f64, composition: &Composition) -> f64 {
    let temp_score = if temperature > 300.0 && temperature < 400.0 {
        1.0
    } else {
        (1.0 - (temperature - 350.0).abs() / 200.0).max(0.0)
    };

    let pressure_score = if pressure > 1e6 && pressure < 1e7 {
        1.0
    } else {
        (1.0 - (pressure - 5e6).abs() / 1e7).max(0.0)
    };

    let volatile_fraction = composition.fraction(Material::H)
        + composition.fraction(Material::C)
        + composition.fraction(Material::N);
    let composition_score = (volatile_fraction / 0.3).clamp(0.0, 1.0);

    (0.3 * temp_score + 0.3 * pressure_score + 0.4 * composition_score).min(1.0)
}
