//! Layer stratification
//!
//! Splits the settled debris field into the four canonical layers. The
//! physical boundaries come from where particle mass actually sits:
//! particles are ranked by material density (densest settle deepest) and
//! walked against cumulative-mass thresholds, taking each boundary radius
//! from the first particle past the threshold. Material deposits are
//! assigned to layers by a separate density-bucket rule; the two
//! derivations are deliberately independent.
//!
//! A field with no surviving particles falls back to Earth-like boundary
//! radii with deposits spread across the layers by mass rank.

use debris::DebrisParticle;
use planetary::{Composition, LayerName, Material, MaterialDeposit, PlanetaryLayer};

/// Cumulative-mass thresholds closing each layer, innermost first.
const LAYER_MASS_THRESHOLDS: [f64; 4] = [0.25, 0.50, 0.90, 1.0];

/// Nominal temperature (K) and pressure (Pa) per layer, innermost first.
const LAYER_BANDS: [(f64, f64); 4] = [
    (5700.0, 3.6e11),
    (4500.0, 1.4e11),
    (1500.0, 2.4e10),
    (300.0, 1e5),
];

/// Nominal bulk density (kg/m³) for the outer three layers. The inner
/// core instead takes the density of the densest material present.
const OUTER_CORE_DENSITY: f64 = 11000.0;
const MANTLE_DENSITY: f64 = 4500.0;
const CRUST_DENSITY: f64 = 2800.0;

/// Inner-core density when the composition is empty.
const EMPTY_CORE_DENSITY: f64 = 13000.0;

/// Earth-like fallback boundary radii in meters, as [min, four maxes].
const FALLBACK_BOUNDARIES: [f64; 5] = [0.0, 1.2e6, 3.5e6, 6.0e6, 6.371e6];

/// Stratifies the surviving field into exactly four layers, innermost
/// first. Total deposit mass equals the composition's total mass.
pub fn stratify_layers(
    particles: &[DebrisParticle],
    composition: &Composition,
    total_mass: f64,
) -> Vec<PlanetaryLayer> {
    let boundaries = if particles.is_empty() || total_mass <= 0.0 {
        FALLBACK_BOUNDARIES
    } else {
        boundaries_from_particles(particles, total_mass)
    };

    let deposits_per_layer = if particles.is_empty() || total_mass <= 0.0 {
        deposits_by_rank(composition)
    } else {
        deposits_by_density(composition)
    };

    let inner_core_density = composition
        .densest_material()
        .map(|m| m.density())
        .unwrap_or(EMPTY_CORE_DENSITY);
    let densities = [
        inner_core_density,
        OUTER_CORE_DENSITY,
        MANTLE_DENSITY,
        CRUST_DENSITY,
    ];

    let surface_radius = boundaries[4];

    LayerName::ALL
        .into_iter()
        .zip(deposits_per_layer)
        .enumerate()
        .map(|(i, (name, materials))| {
            let min_radius = boundaries[i];
            let max_radius = boundaries[i + 1];
            let (temperature, pressure) = LAYER_BANDS[i];

            let midpoint = (min_radius + max_radius) / 2.0;
            let depth = (surface_radius - midpoint).max(0.0);
            let materials = materials
                .into_iter()
                .map(|(material, quantity)| MaterialDeposit {
                    material,
                    quantity,
                    depth,
                    hardness: material.hardness(),
                    density: material.density(),
                })
                .collect();

            PlanetaryLayer {
                name,
                min_radius,
                max_radius,
                materials,
                temperature,
                pressure,
                density: densities[i],
            }
        })
        .collect()
}

/// Walks density-ranked particles against the cumulative-mass thresholds
/// and reads each boundary radius off the first particle past it. A
/// running maximum keeps the boundaries monotone even though particle
/// distances are unordered.
fn boundaries_from_particles(particles: &[DebrisParticle], total_mass: f64) -> [f64; 5] {
    let mut ranked: Vec<&DebrisParticle> = particles.iter().collect();
    ranked.sort_by(|a, b| {
        b.material
            .density()
            .partial_cmp(&a.material.density())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let max_distance = ranked
        .iter()
        .map(|p| p.radial_distance())
        .fold(0.0, f64::max);

    let mut boundaries = [0.0f64; 5];
    let mut cumulative = 0.0;
    let mut index = 0;
    let mut running_max = 0.0f64;

    for (layer, threshold) in LAYER_MASS_THRESHOLDS.iter().enumerate() {
        let target = threshold * total_mass;
        // The particle that crosses the threshold is consumed; the
        // boundary sits at the next unconsumed particle's distance
        while index < ranked.len() && cumulative < target {
            cumulative += ranked[index].mass;
            index += 1;
        }

        let radius = if index < ranked.len() {
            ranked[index].radial_distance()
        } else {
            max_distance
        };

        running_max = running_max.max(radius);
        boundaries[layer + 1] = running_max;
    }

    // The outermost boundary always reaches the farthest particle
    boundaries[4] = boundaries[4].max(max_distance);
    boundaries
}

/// Assigns each material's full mass to one layer by density bucket.
fn deposits_by_density(composition: &Composition) -> [Vec<(Material, f64)>; 4] {
    let mut layers: [Vec<(Material, f64)>; 4] = Default::default();

    for (material, mass) in composition.iter() {
        if mass <= 0.0 {
            continue;
        }
        let density = material.density();
        let layer = if density > 10000.0 {
            0
        } else if density > 7000.0 {
            1
        } else if density > 3000.0 {
            2
        } else {
            3
        };
        layers[layer].push((material, mass));
    }

    layers
}

/// Fallback deposit assignment: materials ranked by mass descending are
/// spread across the four layers in rank order, heaviest masses deepest.
fn deposits_by_rank(composition: &Composition) -> [Vec<(Material, f64)>; 4] {
    let mut layers: [Vec<(Material, f64)>; 4] = Default::default();

    let ranked = composition.ranked_by_mass();
    let count = ranked.len();
    for (i, material) in ranked.into_iter().enumerate() {
        let mass = composition.mass_of(material);
        if mass <= 0.0 {
            continue;
        }
        let layer = ((i * 4) / count).min(3);
        layers[layer].push((material, mass));
    }

    layers
}
